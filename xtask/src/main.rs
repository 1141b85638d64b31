//! SKYFIRE release tooling
//!
//! Usage:
//!   cargo xtask build-web [--dev]         # wasm build staged in dist/web
//!   cargo xtask package-itch              # dist/skyfire-itch.zip from dist/web
//!   cargo xtask package-native [--platform linux|macos|windows]
//!                                         # release binary + assets in dist/native/<platform>

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Binary/package name, also the wasm file name
const GAME: &str = "skyfire";

/// JS loader matching the macroquad version in Cargo.toml
const MQ_JS_BUNDLE_URL: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Parser)]
#[command(name = "xtask", about = "SKYFIRE build and packaging")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the wasm binary and stage a playable page in dist/web
    BuildWeb {
        /// Tag the page title as a dev build
        #[arg(long)]
        dev: bool,
    },
    /// Zip dist/web for itch.io
    PackageItch,
    /// Release build for one desktop platform, with assets next to the binary
    PackageNative {
        /// Defaults to the host platform
        #[arg(long, value_enum)]
        platform: Option<Platform>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Macos
        } else {
            Platform::Linux
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        }
    }

    fn binary_name(self) -> String {
        match self {
            Platform::Windows => format!("{}.exe", GAME),
            _ => GAME.to_string(),
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Task::BuildWeb { dev } => build_web(dev),
        Task::PackageItch => package_itch(),
        Task::PackageNative { platform } => package_native(platform.unwrap_or_else(Platform::host)),
    }
}

/// Workspace root (parent of the xtask crate)
fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is not inside the workspace")
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("could not start {:?}", cmd.get_program()))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd.get_program(), status);
    }
    Ok(())
}

/// `cargo build --release`, optionally for a cross target
fn cargo_release(root: &Path, target: Option<&str>) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.current_dir(root).args(["build", "--release", "--bin", GAME]);
    if let Some(target) = target {
        cmd.args(["--target", target]);
    }
    run(&mut cmd)
}

/// Remove `dir` if present and recreate it empty
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("clearing {}", dir.display()))?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Mirror `assets/` into `dest/assets/`
fn stage_assets(root: &Path, dest: &Path) -> Result<()> {
    copy_tree(&root.join("assets"), &dest.join("assets"))
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

fn build_web(dev: bool) -> Result<()> {
    let root = workspace_root()?;
    let dist = root.join("dist/web");

    println!("Building {} for {}...", GAME, WASM_TARGET);
    cargo_release(&root, Some(WASM_TARGET))?;
    fresh_dir(&dist)?;

    let wasm = format!("{}.wasm", GAME);
    fs::copy(root.join("target").join(WASM_TARGET).join("release").join(&wasm), dist.join(&wasm))
        .context("wasm binary missing after build")?;

    let mut page = fs::read_to_string(root.join("web/index.html")).context("web/index.html missing")?;
    if dev {
        page = page
            .replace("<title>SKYFIRE", "<title>[DEV] SKYFIRE")
            .replace("Loading SKYFIRE", "Loading SKYFIRE (DEV)");
    }
    fs::write(dist.join("index.html"), page)?;

    println!("Fetching macroquad JS loader...");
    run(Command::new("curl")
        .args(["-L", "--fail", "-o"])
        .arg(dist.join("mq_js_bundle.js"))
        .arg(MQ_JS_BUNDLE_URL))?;

    stage_assets(&root, &dist)?;

    println!("Web build ready in {}", dist.display());
    Ok(())
}

fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = workspace_root()?;
    let zip_name = format!("{}-itch.zip", GAME);
    let zip_path = root.join("dist").join(&zip_name);
    if zip_path.exists() {
        fs::remove_file(&zip_path)?;
    }

    // itch.io wants index.html at the zip root
    run(Command::new("zip")
        .current_dir(root.join("dist/web"))
        .args(["-r", "-q"])
        .arg(&zip_path)
        .arg("."))?;

    println!("itch.io upload: {}", zip_path.display());
    Ok(())
}

fn package_native(platform: Platform) -> Result<()> {
    let root = workspace_root()?;
    let dist = root.join("dist/native").join(platform.dir_name());

    if platform != Platform::host() {
        bail!("package-native builds for the host only; run it on {}", platform.dir_name());
    }

    println!("Building {} release for {}...", GAME, platform.dir_name());
    cargo_release(&root, None)?;
    fresh_dir(&dist)?;

    let binary = platform.binary_name();
    fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .with_context(|| format!("release binary {} missing", binary))?;
    stage_assets(&root, &dist)?;

    println!("Native build ready in {}", dist.display());
    Ok(())
}
