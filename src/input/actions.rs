//! Game action definitions

/// All logical controls the game reads
///
/// Default bindings (keyboard / gamepad):
/// - MoveLeft  = Left arrow, A / D-pad left, left stick
/// - MoveRight = Right arrow, D / D-pad right, left stick
/// - Fire      = Space / South face button (A on Xbox, Cross on PlayStation)
/// - Confirm   = Enter / Start (accepts "Play Again")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Confirm,
}
