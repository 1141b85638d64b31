//! Fixed-step clock
//!
//! Frame times vary; the simulation does not. Frame time is accumulated and
//! paid out as whole ticks, with the remainder carried to the next frame.
//! After a long stall (window dragged, tab hidden) the backlog is capped so
//! the game does not fast-forward through dozens of ticks at once.

#[derive(Debug, Clone)]
pub struct FixedStep {
    /// Seconds per tick
    step: f64,
    /// Unspent time
    accumulator: f64,
    max_ticks: u32,
}

impl FixedStep {
    pub fn new(tick_rate: u32, max_ticks: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f64,
            accumulator: 0.0,
            max_ticks: max_ticks.max(1),
        }
    }

    /// Add a frame's elapsed time, return how many ticks to run now
    pub fn advance(&mut self, frame_seconds: f64) -> u32 {
        if frame_seconds.is_finite() && frame_seconds > 0.0 {
            self.accumulator += frame_seconds;
        }

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop the backlog we refused to run
        if ticks == self.max_ticks && self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_and_remainder() {
        let mut clock = FixedStep::new(60, 5);
        assert_eq!(clock.advance(1.0 / 120.0), 0);
        assert_eq!(clock.advance(1.0 / 120.0), 1);
        assert_eq!(clock.advance(2.5 / 60.0), 2);
        assert_eq!(clock.advance(0.2 / 60.0), 0);
        assert_eq!(clock.advance(0.4 / 60.0), 1);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut clock = FixedStep::new(60, 5);
        assert_eq!(clock.advance(1.0), 5);
        // The rest of the stall is forgotten
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_ignores_bad_frame_times() {
        let mut clock = FixedStep::new(60, 5);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.advance(f64::INFINITY), 0);
    }
}
