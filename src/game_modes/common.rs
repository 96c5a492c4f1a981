// Helpers shared by match runners

use std::time::{Duration, Instant};

/// Time left in a tick that began at `tick_start`, zero once it has overrun
pub fn remaining_in_tick(tick_start: Instant, tick: Duration) -> Duration {
    tick.saturating_sub(tick_start.elapsed())
}

/// Sleep out the rest of the tick so realtime matches hold their frame rate.
/// Call after the tick's work is done.
pub fn pace_tick(tick_start: Instant, tick: Duration) {
    let remaining = remaining_in_tick(tick_start, tick);
    if !remaining.is_zero() {
        std::thread::sleep(remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrun_tick_has_nothing_left() {
        let start = Instant::now() - Duration::from_millis(50);
        assert_eq!(remaining_in_tick(start, Duration::from_millis(16)), Duration::ZERO);
    }

    #[test]
    fn test_fresh_tick_is_bounded_by_its_length() {
        let tick = Duration::from_millis(16);
        assert!(remaining_in_tick(Instant::now(), tick) <= tick);
    }
}
