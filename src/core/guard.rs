//! Tick-count guards controlling signal transitions.
//!
//! A guard is a pure predicate over the number of ticks a signal has spent
//! since its counter was last reset. Guards carry no state of their own.

/// Pure predicate deciding whether a signal may leave its current color.
///
/// The guard passes when the elapsed tick count `t` satisfies
/// `t > 1 && t % period == offset`.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::TickGuard;
///
/// let guard = TickGuard::new(5, 1);
///
/// assert!(!guard.check(1));
/// assert!(guard.check(6));
/// assert!(guard.check(11));
/// assert!(!guard.check(10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickGuard {
    period: u32,
    offset: u32,
}

impl TickGuard {
    /// Create a guard.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub const fn new(period: u32, offset: u32) -> Self {
        assert!(period > 0, "tick guard period must be non-zero");
        Self { period, offset }
    }

    /// Check whether `ticks` elapsed ticks allow the transition.
    pub fn check(&self, ticks: u32) -> bool {
        ticks > 1 && ticks % self.period == self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_never_passes_before_second_tick() {
        let guard = TickGuard::new(5, 0);
        assert!(!guard.check(0));
        assert!(!guard.check(1));

        let guard = TickGuard::new(5, 1);
        assert!(!guard.check(1));
    }

    #[test]
    fn guard_passes_on_matching_remainder() {
        let guard = TickGuard::new(5, 0);
        let passing: Vec<u32> = (0..21).filter(|t| guard.check(*t)).collect();
        assert_eq!(passing, vec![5, 10, 15, 20]);
    }

    #[test]
    fn guard_with_offset_shifts_the_window() {
        let guard = TickGuard::new(5, 1);
        let passing: Vec<u32> = (0..21).filter(|t| guard.check(*t)).collect();
        assert_eq!(passing, vec![6, 11, 16]);
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = TickGuard::new(5, 0);
        assert_eq!(guard.check(10), guard.check(10));
    }

    #[test]
    #[should_panic(expected = "period must be non-zero")]
    fn zero_period_is_rejected() {
        TickGuard::new(0, 0);
    }
}
