//! Traffic signal state machine.

use super::cell::SignalColor;
use super::guard::TickGuard;
use serde::{Deserialize, Serialize};

/// A transition out of one color, in priority order.
struct CycleRule {
    from: SignalColor,
    to: SignalColor,
    guard: TickGuard,
    resets_counter: bool,
}

/// Fixed signal cycle. Evaluated top to bottom; the first matching rule wins.
///
/// Only Orange -> Red resets the tick counter. Green and Red keep counting
/// through their transitions.
const CYCLE: [CycleRule; 3] = [
    CycleRule {
        from: SignalColor::Green,
        to: SignalColor::Orange,
        guard: TickGuard::new(5, 0),
        resets_counter: false,
    },
    CycleRule {
        from: SignalColor::Red,
        to: SignalColor::Green,
        guard: TickGuard::new(5, 0),
        resets_counter: false,
    },
    CycleRule {
        from: SignalColor::Orange,
        to: SignalColor::Red,
        guard: TickGuard::new(5, 1),
        resets_counter: true,
    },
];

/// A traffic signal fixed at one road position.
///
/// Signals are plain values: [`Signal::advance`] consumes the signal and
/// returns its state one tick later.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::{Signal, SignalColor};
///
/// let mut signal = Signal::new(SignalColor::Green, 3);
/// for _ in 0..5 {
///     signal = signal.advance();
/// }
///
/// assert_eq!(signal.color(), SignalColor::Orange);
/// assert_eq!(signal.position(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Signal {
    color: SignalColor,
    position: usize,
    ticks_in_state: u32,
}

impl Signal {
    pub fn new(color: SignalColor, position: usize) -> Self {
        Self {
            color,
            position,
            ticks_in_state: 0,
        }
    }

    pub fn color(&self) -> SignalColor {
        self.color
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn ticks_in_state(&self) -> u32 {
        self.ticks_in_state
    }

    /// Advance the signal by one tick.
    ///
    /// Increments the tick counter, then applies at most one transition
    /// from the fixed cycle.
    pub fn advance(self) -> Self {
        let ticks = self.ticks_in_state + 1;
        let rule = CYCLE
            .iter()
            .find(|rule| rule.from == self.color && rule.guard.check(ticks));

        match rule {
            Some(rule) => Self {
                color: rule.to,
                ticks_in_state: if rule.resets_counter { 0 } else { ticks },
                ..self
            },
            None => Self {
                ticks_in_state: ticks,
                ..self
            },
        }
    }
}
