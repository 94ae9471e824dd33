//! Core data model for the stopwatch.
//! `TimerState` is the counter itself; `Stopwatch` wraps it with the
//! bookkeeping needed to keep exactly one scheduled tick outstanding.

use crate::config::StopwatchConfig;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerState {
    /// Always in 0..=59.
    pub seconds: u8,
    /// Always in 0..=59.
    pub minutes: u8,
    /// Never resets.
    pub hours: u64,
    pub running: bool,
}

impl TimerState {
    /// "H : M : S", decimal, no zero-padding.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : {}", self.hours, self.minutes, self.seconds)
    }
}

/// Advances the counter by one second. `running` is carried through untouched.
pub fn tick(state: TimerState) -> (TimerState, String) {
    let mut next = state;
    if next.seconds < 59 {
        next.seconds += 1;
    } else if next.minutes < 59 {
        next.seconds = 0;
        next.minutes += 1;
    } else {
        next.seconds = 0;
        next.minutes = 0;
        next.hours = next.hours.saturating_add(1);
    }
    let display = next.formatted();
    (next, display)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    pub timer: TimerState,
    /// Last rendered "H : M : S" string; empty until the first tick.
    pub display: String,
    /// A delayed tick is scheduled and has not fired yet.
    pub pending: bool,
    /// Bumped every time a new delayed tick must be scheduled.
    pub armed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopwatchAction {
    Toggle,
    Fire, // the outstanding delayed tick fired
    /// The delayed tick could not be scheduled; nothing is outstanding.
    Stalled,
}

impl Stopwatch {
    pub fn apply(&mut self, action: StopwatchAction) {
        match action {
            StopwatchAction::Toggle => {
                self.timer.running = !self.timer.running;
                // A still-pending tick will see `running` and reschedule on its own.
                if self.timer.running && !self.pending {
                    self.arm();
                }
            }
            StopwatchAction::Fire => {
                self.pending = false;
                let (next, display) = tick(self.timer);
                self.timer = next;
                self.display = display;
                if self.timer.running {
                    self.arm();
                }
            }
            StopwatchAction::Stalled => {
                self.pending = false;
            }
        }
    }

    fn arm(&mut self) {
        self.pending = true;
        self.armed = self.armed.wrapping_add(1);
    }

    pub fn button_label<'a>(&self, config: &'a StopwatchConfig) -> &'a str {
        if self.timer.running {
            &config.stop_label
        } else {
            &config.start_label
        }
    }
}

impl Reducible for Stopwatch {
    type Action = StopwatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}
