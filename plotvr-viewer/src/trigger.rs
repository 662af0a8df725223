//! Headset trigger handling

use log::debug;
use plotvr_navigation::NavigationState;
use std::time::{Duration, Instant};

/// Two triggers closer than this form a double click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// What a trigger press amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Single,
    DoubleClick,
}

/// Remembers the previous trigger press
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerState {
    last: Option<Instant>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every press toggles walking. Whether it also completes a double
    /// click is reported to the caller.
    pub fn on_trigger(&mut self, now: Instant, nav: &mut NavigationState) -> TriggerOutcome {
        let walking = nav.toggle_walking();
        let outcome = match self.last {
            Some(last) if now.saturating_duration_since(last) < DOUBLE_CLICK_WINDOW => {
                TriggerOutcome::DoubleClick
            }
            _ => TriggerOutcome::Single,
        };
        self.last = Some(now);
        debug!("trigger: walking={walking} {outcome:?}");
        outcome
    }
}
