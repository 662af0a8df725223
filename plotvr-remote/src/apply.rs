//! Applying remote actions to the navigation state

use crate::protocol::{Action, LoadRequest, NavigationIntent};
use log::debug;
use plotvr_navigation::NavigationState;

/// What applying an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The navigation state was mutated
    Applied,
    /// Nothing changed
    Ignored,
    /// The caller must start a data load
    Load(LoadRequest),
}

/// Apply one action.
///
/// Move intents are only honoured in free mode; while the camera tracks the
/// head they are dropped. A failed switch back to tracking leaves the state
/// free and reports [`Effect::Ignored`].
pub fn apply_action(action: Action, nav: &mut NavigationState) -> Effect {
    match action {
        Action::Load(request) => Effect::Load(request),
        Action::Ignore => Effect::Ignored,
        Action::Navigate(intent) => apply_intent(intent, nav),
    }
}

fn apply_intent(intent: NavigationIntent, nav: &mut NavigationState) -> Effect {
    match intent {
        NavigationIntent::ToggleWalking => {
            nav.toggle_walking();
            Effect::Applied
        }
        NavigationIntent::ToggleFloor => {
            nav.toggle_floor();
            Effect::Applied
        }
        NavigationIntent::ToggleTrackHead => match nav.toggle_track_head() {
            Ok(_) => Effect::Applied,
            Err(err) => {
                debug!("tracking switch rejected: {err}");
                Effect::Ignored
            }
        },
        NavigationIntent::Move { axis, direction } => {
            if nav.is_tracking() {
                debug!("ignoring {axis:?} move while tracking the head");
                return Effect::Ignored;
            }
            nav.manual_move(axis, direction);
            Effect::Applied
        }
    }
}
