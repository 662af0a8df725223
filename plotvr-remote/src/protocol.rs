//! Text command vocabulary of the control channel
//!
//! One command per message, case-sensitive:
//!
//! | message | command |
//! |---|---|
//! | `r` | full session reload |
//! | `reload_data`, `x` | data refresh |
//! | `space` | toggle walking |
//! | `period`, `Tab` | toggle head tracking |
//! | `f` | toggle floor |
//! | `a`/`Left`, `d`/`Right` | move along the right axis |
//! | `w`/`Up`, `s`/`Down` | move along the forward axis |
//! | `W-Shift`/`Up-Shift`, `S-Shift`/`Down-Shift` | move along the up axis |

use plotvr_navigation::{Axis, Direction};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A parsed control message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Reload,
    RefreshData,
    ToggleWalking,
    ToggleTrackHead,
    ToggleFloor,
    Move { axis: Axis, direction: Direction },
}

/// A message outside the command vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown remote command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        use Axis::*;
        use Direction::*;

        let command = match message {
            "r" => Command::Reload,
            "reload_data" | "x" => Command::RefreshData,
            "space" => Command::ToggleWalking,
            "period" | "Tab" => Command::ToggleTrackHead,
            "f" => Command::ToggleFloor,
            "a" | "Left" => Command::Move { axis: Right, direction: Negative },
            "d" | "Right" => Command::Move { axis: Right, direction: Positive },
            "w" | "Up" => Command::Move { axis: Forward, direction: Positive },
            "s" | "Down" => Command::Move { axis: Forward, direction: Negative },
            "W-Shift" | "Up-Shift" => Command::Move { axis: Up, direction: Positive },
            "S-Shift" | "Down-Shift" => Command::Move { axis: Up, direction: Negative },
            other => return Err(UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

impl Command {
    /// Canonical wire spelling
    pub fn as_wire(&self) -> &'static str {
        use Axis::*;
        use Direction::*;

        match self {
            Command::Reload => "r",
            Command::RefreshData => "reload_data",
            Command::ToggleWalking => "space",
            Command::ToggleTrackHead => "period",
            Command::ToggleFloor => "f",
            Command::Move { axis: Right, direction: Negative } => "a",
            Command::Move { axis: Right, direction: Positive } => "d",
            Command::Move { axis: Forward, direction: Positive } => "w",
            Command::Move { axis: Forward, direction: Negative } => "s",
            Command::Move { axis: Up, direction: Positive } => "W-Shift",
            Command::Move { axis: Up, direction: Negative } => "S-Shift",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Which kind of data load a command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    /// Restart the whole session, re-fetching data
    SessionReload,
    /// Re-fetch data only
    DataRefresh,
}

/// A navigation mutation requested remotely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    ToggleWalking,
    ToggleTrackHead,
    ToggleFloor,
    Move { axis: Axis, direction: Direction },
}

/// Effect class of a control message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load(LoadRequest),
    Navigate(NavigationIntent),
    Ignore,
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Reload => Action::Load(LoadRequest::SessionReload),
            Command::RefreshData => Action::Load(LoadRequest::DataRefresh),
            Command::ToggleWalking => Action::Navigate(NavigationIntent::ToggleWalking),
            Command::ToggleTrackHead => Action::Navigate(NavigationIntent::ToggleTrackHead),
            Command::ToggleFloor => Action::Navigate(NavigationIntent::ToggleFloor),
            Command::Move { axis, direction } => {
                Action::Navigate(NavigationIntent::Move { axis, direction })
            }
        }
    }
}

/// Map a raw control message to its action. Unknown messages are ignored.
pub fn dispatch(message: &str) -> Action {
    message
        .parse::<Command>()
        .map(Action::from)
        .unwrap_or(Action::Ignore)
}
