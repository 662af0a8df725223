//! Remote control protocol for plotvr
//!
//! Text messages from the control channel are parsed into [`Command`]s,
//! classified into [`Action`]s and applied to a
//! [`NavigationState`](plotvr_navigation::NavigationState). Directional
//! moves only take effect while head tracking is off.

pub mod protocol;
pub mod apply;
pub mod bus;

pub use protocol::{dispatch, Action, Command, LoadRequest, NavigationIntent, UnknownCommand};
pub use apply::{apply_action, Effect};
pub use bus::{create_command_bus, drain_pending_commands, submit_message, CommandReceiver, CommandSender};
