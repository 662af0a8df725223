//! Command queue between control listeners and the render loop
//!
//! Listeners parse messages at the boundary and enqueue [`Command`]s. The
//! render loop drains the queue at a fixed point in each frame, so only one
//! context ever mutates the navigation state.

use crate::apply::{apply_action, Effect};
use crate::protocol::{Action, Command, LoadRequest};
use flume::{Receiver, Sender, TryRecvError, TrySendError};
use log::{debug, warn};
use plotvr_navigation::NavigationState;

pub type CommandSender = Sender<Command>;
pub type CommandReceiver = Receiver<Command>;

/// Create a bounded command queue
pub fn create_command_bus(capacity: usize) -> (CommandSender, CommandReceiver) {
    flume::bounded(capacity)
}

/// Parse a raw control message and enqueue it.
///
/// Returns false when the message is unknown or the queue cannot take it.
pub fn submit_message(sender: &CommandSender, message: &str) -> bool {
    let command = match message.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            debug!("{err}");
            return false;
        }
    };
    match sender.try_send(command) {
        Ok(()) => true,
        Err(TrySendError::Full(cmd)) => {
            warn!("control command queue full; dropping {cmd}");
            false
        }
        Err(TrySendError::Disconnected(cmd)) => {
            warn!("control command queue disconnected; dropping {cmd}");
            false
        }
    }
}

/// Apply every queued command in arrival order and collect load requests
pub fn drain_pending_commands(
    receiver: &CommandReceiver,
    nav: &mut NavigationState,
) -> Vec<LoadRequest> {
    let mut loads = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(command) => {
                debug!("applying control command {command}");
                if let Effect::Load(request) = apply_action(Action::from(command), nav) {
                    loads.push(request);
                }
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    loads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_messages_are_not_queued() {
        let (tx, rx) = create_command_bus(4);
        assert!(!submit_message(&tx, "jump"));
        assert!(rx.is_empty());
    }

    #[test]
    fn test_full_queue_drops() {
        let (tx, _rx) = create_command_bus(1);
        assert!(submit_message(&tx, "f"));
        assert!(!submit_message(&tx, "f"));
    }

    #[test]
    fn test_drain_applies_in_order() {
        let (tx, rx) = create_command_bus(8);
        for message in ["space", "x", "period", "f", "r"] {
            assert!(submit_message(&tx, message));
        }
        let mut nav = NavigationState::default();
        let loads = drain_pending_commands(&rx, &mut nav);
        assert_eq!(loads, vec![LoadRequest::DataRefresh, LoadRequest::SessionReload]);
        assert!(nav.is_walking());
        assert!(!nav.is_tracking());
        assert!(!nav.draws_floor());
        assert!(rx.is_empty());
    }

    #[test]
    fn test_disconnected_listener_leaves_state_alone() {
        let (tx, rx) = create_command_bus(8);
        submit_message(&tx, "space");
        drop(tx);
        let mut nav = NavigationState::default();
        drain_pending_commands(&rx, &mut nav);
        assert!(nav.is_walking());
        let camera = nav.camera();
        assert!(drain_pending_commands(&rx, &mut nav).is_empty());
        assert_eq!(nav.camera(), camera);
    }
}
