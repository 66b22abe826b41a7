use anyhow::{Result, bail};
use intercom_client::{CoordinatorEvent, SessionState};
use intercom_core::PeerId;
use tokio::sync::mpsc;

/// Timeout for waiting on a coordinator event (ms).
pub const EVENT_TIMEOUT_MS: u64 = 5000;

/// Pull everything currently sitting in the event channel.
pub fn drain_events(events: &mut mpsc::UnboundedReceiver<CoordinatorEvent>) -> Vec<CoordinatorEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

/// The session-state trajectory a peer went through, in emission order.
pub fn state_changes_for(events: &[CoordinatorEvent], peer: &PeerId) -> Vec<SessionState> {
    events
        .iter()
        .filter_map(|event| match event {
            CoordinatorEvent::SessionStateChanged { peer_id, state } if peer_id == peer => {
                Some(*state)
            }
            _ => None,
        })
        .collect()
}

/// Wait for the next event matching the predicate, skipping others.
pub async fn wait_for_event(
    events: &mut mpsc::UnboundedReceiver<CoordinatorEvent>,
    matches: impl Fn(&CoordinatorEvent) -> bool,
) -> Result<CoordinatorEvent> {
    let deadline = std::time::Duration::from_millis(EVENT_TIMEOUT_MS);
    let wait = async {
        while let Some(event) = events.recv().await {
            if matches(&event) {
                return Some(event);
            }
        }
        None
    };
    match tokio::time::timeout(deadline, wait).await {
        Ok(Some(event)) => Ok(event),
        Ok(None) => bail!("event channel closed"),
        Err(_) => bail!("timeout waiting for event"),
    }
}
