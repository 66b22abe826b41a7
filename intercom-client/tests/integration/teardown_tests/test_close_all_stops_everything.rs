use intercom_client::CallError;
use intercom_core::{CallKind, PeerId};
use std::time::Duration;

use crate::{create_test_coordinator, init_tracing};

/// After close_all: no sessions, no buffered candidates, and the polling
/// loop never touches the transport again.
#[tokio::test(start_paused = true)]
async fn test_close_all_stops_everything() {
    init_tracing();

    let h = create_test_coordinator("alice");
    let bob = PeerId::from("bob");
    let carol = PeerId::from("carol");

    h.coordinator.join().await.expect("join");
    assert_eq!(h.transport.joined_rooms().await.len(), 1);
    h.coordinator
        .start_call(&bob, CallKind::Audio)
        .await
        .expect("start_call");
    // A candidate from a peer with no session yet ends up buffered.
    h.transport.inject_candidate("carol", "early-candidate").await;

    let handle = h.coordinator.spawn_reconciler();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(h.coordinator.buffered_candidates(&carol), 1);

    h.coordinator.close_all().await;
    h.coordinator.close_all().await; // idempotent
    handle.await.expect("reconciler task");

    let calls_after_close = h.transport.transport_calls();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(
        h.transport.transport_calls(),
        calls_after_close,
        "no transport traffic after close_all"
    );

    assert_eq!(h.coordinator.session_count(), 0);
    assert_eq!(h.coordinator.buffered_candidates(&bob), 0);
    assert_eq!(h.coordinator.buffered_candidates(&carol), 0);
    assert!(h.media.closed_peers().await.contains(&bob));

    let err = h
        .coordinator
        .start_call(&bob, CallKind::Audio)
        .await
        .expect_err("coordinator is shut down");
    assert!(matches!(err, CallError::Terminated));
}
