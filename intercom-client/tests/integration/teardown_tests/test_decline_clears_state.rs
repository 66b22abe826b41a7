use intercom_client::Reconciler;
use intercom_core::PeerId;

use crate::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_decline_clears_state() {
    init_tracing();

    let h = create_test_coordinator("carol");
    let alice = PeerId::from("alice");

    h.transport.inject_offer("alice", "alice-offer").await;
    let mut reconciler = Reconciler::new(&h.coordinator);
    reconciler.tick().await;
    assert!(h.coordinator.has_session(&alice));

    h.coordinator.decline_call(&alice).await;

    assert!(!h.coordinator.has_session(&alice));
    assert_eq!(h.media.closed_peers().await, vec![alice.clone()]);
    assert_eq!(h.notifier.ended().await, vec![alice]);
}
