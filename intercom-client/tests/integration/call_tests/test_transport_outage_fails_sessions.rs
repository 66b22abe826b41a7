use intercom_client::{CoordinatorConfig, Reconciler, SessionState};
use intercom_core::{CallKind, PeerId};

use crate::utils::{drain_events, state_changes_for};
use crate::{create_test_coordinator_with_config, init_tracing};

/// Transient poll failures are invisible below the threshold; once the
/// threshold trips, live sessions move to Failed and the UI hears about it.
#[tokio::test]
async fn test_transport_outage_fails_sessions() {
    init_tracing();

    let config = CoordinatorConfig {
        failure_threshold: 3,
        ..CoordinatorConfig::default()
    };
    let mut h = create_test_coordinator_with_config("alice", config);
    let bob = PeerId::from("bob");

    h.coordinator
        .start_call(&bob, CallKind::Audio)
        .await
        .expect("start_call");
    h.transport.set_poll_failure(true);

    let mut reconciler = Reconciler::new(&h.coordinator);
    reconciler.tick().await;
    reconciler.tick().await;
    assert!(
        h.coordinator.has_session(&bob),
        "below the threshold the outage is invisible"
    );

    reconciler.tick().await;
    assert!(!h.coordinator.has_session(&bob));

    let events = drain_events(&mut h.events);
    assert_eq!(
        state_changes_for(&events, &bob),
        vec![SessionState::OfferSent, SessionState::Failed]
    );
}
