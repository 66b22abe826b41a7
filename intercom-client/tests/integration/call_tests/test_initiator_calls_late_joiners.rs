use intercom_client::Reconciler;
use intercom_core::{CallKind, Participant, PeerId};

use crate::{create_test_coordinator, init_tracing};

fn roster() -> Vec<Participant> {
    ["alice", "bob", "carol"]
        .into_iter()
        .map(|name| Participant {
            user_id: PeerId::from(name),
            user_name: name.to_owned(),
        })
        .collect()
}

#[tokio::test]
async fn test_initiator_calls_late_joiners() {
    init_tracing();

    let h = create_test_coordinator("alice");
    let bob = PeerId::from("bob");
    let carol = PeerId::from("carol");

    h.coordinator
        .start_call(&bob, CallKind::Audio)
        .await
        .expect("start_call");
    h.transport.set_participants(roster()).await;

    let mut reconciler = Reconciler::new(&h.coordinator);
    reconciler.tick().await;

    assert!(h.coordinator.has_session(&carol), "late joiner was called");
    let offered_to: Vec<_> = h
        .transport
        .sent_offers()
        .await
        .into_iter()
        .map(|(receiver, _)| receiver)
        .collect();
    assert_eq!(offered_to, vec![bob, carol]);
}

#[tokio::test]
async fn test_non_initiator_leaves_participants_alone() {
    init_tracing();

    let h = create_test_coordinator("dave");
    h.transport.set_participants(roster()).await;

    let mut reconciler = Reconciler::new(&h.coordinator);
    reconciler.tick().await;

    assert_eq!(h.coordinator.session_count(), 0);
    assert!(h.transport.sent_offers().await.is_empty());
}
