use intercom_core::{CallKind, IceCandidate, PeerId};

use crate::{create_test_coordinator, init_tracing};

/// Candidates produced by the local media layer go straight out to the peer.
#[tokio::test]
async fn test_local_candidates_forwarded() {
    init_tracing();

    let h = create_test_coordinator("alice");
    let bob = PeerId::from("bob");

    h.coordinator
        .start_call(&bob, CallKind::Audio)
        .await
        .expect("start_call");
    h.coordinator
        .local_candidate_generated(&bob, IceCandidate::from("local-candidate"))
        .await;

    assert_eq!(
        h.transport.sent_candidates().await,
        vec![(bob, IceCandidate::from("local-candidate"))]
    );
}
