use intercom_client::{CallError, MediaError};
use intercom_core::{CallKind, PeerId};

use crate::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_media_denial_surfaces_error() {
    init_tracing();

    let h = create_test_coordinator("alice");
    let bob = PeerId::from("bob");
    h.media.deny_media(true);

    let err = h
        .coordinator
        .start_call(&bob, CallKind::Video)
        .await
        .expect_err("denied capture must fail the call");

    assert!(matches!(
        err,
        CallError::Media(MediaError::Acquisition(_))
    ));
    assert_eq!(h.coordinator.session_count(), 0);
    assert!(h.transport.sent_offers().await.is_empty());
}
