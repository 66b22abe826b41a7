use intercom_core::{CallKind, InvitationId, PeerId, RoomId};
use std::time::Duration;

use crate::{create_test_coordinator, init_tracing};

/// A room opened while a call is running offers "join call" until the record
/// goes stale or the call is explicitly ended.
#[tokio::test(start_paused = true)]
async fn test_join_affordance_lookup() {
    init_tracing();

    let h = create_test_coordinator("carol");
    let room = RoomId::from("room-1");

    h.coordinator
        .handle_room_announcement(
            room.clone(),
            PeerId::from("alice"),
            "Alice".to_owned(),
            CallKind::Audio,
            InvitationId::new(),
            "General",
        )
        .await;

    tokio::time::advance(Duration::from_secs(60 * 60 + 59 * 60)).await;
    assert!(
        h.coordinator.active_call(&room).is_some(),
        "still joinable at 1h59m"
    );

    tokio::time::advance(Duration::from_secs(2 * 60)).await;
    assert!(
        h.coordinator.active_call(&room).is_none(),
        "stale at 2h01m"
    );

    // Explicit termination clears a fresh record immediately.
    h.coordinator
        .handle_room_announcement(
            room.clone(),
            PeerId::from("alice"),
            "Alice".to_owned(),
            CallKind::Audio,
            InvitationId::new(),
            "General",
        )
        .await;
    assert!(h.coordinator.active_call(&room).is_some());
    h.coordinator.end_room_call(&room);
    assert!(h.coordinator.active_call(&room).is_none());
}
