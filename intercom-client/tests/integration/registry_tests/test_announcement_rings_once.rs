use intercom_client::CoordinatorEvent;
use intercom_core::{CallKind, InvitationId, PeerId, RoomId};

use crate::utils::drain_events;
use crate::{create_test_coordinator, init_tracing};

/// Polling re-delivers announcements; the invitation id keeps a room from
/// ringing twice for the same attempt. Our own announcements never ring.
#[tokio::test]
async fn test_announcement_rings_once() {
    init_tracing();

    let mut h = create_test_coordinator("carol");
    let room = RoomId::from("room-1");
    let invitation = InvitationId::new();

    for _ in 0..3 {
        h.coordinator
            .handle_room_announcement(
                room.clone(),
                PeerId::from("alice"),
                "Alice".to_owned(),
                CallKind::Video,
                invitation,
                "General",
            )
            .await;
    }
    // An echo of something we announced ourselves is dropped outright.
    h.coordinator
        .handle_room_announcement(
            room.clone(),
            PeerId::from("carol"),
            "Carol".to_owned(),
            CallKind::Audio,
            InvitationId::new(),
            "General",
        )
        .await;

    let incoming = h.notifier.incoming_calls().await;
    assert_eq!(incoming, vec![("Alice".to_owned(), CallKind::Video)]);
    assert_eq!(h.notifier.announced().await.len(), 1);

    let events = drain_events(&mut h.events);
    let rings = events
        .iter()
        .filter(|e| matches!(e, CoordinatorEvent::IncomingCall { .. }))
        .count();
    let announcements = events
        .iter()
        .filter(|e| matches!(e, CoordinatorEvent::CallAnnounced { .. }))
        .count();
    assert_eq!(rings, 1);
    assert_eq!(announcements, 1);

    let record = h.coordinator.active_call(&room).expect("record kept");
    assert_eq!(record.invitation_id, invitation);
}
