use crate::session::SessionState;
use intercom_core::{CallKind, CallRecord, InvitationId, PeerId, RoomId};

/// Outward-facing events. The surrounding application (UI state, toasts,
/// ringtone) subscribes to the receiver handed out by
/// [`CallCoordinator::new`](crate::CallCoordinator::new); the coordinator
/// never reaches into host state directly.
#[derive(Debug, Clone)]
pub enum CoordinatorEvent {
    IncomingCall {
        peer_id: PeerId,
        kind: CallKind,
        invitation_id: InvitationId,
    },
    SessionStateChanged {
        peer_id: PeerId,
        state: SessionState,
    },
    CallAnnounced {
        room_id: RoomId,
        record: CallRecord,
    },
}
