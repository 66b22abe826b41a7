use crate::coordinator::CallCoordinator;
use crate::event::CoordinatorEvent;
use intercom_core::{CallKind, CallRecord, InvitationId, PeerId, RoomId};
use tracing::{debug, info};

impl CallCoordinator {
    /// React to a call announcement observed in a room. Repeated deliveries
    /// of the same invitation (polling re-fetches, multiple devices) are
    /// deduplicated through the registry so a room rings at most once per
    /// attempt.
    pub async fn handle_room_announcement(
        &self,
        room_id: RoomId,
        caller_id: PeerId,
        caller_name: String,
        kind: CallKind,
        invitation_id: InvitationId,
        room_name: &str,
    ) {
        if caller_id == self.inner.local.user_id {
            debug!("ignoring our own call announcement for {}", room_id);
            return;
        }

        let record = CallRecord {
            initiator_id: caller_id,
            initiator_name: caller_name,
            kind,
            invitation_id,
        };
        if !self.inner.registry.announce(&room_id, record.clone()) {
            debug!(
                "announcement {} for {} already processed",
                invitation_id, room_id
            );
            return;
        }

        info!(
            "{} started a {} call in {} ({})",
            record.initiator_name, kind, room_id, room_name
        );
        self.inner.notifier.call_announced(&room_id, &record).await;
        self.inner
            .notifier
            .incoming_call(&record.initiator_name, kind)
            .await;

        self.emit(CoordinatorEvent::CallAnnounced {
            room_id,
            record: record.clone(),
        });
        self.emit(CoordinatorEvent::IncomingCall {
            peer_id: record.initiator_id,
            kind,
            invitation_id,
        });
    }

    /// Join-in-progress lookup: the call currently announced for a room, if
    /// it has one that is not stale.
    pub fn active_call(&self, room_id: &RoomId) -> Option<CallRecord> {
        self.inner.registry.lookup(room_id)
    }

    /// Explicit termination of a room's announced call.
    pub fn end_room_call(&self, room_id: &RoomId) {
        self.inner.registry.clear(room_id);
    }
}
