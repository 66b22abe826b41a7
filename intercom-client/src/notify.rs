use async_trait::async_trait;
use intercom_core::{CallKind, CallRecord, PeerId, RoomId};

/// Hooks for ringtone, toasts, tab-title flashing and system notifications.
/// Implemented by the host UI; the coordinator only calls in.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn incoming_call(&self, caller_name: &str, kind: CallKind);

    async fn call_announced(&self, room_id: &RoomId, record: &CallRecord);

    async fn call_ended(&self, peer_id: &PeerId);
}

/// Dispatcher that drops every notification. For headless hosts.
pub struct NullNotifier;

#[async_trait]
impl NotificationDispatcher for NullNotifier {
    async fn incoming_call(&self, _caller_name: &str, _kind: CallKind) {}

    async fn call_announced(&self, _room_id: &RoomId, _record: &CallRecord) {}

    async fn call_ended(&self, _peer_id: &PeerId) {}
}
