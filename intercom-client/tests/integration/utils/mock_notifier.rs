use async_trait::async_trait;
use intercom_client::NotificationDispatcher;
use intercom_core::{CallKind, CallRecord, PeerId, RoomId};
use std::sync::Arc;
use tokio::sync::Mutex;

/// NotificationDispatcher that records every hook invocation.
#[derive(Clone, Default)]
pub struct MockNotifier {
    inner: Arc<MockNotifierInner>,
}

#[derive(Default)]
struct MockNotifierInner {
    incoming: Mutex<Vec<(String, CallKind)>>,
    announced: Mutex<Vec<(RoomId, CallRecord)>>,
    ended: Mutex<Vec<PeerId>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn incoming_calls(&self) -> Vec<(String, CallKind)> {
        self.inner.incoming.lock().await.clone()
    }

    pub async fn announced(&self) -> Vec<(RoomId, CallRecord)> {
        self.inner.announced.lock().await.clone()
    }

    pub async fn ended(&self) -> Vec<PeerId> {
        self.inner.ended.lock().await.clone()
    }
}

#[async_trait]
impl NotificationDispatcher for MockNotifier {
    async fn incoming_call(&self, caller_name: &str, kind: CallKind) {
        self.inner
            .incoming
            .lock()
            .await
            .push((caller_name.to_owned(), kind));
    }

    async fn call_announced(&self, room_id: &RoomId, record: &CallRecord) {
        self.inner
            .announced
            .lock()
            .await
            .push((room_id.clone(), record.clone()));
    }

    async fn call_ended(&self, peer_id: &PeerId) {
        self.inner.ended.lock().await.push(peer_id.clone());
    }
}
