use crate::coordinator::CallCoordinator;
use crate::session::{PeerSession, SessionState, Transition};
use intercom_core::PeerId;
use std::sync::atomic::Ordering;
use tracing::{info, warn};

impl CallCoordinator {
    /// Close one peer's session and free everything buffered for it.
    pub async fn close_peer(&self, peer_id: &PeerId) {
        self.abort_session(peer_id, SessionState::Closed).await;
    }

    pub(crate) async fn abort_session(&self, peer_id: &PeerId, to: SessionState) {
        let Some(session) = self.inner.sessions.get(peer_id) else {
            return;
        };
        let mut session = session.lock().await;
        self.abort_locked(&mut session, to).await;
    }

    /// Tear down a session whose lock is already held: terminal state, table
    /// entry, buffered candidates, media connection, notifier.
    pub(crate) async fn abort_locked(&self, session: &mut PeerSession, to: SessionState) {
        let peer_id = session.peer_id().clone();
        if let Transition::Changed(state) = session.terminate(to) {
            self.emit_state(&peer_id, state);
        }
        self.inner.sessions.remove(&peer_id);
        self.inner.candidates.discard(&peer_id);
        self.inner.media.close_peer(&peer_id).await;
        self.inner.notifier.call_ended(&peer_id).await;
    }

    /// Signaling outage past the failure threshold: every live session is
    /// failed and the UI layer notified.
    pub(crate) async fn fail_all_sessions(&self, reason: &str) {
        for (peer_id, session) in self.inner.sessions.drain() {
            let mut session = session.lock().await;
            if let Transition::Changed(state) = session.terminate(SessionState::Failed) {
                warn!("session with {} failed: {}", peer_id, reason);
                self.emit_state(&peer_id, state);
            }
            self.inner.candidates.discard(&peer_id);
            self.inner.media.close_peer(&peer_id).await;
            self.inner.notifier.call_ended(&peer_id).await;
        }
    }

    /// Tear everything down and stop the polling loop. Idempotent; the only
    /// teardown path for leaving a room or ending a call.
    pub async fn close_all(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = self.inner.shutdown_tx.send(true);

        for (peer_id, session) in self.inner.sessions.drain() {
            let mut session = session.lock().await;
            if let Transition::Changed(state) = session.terminate(SessionState::Closed) {
                self.emit_state(&peer_id, state);
            }
            self.inner.media.close_peer(&peer_id).await;
            self.inner.notifier.call_ended(&peer_id).await;
        }
        self.inner.candidates.clear();
        self.inner.registry.clear_all();
        self.inner.initiator.store(false, Ordering::SeqCst);
        info!("call coordinator closed");
    }
}
