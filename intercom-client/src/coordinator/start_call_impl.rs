use crate::coordinator::CallCoordinator;
use crate::error::CallError;
use crate::session::{NegotiationRole, SessionState, Transition};
use intercom_core::{CallKind, PeerId};
use tracing::{debug, info};

impl CallCoordinator {
    /// Begin negotiation toward a peer: bring up local capture, create the
    /// offer and queue it on the signaling backend.
    ///
    /// Idempotent — a second call while the first offer is still unanswered
    /// finds the live session and does nothing, so redundant invocations
    /// cannot produce duplicate connections.
    pub async fn start_call(&self, peer_id: &PeerId, kind: CallKind) -> Result<(), CallError> {
        self.ensure_open()?;
        self.inner.media.acquire_local_media(kind).await?;

        let (session, _) = self
            .inner
            .sessions
            .get_or_create(peer_id, NegotiationRole::Caller);
        let mut session = session.lock().await;

        if session.state() != SessionState::Idle {
            debug!(
                "start_call for {} ignored, session already {}",
                peer_id,
                session.state()
            );
            return Ok(());
        }

        let offer = match self.inner.media.create_offer(peer_id).await {
            Ok(offer) => offer,
            Err(e) => {
                self.abort_locked(&mut session, SessionState::Failed).await;
                return Err(e.into());
            }
        };

        match session.note_local_offer() {
            Ok(Transition::Changed(state)) => self.emit_state(peer_id, state),
            Ok(Transition::Unchanged) => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        if let Err(e) = self.inner.transport.send_offer(peer_id, offer).await {
            self.abort_locked(&mut session, SessionState::Failed).await;
            return Err(e.into());
        }

        self.set_active_kind(kind);
        self.inner
            .initiator
            .store(true, std::sync::atomic::Ordering::SeqCst);
        info!("offer sent to {} ({} call)", peer_id, kind);
        Ok(())
    }

    /// Accept an incoming invitation: bring up local capture so the offer
    /// that follows over signaling can be answered.
    pub async fn accept_call(&self, kind: CallKind) -> Result<(), CallError> {
        self.ensure_open()?;
        self.inner.media.acquire_local_media(kind).await?;
        self.set_active_kind(kind);
        Ok(())
    }

    /// Decline an invitation. The polling vocabulary has no decline verb, so
    /// declining is local only: any half-open session is closed and the
    /// notifier stops ringing.
    pub async fn decline_call(&self, peer_id: &PeerId) {
        if self.has_session(peer_id) {
            self.abort_session(peer_id, SessionState::Closed).await;
            return;
        }
        self.inner.candidates.discard(peer_id);
        self.inner.notifier.call_ended(peer_id).await;
    }
}
