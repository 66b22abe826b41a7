use crate::coordinator::CallCoordinator;
use crate::error::{CallError, SignalingStateError};
use crate::session::{SessionState, Transition};
use intercom_core::{IceCandidate, PeerId, SessionDescription};
use tracing::{debug, warn};

impl CallCoordinator {
    /// Apply an answer pulled from the signaling backend to the session that
    /// sent the matching offer.
    pub(crate) async fn handle_remote_answer(
        &self,
        sender_id: PeerId,
        answer: SessionDescription,
    ) -> Result<(), CallError> {
        let Some(session) = self.inner.sessions.get(&sender_id) else {
            // An answer with no prior offer from us.
            return Err(SignalingStateError {
                peer_id: sender_id,
                operation: "remote answer",
                state: SessionState::Idle,
            }
            .into());
        };
        let mut session = session.lock().await;

        match session.state() {
            SessionState::OfferSent => {}
            SessionState::AnswerExchanged | SessionState::Connected => {
                debug!("duplicate answer from {} ignored", sender_id);
                return Ok(());
            }
            _ => return Err(session.illegal("remote answer").into()),
        }

        if let Err(e) = self
            .inner
            .media
            .apply_remote_answer(&sender_id, answer)
            .await
        {
            self.abort_locked(&mut session, SessionState::Failed).await;
            return Err(e.into());
        }

        match session.note_remote_answer() {
            Ok(Transition::Changed(state)) => self.emit_state(&sender_id, state),
            Ok(Transition::Unchanged) => {}
            Err(e) => return Err(e.into()),
        }

        self.deliver_buffered_candidates(&sender_id).await;
        Ok(())
    }

    /// Apply a candidate pulled from the signaling backend: deliver it when
    /// the peer's remote description is set, otherwise park it in the buffer.
    pub(crate) async fn handle_remote_candidate(&self, sender_id: PeerId, candidate: IceCandidate) {
        if let Some(session) = self.inner.sessions.get(&sender_id) {
            let session = session.lock().await;
            if session.remote_description_set() {
                if let Err(e) = self
                    .inner
                    .media
                    .add_ice_candidate(&sender_id, candidate)
                    .await
                {
                    warn!("failed to add candidate from {}: {}", sender_id, e);
                }
                return;
            }
        }
        self.inner.candidates.enqueue(&sender_id, candidate);
    }
}
