use crate::coordinator::CallCoordinator;
use crate::error::CallError;
use crate::session::{NegotiationRole, SessionState, Transition};
use intercom_core::{PeerId, SessionDescription};
use tracing::{debug, info};

impl CallCoordinator {
    /// Apply an offer pulled from the signaling backend: note the remote
    /// description, produce and queue the answer, then release any buffered
    /// candidates.
    pub(crate) async fn handle_remote_offer(
        &self,
        sender_id: PeerId,
        offer: SessionDescription,
    ) -> Result<(), CallError> {
        let (session, _) = self
            .inner
            .sessions
            .get_or_create(&sender_id, NegotiationRole::Callee);
        let mut session = session.lock().await;

        match session.state() {
            SessionState::OfferSent => {
                // Glare: both sides offered at once. The lexicographically
                // smaller id keeps the caller role; the other side discards
                // its own offer and re-enters as callee.
                if self.inner.local.user_id < sender_id {
                    info!(
                        "glare with {}: keeping caller role, discarding their offer",
                        sender_id
                    );
                    return Ok(());
                }
                info!("glare with {}: yielding caller role", sender_id);
                self.inner.media.close_peer(&sender_id).await;
                let state = session.yield_to_remote_offer();
                self.emit_state(&sender_id, state);
            }
            SessionState::Idle => match session.note_remote_offer() {
                Ok(Transition::Changed(state)) => self.emit_state(&sender_id, state),
                Ok(Transition::Unchanged) => {}
                Err(e) => return Err(e.into()),
            },
            SessionState::OfferReceived
            | SessionState::AnswerExchanged
            | SessionState::Connected => {
                debug!("duplicate offer from {} ignored", sender_id);
                return Ok(());
            }
            SessionState::Closed | SessionState::Failed => {
                return Err(session.illegal("remote offer").into());
            }
        }

        let answer = match self.inner.media.apply_remote_offer(&sender_id, offer).await {
            Ok(answer) => answer,
            Err(e) => {
                self.abort_locked(&mut session, SessionState::Failed).await;
                return Err(e.into());
            }
        };
        session.mark_remote_description();
        self.deliver_buffered_candidates(&sender_id).await;

        if let Err(e) = self.inner.transport.send_answer(&sender_id, answer).await {
            self.abort_locked(&mut session, SessionState::Failed).await;
            return Err(e.into());
        }

        match session.note_local_answer() {
            Ok(Transition::Changed(state)) => self.emit_state(&sender_id, state),
            Ok(Transition::Unchanged) => {}
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
