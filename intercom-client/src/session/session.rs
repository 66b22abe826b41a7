use crate::error::SignalingStateError;
use crate::session::state::{NegotiationRole, SessionState};
use intercom_core::PeerId;

/// Outcome of a state-machine step. Re-entrant inputs (a duplicate offer for
/// a session that already sent one) resolve to `Unchanged` instead of
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed(SessionState),
    Unchanged,
}

/// Negotiation record for exactly one remote peer. All mutation goes through
/// the transition methods below; illegal inputs fail with
/// [`SignalingStateError`] and leave the session untouched.
#[derive(Debug)]
pub struct PeerSession {
    peer_id: PeerId,
    role: NegotiationRole,
    state: SessionState,
    local_description_set: bool,
    remote_description_set: bool,
}

impl PeerSession {
    pub(crate) fn new(peer_id: PeerId, role: NegotiationRole) -> Self {
        Self {
            peer_id,
            role,
            state: SessionState::Idle,
            local_description_set: false,
            remote_description_set: false,
        }
    }

    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    pub fn role(&self) -> NegotiationRole {
        self.role
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remote_description_set(&self) -> bool {
        self.remote_description_set
    }

    pub(crate) fn mark_remote_description(&mut self) {
        self.remote_description_set = true;
    }

    pub(crate) fn illegal(&self, operation: &'static str) -> SignalingStateError {
        SignalingStateError {
            peer_id: self.peer_id.clone(),
            operation,
            state: self.state,
        }
    }

    /// A local offer was created and is about to be sent.
    pub fn note_local_offer(&mut self) -> Result<Transition, SignalingStateError> {
        match self.state {
            SessionState::Idle => {
                self.role = NegotiationRole::Caller;
                self.state = SessionState::OfferSent;
                self.local_description_set = true;
                Ok(Transition::Changed(self.state))
            }
            SessionState::OfferSent => Ok(Transition::Unchanged),
            _ => Err(self.illegal("local offer")),
        }
    }

    /// A remote offer arrived for a session with no negotiation yet.
    pub fn note_remote_offer(&mut self) -> Result<Transition, SignalingStateError> {
        match self.state {
            SessionState::Idle => {
                self.role = NegotiationRole::Callee;
                self.state = SessionState::OfferReceived;
                Ok(Transition::Changed(self.state))
            }
            SessionState::OfferReceived => Ok(Transition::Unchanged),
            _ => Err(self.illegal("remote offer")),
        }
    }

    /// Glare loss: drop the half-open caller attempt and re-enter the
    /// exchange as callee for the remote offer that won the tie-break.
    pub fn yield_to_remote_offer(&mut self) -> SessionState {
        self.role = NegotiationRole::Callee;
        self.local_description_set = false;
        self.remote_description_set = false;
        self.state = SessionState::OfferReceived;
        self.state
    }

    /// The local answer was created and is being sent back.
    pub fn note_local_answer(&mut self) -> Result<Transition, SignalingStateError> {
        match self.state {
            SessionState::OfferReceived => {
                self.state = SessionState::AnswerExchanged;
                self.local_description_set = true;
                Ok(Transition::Changed(self.state))
            }
            SessionState::AnswerExchanged => Ok(Transition::Unchanged),
            _ => Err(self.illegal("local answer")),
        }
    }

    /// The remote answer to our offer arrived and was applied.
    pub fn note_remote_answer(&mut self) -> Result<Transition, SignalingStateError> {
        match self.state {
            SessionState::OfferSent => {
                self.state = SessionState::AnswerExchanged;
                self.remote_description_set = true;
                Ok(Transition::Changed(self.state))
            }
            SessionState::AnswerExchanged | SessionState::Connected => Ok(Transition::Unchanged),
            _ => Err(self.illegal("remote answer")),
        }
    }

    /// The media layer reports the underlying connection is up.
    pub fn note_connected(&mut self) -> Result<Transition, SignalingStateError> {
        match self.state {
            SessionState::AnswerExchanged => {
                self.state = SessionState::Connected;
                Ok(Transition::Changed(self.state))
            }
            SessionState::Connected => Ok(Transition::Unchanged),
            _ => Err(self.illegal("connection established")),
        }
    }

    /// Move to `Closed` or `Failed`. Terminal states absorb further
    /// terminations.
    pub fn terminate(&mut self, to: SessionState) -> Transition {
        debug_assert!(to.is_terminal());
        if self.state.is_terminal() {
            return Transition::Unchanged;
        }
        self.state = to;
        Transition::Changed(self.state)
    }
}
