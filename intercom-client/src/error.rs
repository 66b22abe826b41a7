use crate::session::SessionState;
use intercom_core::PeerId;
use thiserror::Error;

/// A send or poll against the signaling backend failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("signaling request timed out")]
    Timeout,
    #[error("signaling request failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum MediaError {
    /// Microphone/camera access denied or unavailable. Surfaced to the
    /// caller, never retried automatically.
    #[error("media acquisition failed: {0}")]
    Acquisition(String),
    #[error("media engine failure: {0}")]
    Engine(String),
}

/// A signaling message arrived for a session whose state does not permit it.
/// The reconciler logs these and moves on to the next item.
#[derive(Debug, Error)]
#[error("cannot apply {operation} for {peer_id} in state {state:?}")]
pub struct SignalingStateError {
    pub peer_id: PeerId,
    pub operation: &'static str,
    pub state: SessionState,
}

#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    InvalidState(#[from] SignalingStateError),
    #[error("coordinator already shut down")]
    Terminated,
}
