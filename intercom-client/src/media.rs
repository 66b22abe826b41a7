use crate::error::MediaError;
use async_trait::async_trait;
use intercom_core::{CallKind, IceCandidate, PeerId, SessionDescription};

/// Seam to the media layer that owns the actual peer connections and local
/// capture. The coordinator drives negotiation through it and never touches
/// streams itself; descriptions and candidates pass through opaque.
#[async_trait]
pub trait MediaBridge: Send + Sync {
    /// Make sure local capture matching the call kind is available.
    async fn acquire_local_media(&self, kind: CallKind) -> Result<(), MediaError>;

    /// Create (or reuse) the connection for a peer and produce a local offer.
    async fn create_offer(&self, peer_id: &PeerId) -> Result<SessionDescription, MediaError>;

    /// Apply a remote offer and produce the local answer for it.
    async fn apply_remote_offer(
        &self,
        peer_id: &PeerId,
        offer: SessionDescription,
    ) -> Result<SessionDescription, MediaError>;

    /// Apply the remote answer to a connection this side initiated.
    async fn apply_remote_answer(
        &self,
        peer_id: &PeerId,
        answer: SessionDescription,
    ) -> Result<(), MediaError>;

    /// Deliver a remote candidate. Only called once the peer's remote
    /// description is in place.
    async fn add_ice_candidate(
        &self,
        peer_id: &PeerId,
        candidate: IceCandidate,
    ) -> Result<(), MediaError>;

    async fn set_audio_enabled(&self, enabled: bool);

    async fn set_video_enabled(&self, enabled: bool);

    /// Tear down the connection for a peer. Must tolerate unknown peers.
    async fn close_peer(&self, peer_id: &PeerId);
}
