use crate::error::TransportError;
use async_trait::async_trait;
use intercom_core::{
    IceCandidate, Participant, PendingAnswer, PendingCandidate, PendingOffer, PeerId, RoomId,
    SessionDescription,
};

/// Trait the host application implements over its request/response backend
/// (HTTP RPC, long polling, anything pull-based). The coordinator pushes
/// outbound signaling through the `send_*` methods and drains inbound queues
/// through the `poll_*` methods; every payload passes through opaque.
///
/// Poll results must preserve producer insertion order — the reconciler
/// applies them as an ordered sequence.
#[async_trait]
pub trait SignalingTransport: Send + Sync {
    async fn join_room(
        &self,
        room_id: &RoomId,
        user_id: &PeerId,
        user_name: &str,
    ) -> Result<(), TransportError>;

    /// Queue an SDP offer for a specific peer.
    async fn send_offer(
        &self,
        receiver_id: &PeerId,
        offer: SessionDescription,
    ) -> Result<(), TransportError>;

    /// Queue an SDP answer for a specific peer.
    async fn send_answer(
        &self,
        receiver_id: &PeerId,
        answer: SessionDescription,
    ) -> Result<(), TransportError>;

    /// Queue an ICE candidate for a specific peer.
    async fn send_ice_candidate(
        &self,
        receiver_id: &PeerId,
        candidate: IceCandidate,
    ) -> Result<(), TransportError>;

    /// Fetch and clear the offers queued for this user.
    async fn poll_offers(&self) -> Result<Vec<PendingOffer>, TransportError>;

    /// Fetch and clear the answers queued for this user.
    async fn poll_answers(&self) -> Result<Vec<PendingAnswer>, TransportError>;

    /// Fetch and clear the ICE candidates queued for this user.
    async fn poll_ice_candidates(&self) -> Result<Vec<PendingCandidate>, TransportError>;

    /// Current participant list for a room.
    async fn poll_participants(&self, room_id: &RoomId) -> Result<Vec<Participant>, TransportError>;
}
