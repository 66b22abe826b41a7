mod call;
mod peer;
mod room;
mod signaling;

pub use call::{CallKind, CallRecord, InvitationId};
pub use peer::PeerId;
pub use room::RoomId;
pub use signaling::{
    IceCandidate, IceServerConfig, Participant, PendingAnswer, PendingCandidate, PendingOffer,
    SessionDescription,
};
