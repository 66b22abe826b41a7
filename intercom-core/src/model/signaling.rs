use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};

/// SDP payload exchanged during negotiation. Opaque to the coordinator; only
/// the media layer interprets its content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct SessionDescription(pub String);

impl From<&str> for SessionDescription {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SessionDescription {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Connectivity-path descriptor. Opaque payload, same rules as
/// [`SessionDescription`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct IceCandidate(pub String);

impl From<&str> for IceCandidate {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for IceCandidate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

/// A queued offer fetched from the signaling backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PendingOffer {
    pub sender_id: PeerId,
    pub offer: SessionDescription,
}

/// A queued answer fetched from the signaling backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PendingAnswer {
    pub sender_id: PeerId,
    pub answer: SessionDescription,
}

/// A queued ICE candidate fetched from the signaling backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PendingCandidate {
    pub sender_id: PeerId,
    pub candidate: IceCandidate,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: PeerId,
    pub user_name: String,
}
