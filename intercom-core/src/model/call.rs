use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Audio,
    Video,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallKind::Audio => write!(f, "audio"),
            CallKind::Video => write!(f, "video"),
        }
    }
}

/// Correlation token for a single call attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
pub struct InvitationId(pub Uuid);

impl InvitationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvitationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An in-progress call announced to a room. Late joiners read this to decide
/// whether to offer a "join call" entry point.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub initiator_id: PeerId,
    pub initiator_name: String,
    pub kind: CallKind,
    pub invitation_id: InvitationId,
}
