use crate::session::session::PeerSession;
use crate::session::state::NegotiationRole;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use intercom_core::PeerId;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// At most one live negotiation per peer. Sessions for distinct peers are
/// independent; same-peer mutations serialize on the per-session mutex, so a
/// reconciler tick and a user-initiated call cannot interleave SDP steps.
pub struct PeerSessionTable {
    sessions: DashMap<PeerId, Arc<Mutex<PeerSession>>>,
}

impl PeerSessionTable {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Returns the peer's session, creating it in `Idle` when absent. The
    /// second value is `true` only for a fresh session; a redundant create
    /// hands back the existing one instead of a duplicate connection.
    pub fn get_or_create(
        &self,
        peer_id: &PeerId,
        role: NegotiationRole,
    ) -> (Arc<Mutex<PeerSession>>, bool) {
        match self.sessions.entry(peer_id.clone()) {
            Entry::Occupied(entry) => {
                debug!("reusing existing session for {}", peer_id);
                (entry.get().clone(), false)
            }
            Entry::Vacant(entry) => {
                let session = Arc::new(Mutex::new(PeerSession::new(peer_id.clone(), role)));
                entry.insert(session.clone());
                (session, true)
            }
        }
    }

    pub fn get(&self, peer_id: &PeerId) -> Option<Arc<Mutex<PeerSession>>> {
        self.sessions.get(peer_id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, peer_id: &PeerId) -> Option<Arc<Mutex<PeerSession>>> {
        self.sessions.remove(peer_id).map(|(_, session)| session)
    }

    /// Take every session out of the table at once (teardown path).
    pub fn drain(&self) -> Vec<(PeerId, Arc<Mutex<PeerSession>>)> {
        let drained: Vec<_> = self
            .sessions
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        self.sessions.clear();
        drained
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool {
        self.sessions.contains_key(peer_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn peers(&self) -> Vec<PeerId> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for PeerSessionTable {
    fn default() -> Self {
        Self::new()
    }
}
