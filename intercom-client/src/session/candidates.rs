use dashmap::DashMap;
use intercom_core::{IceCandidate, PeerId};
use std::collections::VecDeque;
use tracing::warn;

/// Holds ICE candidates that arrive before the peer's remote description is
/// set. Bounded per peer; overflow drops the oldest candidate, which is a
/// documented lossy-degradation point — the far end does not re-send.
pub struct CandidateBuffer {
    queues: DashMap<PeerId, VecDeque<IceCandidate>>,
    capacity: usize,
}

impl CandidateBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queues: DashMap::new(),
            capacity,
        }
    }

    pub fn enqueue(&self, peer_id: &PeerId, candidate: IceCandidate) {
        let mut queue = self.queues.entry(peer_id.clone()).or_default();
        if queue.len() == self.capacity {
            queue.pop_front();
            warn!("candidate buffer full for {}, dropping oldest", peer_id);
        }
        queue.push_back(candidate);
    }

    /// Returns and clears everything buffered for a peer, in arrival order.
    /// Called once the remote description lands, so each candidate is
    /// delivered exactly once.
    pub fn drain(&self, peer_id: &PeerId) -> Vec<IceCandidate> {
        self.queues
            .remove(peer_id)
            .map(|(_, queue)| queue.into_iter().collect())
            .unwrap_or_default()
    }

    /// Drop a peer's buffered candidates without delivering them.
    pub fn discard(&self, peer_id: &PeerId) {
        self.queues.remove(peer_id);
    }

    pub fn clear(&self) {
        self.queues.clear();
    }

    pub fn buffered(&self, peer_id: &PeerId) -> usize {
        self.queues.get(peer_id).map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}
