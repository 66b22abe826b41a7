use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use intercom_core::{CallRecord, InvitationId, RoomId};
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

struct RegistryEntry {
    record: CallRecord,
    announced_at: Instant,
    /// Invitation ids already acted on for this room. Kept until the entry
    /// itself expires or is cleared, so a re-polled announcement cannot ring
    /// twice.
    consumed_invitations: HashSet<InvitationId>,
}

/// Per-room record of the call currently in progress. Late joiners look the
/// room up to render a "join call" entry point. Stale records are evicted
/// lazily on lookup; there is no background sweep.
pub struct CallRegistry {
    entries: DashMap<RoomId, RegistryEntry>,
    ttl: Duration,
}

impl CallRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Record a new announcement, overwriting whatever the room had. Returns
    /// `false` when this invitation id was already consumed for the room.
    pub fn announce(&self, room_id: &RoomId, record: CallRecord) -> bool {
        let now = Instant::now();
        match self.entries.entry(room_id.clone()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if now.duration_since(entry.announced_at) >= self.ttl {
                    entry.consumed_invitations.clear();
                }
                if !entry.consumed_invitations.insert(record.invitation_id) {
                    debug!("invitation {} already consumed for {}", record.invitation_id, room_id);
                    return false;
                }
                entry.record = record;
                entry.announced_at = now;
            }
            Entry::Vacant(vacant) => {
                let mut consumed_invitations = HashSet::new();
                consumed_invitations.insert(record.invitation_id);
                vacant.insert(RegistryEntry {
                    record,
                    announced_at: now,
                    consumed_invitations,
                });
            }
        }
        info!("call announced for room {}", room_id);
        true
    }

    /// The room's active call, if it has one that is not stale yet.
    pub fn lookup(&self, room_id: &RoomId) -> Option<CallRecord> {
        let entry = self.entries.get(room_id)?;
        if entry.announced_at.elapsed() >= self.ttl {
            drop(entry);
            self.entries.remove(room_id);
            debug!("evicted stale call record for {}", room_id);
            return None;
        }
        Some(entry.record.clone())
    }

    /// Explicit termination removes the record regardless of age.
    pub fn clear(&self, room_id: &RoomId) {
        self.entries.remove(room_id);
    }

    pub fn clear_all(&self) {
        self.entries.clear();
    }
}
