use intercom_core::IceServerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the coordinator and its polling loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Period of the signaling reconciliation loop.
    pub poll_interval: Duration,
    /// Budget for a single poll phase; a phase that overruns it is abandoned
    /// and retried on the next tick.
    pub poll_timeout: Duration,
    /// Consecutive failed polls after which live sessions are failed.
    pub failure_threshold: u32,
    /// Per-peer cap on ICE candidates buffered before the remote description
    /// is set. Overflow drops the oldest candidate; the far end does not
    /// re-send, so this is an accepted lossy-degradation bound.
    pub candidate_buffer_capacity: usize,
    /// Age after which an announced call record is considered stale.
    pub call_record_ttl: Duration,
    /// STUN/TURN servers handed to the media layer.
    pub ice_servers: Vec<IceServerConfig>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            poll_timeout: Duration::from_secs(5),
            failure_threshold: 5,
            candidate_buffer_capacity: 64,
            call_record_ttl: Duration::from_secs(2 * 60 * 60),
            ice_servers: vec![IceServerConfig {
                urls: vec!["stun:stun.l.google.com:19302".to_owned()],
                username: None,
                credential: None,
            }],
        }
    }
}
