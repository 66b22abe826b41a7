use crate::config::CoordinatorConfig;
use crate::error::CallError;
use crate::event::CoordinatorEvent;
use crate::media::MediaBridge;
use crate::notify::NotificationDispatcher;
use crate::registry::CallRegistry;
use crate::session::{CandidateBuffer, PeerSessionTable, SessionState, Transition};
use crate::signaling::{Reconciler, SignalingTransport};
use intercom_core::{CallKind, IceCandidate, Participant, PeerId, RoomId};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

mod announcement_impl;
mod handle_answer_impl;
mod handle_offer_impl;
mod start_call_impl;
mod teardown_impl;

pub(crate) struct CoordinatorInner {
    local: Participant,
    room_id: RoomId,
    transport: Arc<dyn SignalingTransport>,
    media: Arc<dyn MediaBridge>,
    notifier: Arc<dyn NotificationDispatcher>,
    config: CoordinatorConfig,
    sessions: PeerSessionTable,
    candidates: CandidateBuffer,
    registry: CallRegistry,
    events: mpsc::UnboundedSender<CoordinatorEvent>,
    shutdown_tx: watch::Sender<bool>,
    initiator: AtomicBool,
    video_call: AtomicBool,
    closed: AtomicBool,
}

/// Owns every piece of call state for one user in one room: the session
/// table, the candidate buffer and the call registry. Cheap to clone and
/// share; there is no process-global state, so independent coordinators can
/// coexist (one per room, one per test).
#[derive(Clone)]
pub struct CallCoordinator {
    inner: Arc<CoordinatorInner>,
}

impl CallCoordinator {
    pub fn new(
        local: Participant,
        room_id: RoomId,
        transport: Arc<dyn SignalingTransport>,
        media: Arc<dyn MediaBridge>,
        notifier: Arc<dyn NotificationDispatcher>,
        config: CoordinatorConfig,
    ) -> (Self, mpsc::UnboundedReceiver<CoordinatorEvent>) {
        let (events, event_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, _) = watch::channel(false);

        let inner = CoordinatorInner {
            candidates: CandidateBuffer::new(config.candidate_buffer_capacity),
            registry: CallRegistry::new(config.call_record_ttl),
            local,
            room_id,
            transport,
            media,
            notifier,
            config,
            sessions: PeerSessionTable::new(),
            events,
            shutdown_tx,
            initiator: AtomicBool::new(false),
            video_call: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        };

        (
            Self {
                inner: Arc::new(inner),
            },
            event_rx,
        )
    }

    /// Register this user with the room on the signaling backend.
    pub async fn join(&self) -> Result<(), CallError> {
        self.ensure_open()?;
        self.inner
            .transport
            .join_room(
                &self.inner.room_id,
                &self.inner.local.user_id,
                &self.inner.local.user_name,
            )
            .await?;
        Ok(())
    }

    /// Start the polling loop on the runtime. The task exits once
    /// [`close_all`](Self::close_all) is called.
    pub fn spawn_reconciler(&self) -> JoinHandle<()> {
        tokio::spawn(Reconciler::new(self).run())
    }

    /// Track-enable pass-through; does not touch signaling state.
    pub async fn toggle_audio(&self, enabled: bool) {
        self.inner.media.set_audio_enabled(enabled).await;
    }

    /// Track-enable pass-through; does not touch signaling state.
    pub async fn toggle_video(&self, enabled: bool) {
        self.inner.media.set_video_enabled(enabled).await;
    }

    /// Forward a locally generated ICE candidate to the remote peer.
    pub async fn local_candidate_generated(&self, peer_id: &PeerId, candidate: IceCandidate) {
        if let Err(e) = self
            .inner
            .transport
            .send_ice_candidate(peer_id, candidate)
            .await
        {
            warn!("failed to send local candidate for {}: {}", peer_id, e);
        }
    }

    /// Media layer reports the underlying connection came up.
    pub async fn connection_established(&self, peer_id: &PeerId) {
        let Some(session) = self.inner.sessions.get(peer_id) else {
            warn!("connection established for unknown peer {}", peer_id);
            return;
        };
        let mut session = session.lock().await;
        match session.note_connected() {
            Ok(Transition::Changed(state)) => self.emit_state(peer_id, state),
            Ok(Transition::Unchanged) => {}
            Err(e) => warn!("{}", e),
        }
    }

    /// Media layer reports a terminal connection failure.
    pub async fn connection_failed(&self, peer_id: &PeerId) {
        self.abort_session(peer_id, SessionState::Failed).await;
    }

    pub async fn session_state(&self, peer_id: &PeerId) -> Option<SessionState> {
        let session = self.inner.sessions.get(peer_id)?;
        let state = session.lock().await.state();
        Some(state)
    }

    pub fn session_count(&self) -> usize {
        self.inner.sessions.len()
    }

    /// Candidates parked for a peer that has no remote description yet.
    pub fn buffered_candidates(&self, peer_id: &PeerId) -> usize {
        self.inner.candidates.buffered(peer_id)
    }

    pub fn has_session(&self, peer_id: &PeerId) -> bool {
        self.inner.sessions.contains(peer_id)
    }

    pub fn is_initiator(&self) -> bool {
        self.inner.initiator.load(Ordering::SeqCst)
    }

    pub fn local_id(&self) -> &PeerId {
        &self.inner.local.user_id
    }

    pub fn room_id(&self) -> &RoomId {
        &self.inner.room_id
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.inner.config
    }

    pub(crate) fn transport(&self) -> &dyn SignalingTransport {
        self.inner.transport.as_ref()
    }

    pub(crate) fn active_kind(&self) -> CallKind {
        if self.inner.video_call.load(Ordering::SeqCst) {
            CallKind::Video
        } else {
            CallKind::Audio
        }
    }

    pub(crate) fn set_active_kind(&self, kind: CallKind) {
        self.inner
            .video_call
            .store(kind == CallKind::Video, Ordering::SeqCst);
    }

    pub(crate) fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.inner.shutdown_tx.subscribe()
    }

    pub(crate) fn ensure_open(&self) -> Result<(), CallError> {
        if self.inner.closed.load(Ordering::SeqCst) {
            return Err(CallError::Terminated);
        }
        Ok(())
    }

    pub(crate) fn emit(&self, event: CoordinatorEvent) {
        // The host may have dropped the receiver; that is its choice.
        let _ = self.inner.events.send(event);
    }

    pub(crate) fn emit_state(&self, peer_id: &PeerId, state: SessionState) {
        debug!("session with {} moved to {}", peer_id, state);
        self.emit(CoordinatorEvent::SessionStateChanged {
            peer_id: peer_id.clone(),
            state,
        });
    }

    /// Deliver everything buffered for a peer to the media layer. Called
    /// right after the remote description lands.
    pub(crate) async fn deliver_buffered_candidates(&self, peer_id: &PeerId) {
        for candidate in self.inner.candidates.drain(peer_id) {
            if let Err(e) = self.inner.media.add_ice_candidate(peer_id, candidate).await {
                warn!("failed to deliver buffered candidate for {}: {}", peer_id, e);
            }
        }
    }
}
