use crate::coordinator::CallCoordinator;
use crate::error::TransportError;
use std::future::Future;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// Polling-driven substitute for a push signaling channel. Each tick drains
/// the backend queues in a fixed order — offers, answers, candidates,
/// participants — because answers and candidates presuppose an offer already
/// processed in the same or an earlier tick.
pub struct Reconciler {
    coordinator: CallCoordinator,
    shutdown: tokio::sync::watch::Receiver<bool>,
    consecutive_failures: u32,
}

impl Reconciler {
    pub fn new(coordinator: &CallCoordinator) -> Self {
        Self {
            coordinator: coordinator.clone(),
            shutdown: coordinator.shutdown_receiver(),
            consecutive_failures: 0,
        }
    }

    /// Periodic loop. Cancellation stops scheduling further ticks; an
    /// in-flight tick is left to finish.
    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.coordinator.config().poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("signaling reconciler started");
        loop {
            tokio::select! {
                biased;
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    if *self.shutdown.borrow() {
                        break;
                    }
                    self.tick().await;
                }
            }
        }
        info!("signaling reconciler stopped");
    }

    /// One reconciliation pass. Public so hosts that schedule their own
    /// cadence can drive it manually instead of spawning [`Reconciler::run`].
    pub async fn tick(&mut self) {
        match self.run_phases().await {
            Ok(()) => {
                if self.consecutive_failures > 0 {
                    info!(
                        "signaling link recovered after {} failed polls",
                        self.consecutive_failures
                    );
                }
                self.consecutive_failures = 0;
            }
            Err(err) => self.note_failure(err).await,
        }
    }

    async fn run_phases(&self) -> Result<(), TransportError> {
        self.bounded(self.drain_offers()).await?;
        self.bounded(self.drain_answers()).await?;
        self.bounded(self.drain_candidates()).await?;
        self.bounded(self.sync_participants()).await?;
        Ok(())
    }

    /// Apply the per-poll budget; a phase that overruns it abandons the tick.
    async fn bounded<F>(&self, phase: F) -> Result<(), TransportError>
    where
        F: Future<Output = Result<(), TransportError>>,
    {
        tokio::time::timeout(self.coordinator.config().poll_timeout, phase)
            .await
            .map_err(|_| TransportError::Timeout)?
    }

    async fn drain_offers(&self) -> Result<(), TransportError> {
        let offers = self.coordinator.transport().poll_offers().await?;
        for pending in offers {
            let sender = pending.sender_id.clone();
            if let Err(e) = self
                .coordinator
                .handle_remote_offer(pending.sender_id, pending.offer)
                .await
            {
                warn!("skipping offer from {}: {}", sender, e);
            }
        }
        Ok(())
    }

    async fn drain_answers(&self) -> Result<(), TransportError> {
        let answers = self.coordinator.transport().poll_answers().await?;
        for pending in answers {
            let sender = pending.sender_id.clone();
            if let Err(e) = self
                .coordinator
                .handle_remote_answer(pending.sender_id, pending.answer)
                .await
            {
                warn!("skipping answer from {}: {}", sender, e);
            }
        }
        Ok(())
    }

    async fn drain_candidates(&self) -> Result<(), TransportError> {
        let candidates = self.coordinator.transport().poll_ice_candidates().await?;
        for pending in candidates {
            self.coordinator
                .handle_remote_candidate(pending.sender_id, pending.candidate)
                .await;
        }
        Ok(())
    }

    /// If this side initiated the room call, reach out to every participant
    /// that has no session yet (late joiners).
    async fn sync_participants(&self) -> Result<(), TransportError> {
        let participants = self
            .coordinator
            .transport()
            .poll_participants(self.coordinator.room_id())
            .await?;

        if !self.coordinator.is_initiator() {
            return Ok(());
        }

        let kind = self.coordinator.active_kind();
        for participant in participants {
            if participant.user_id == *self.coordinator.local_id() {
                continue;
            }
            if self.coordinator.has_session(&participant.user_id) {
                continue;
            }
            info!("initiating call to late joiner {}", participant.user_id);
            if let Err(e) = self.coordinator.start_call(&participant.user_id, kind).await {
                warn!("failed to start call toward {}: {}", participant.user_id, e);
            }
        }
        Ok(())
    }

    async fn note_failure(&mut self, err: TransportError) {
        self.consecutive_failures += 1;
        let threshold = self.coordinator.config().failure_threshold;

        // Repeat-failure logging is capped: first miss and the threshold trip.
        if self.consecutive_failures == 1 {
            warn!("signaling poll failed, will retry next tick: {}", err);
        }
        if self.consecutive_failures == threshold {
            error!(
                "signaling unreachable for {} consecutive polls, failing live sessions",
                threshold
            );
            self.coordinator
                .fail_all_sessions("signaling transport unreachable")
                .await;
        }
    }
}
