mod config;
mod coordinator;
mod error;
mod event;
mod media;
mod notify;
mod registry;
mod session;
mod signaling;

pub use config::CoordinatorConfig;
pub use coordinator::CallCoordinator;
pub use error::{CallError, MediaError, SignalingStateError, TransportError};
pub use event::CoordinatorEvent;
pub use media::MediaBridge;
pub use notify::{NotificationDispatcher, NullNotifier};
pub use registry::CallRegistry;
pub use session::{
    CandidateBuffer, NegotiationRole, PeerSession, PeerSessionTable, SessionState, Transition,
};
pub use signaling::{Reconciler, SignalingTransport};
