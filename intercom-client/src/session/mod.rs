mod candidates;
mod session;
mod state;
mod table;

pub use candidates::CandidateBuffer;
pub use session::{PeerSession, Transition};
pub use state::{NegotiationRole, SessionState};
pub use table::PeerSessionTable;
