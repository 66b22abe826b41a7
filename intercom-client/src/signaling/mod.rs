mod reconciler;
mod transport;

pub use reconciler::Reconciler;
pub use transport::SignalingTransport;
