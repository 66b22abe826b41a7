pub use intercom_core::model::PeerId;

pub mod model {
    pub use intercom_core::model::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use intercom_client::*;
}
