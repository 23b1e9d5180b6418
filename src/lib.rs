//! Garantie-Brücke
//!
//! Bibliotheksteil des Servers; vom Binary und den Integrationstests genutzt

pub mod config;
pub mod error;
pub mod relay;

pub use config::BridgeConfig;
pub use error::RelayError;
pub use relay::{router, AppState, SubmitResponse, MAX_REQUEST_BYTES};
