pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{CapabilitiesError, CapabilitiesResult};
pub use models::*;
pub use service::CapabilitiesService;
