pub mod capabilities;
pub mod config;
pub mod error;
pub mod gateway;
pub mod loader;
pub mod logging;
pub mod xml;

pub use capabilities::{build_document, parse_capabilities};
pub use config::LoaderConfig;
pub use error::{Result, XmlError};
pub use gateway::CapabilitiesGateway;
pub use loader::{DocumentLoader, FileLoader, HttpLoader, LoadError, SourceLoader};
