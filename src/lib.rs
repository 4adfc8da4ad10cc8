// Account Registry - Core Library
// Exposes the entities for the demo binary and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::DemoConfig;
pub use entities::{Account, Bank};
pub use error::{BankError, Result};
pub use logger::init_logger;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
