// Utility modules
pub mod error;
pub mod config;
pub mod logging;
pub mod types;

pub use error::*;
pub use config::*;
pub use logging::*;
pub use types::*;
