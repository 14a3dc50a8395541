// Provider resolution and fetching
pub mod registry;
pub mod status_engine;

pub use registry::*;
pub use status_engine::*;
