pub mod cli;
pub mod engine;
pub mod extractors;
pub mod source;
pub mod utils;

pub use cli::*;
pub use engine::*;
pub use extractors::*;
pub use source::*;
pub use utils::*;
