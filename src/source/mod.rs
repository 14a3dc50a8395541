// Page sources
pub mod source_trait;
pub mod http_source;
pub mod mock_source;

pub use source_trait::*;
pub use http_source::*;
pub use mock_source::*;
