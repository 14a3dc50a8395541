// Line-status providers
pub mod extractor_trait;
pub mod cptm_extractor;
pub mod metro_extractor;

pub use extractor_trait::*;
pub use cptm_extractor::*;
pub use metro_extractor::*;
