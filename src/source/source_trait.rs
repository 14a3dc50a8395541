use async_trait::async_trait;
use url::Url;

use crate::utils::error::TpspResult;

/// Anything that can hand back the HTML body of a status page
#[async_trait]
pub trait HtmlSource: Send + Sync {
    /// Perform a single GET and return the body. Non-success responses are
    /// errors.
    async fn fetch_page(&self, url: &Url) -> TpspResult<String>;
}
