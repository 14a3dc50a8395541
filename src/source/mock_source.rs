use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use crate::source::HtmlSource;
use crate::utils::error::{SourceError, TpspResult};

/// In-memory page source for testing, with a fetch counter
#[derive(Debug, Default)]
pub struct MockSource {
    pages: HashMap<String, MockPage>,
    fallback: Option<MockPage>,
    fetches: AtomicUsize,
}

#[derive(Debug, Clone)]
enum MockPage {
    Body(String),
    Status(u16),
}

impl MockSource {
    /// Create an empty mock source; every fetch fails until pages are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for exactly `url`
    pub fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), MockPage::Body(body.into()));
        self
    }

    /// Answer `url` with an HTTP error status
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), MockPage::Status(status));
        self
    }

    /// Serve `body` for any URL without an explicit page
    pub fn with_fallback(mut self, body: impl Into<String>) -> Self {
        self.fallback = Some(MockPage::Body(body.into()));
        self
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HtmlSource for MockSource {
    async fn fetch_page(&self, url: &Url) -> TpspResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        match self.pages.get(url.as_str()).or(self.fallback.as_ref()) {
            Some(MockPage::Body(body)) => Ok(body.clone()),
            Some(MockPage::Status(status)) => Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }
            .into()),
            None => Err(SourceError::RequestFailed {
                url: url.to_string(),
                reason: "no mock page registered".to_string(),
            }
            .into()),
        }
    }
}
