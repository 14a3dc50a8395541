use async_trait::async_trait;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::source::HtmlSource;
use crate::utils::{
    error::{ExtractionError, TpspResult},
    types::LineStatus,
};

/// Base trait for all line-status providers
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Lowercase provider name used for selection
    fn name(&self) -> &str;

    /// Page the provider scrapes
    fn source_url(&self) -> &Url;

    /// Number of lines the provider always reports
    fn expected_lines(&self) -> usize;

    /// Turn a raw page into records, applying the provider's parsing rules
    fn parse_document(&self, html: &str) -> TpspResult<Vec<LineStatus>>;

    /// Parse a page and check the result is complete
    fn extract(&self, html: &str) -> TpspResult<Vec<LineStatus>> {
        let records = self.parse_document(html)?;

        if records.len() != self.expected_lines() {
            return Err(ExtractionError::CountMismatch {
                provider: self.name().to_string(),
                expected: self.expected_lines(),
                found: records.len(),
            }
            .into());
        }
        validate_records(&records)?;

        tracing::debug!(provider = self.name(), lines = records.len(), "extracted line statuses");
        for record in &records {
            tracing::debug!(line = %record.line, category = %record.category(), "line status");
        }
        Ok(records)
    }

    /// Fetch the provider's page once and extract every line
    async fn fetch_data(&self, source: &dyn HtmlSource) -> TpspResult<Vec<LineStatus>> {
        let body = source.fetch_page(self.source_url()).await?;
        self.extract(&body)
    }
}

/// Reject records with an empty line or status
pub fn validate_records(records: &[LineStatus]) -> Result<(), ExtractionError> {
    for (index, record) in records.iter().enumerate() {
        if record.line.trim().is_empty() {
            return Err(ExtractionError::EmptyField { index, field: "line" });
        }
        if record.status.trim().is_empty() {
            return Err(ExtractionError::EmptyField { index, field: "status" });
        }
    }
    Ok(())
}

/// Parse a CSS selector
pub fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|_| ExtractionError::InvalidSelector(css.to_string()))
}

/// Text content of an element, whitespace runs collapsed and trimmed
pub fn fragment_text(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<String>())
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// First character upper-cased, the rest lower-cased
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
