use async_trait::async_trait;
use scraper::Html;
use url::Url;

use crate::extractors::extractor_trait::{fragment_text, selector, Extractor};
use crate::utils::{
    config::AppConfig,
    error::{ExtractionError, TpspResult},
    types::LineStatus,
};

/// "Direto do Metrô" panel
pub const METRO_URL: &str =
    "http://www.metro.sp.gov.br/Sistemas/direto-do-metro-via4/diretodoMetroHome.aspx";

/// Lines the Metro panel reports
pub const METRO_LINE_COUNT: usize = 6;

const NAME_CLASS: &str = ".nomeDaLinha";
const STATUS_CLASS: &str = ".statusDaLinha";

/// Subway extractor.
///
/// The page lists line names and line statuses as two separate sequences;
/// entries pair up by position.
pub struct MetroExtractor {
    url: Url,
}

impl MetroExtractor {
    pub const NAME: &'static str = "metro";

    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Create the extractor, honouring a configured URL override
    pub fn from_config(config: &AppConfig) -> TpspResult<Box<dyn Extractor>> {
        let url = config.provider_url(Self::NAME, METRO_URL)?;
        Ok(Box::new(Self::new(url)))
    }

    /// "4 - Linha Amarela" -> "Linha Amarela"
    fn parse_line_name(text: &str) -> Result<String, ExtractionError> {
        let name = text
            .split('-')
            .nth(1)
            .map(str::trim)
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => Ok(name.to_string()),
            None => Err(ExtractionError::MalformedFragment {
                provider: Self::NAME.to_string(),
                text: text.to_string(),
                reason: "expected '<number> - <line name>'".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Extractor for MetroExtractor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn source_url(&self) -> &Url {
        &self.url
    }

    fn expected_lines(&self) -> usize {
        METRO_LINE_COUNT
    }

    fn parse_document(&self, html: &str) -> TpspResult<Vec<LineStatus>> {
        let document = Html::parse_document(html);

        let names: Vec<String> = document.select(&selector(NAME_CLASS)?).map(fragment_text).collect();
        let statuses: Vec<String> = document.select(&selector(STATUS_CLASS)?).map(fragment_text).collect();

        tracing::debug!(names = names.len(), statuses = statuses.len(), "metro fragments found");

        if names.len() != statuses.len() {
            return Err(ExtractionError::CountMismatch {
                provider: Self::NAME.to_string(),
                expected: names.len(),
                found: statuses.len(),
            }
            .into());
        }

        let mut records = Vec::with_capacity(names.len());
        for (name, status) in names.iter().zip(statuses) {
            records.push(LineStatus::new(Self::parse_line_name(name)?, status));
        }

        Ok(records)
    }
}
