use async_trait::async_trait;
use scraper::Html;
use url::Url;

use crate::extractors::extractor_trait::{capitalize, fragment_text, normalize_ws, selector, Extractor};
use crate::utils::{
    config::AppConfig,
    error::{ExtractionError, TpspResult},
    types::LineStatus,
};

/// CPTM home page carrying the line status panel
pub const CPTM_URL: &str = "https://www.cptm.sp.gov.br/Pages/Home.aspx";

/// One CSS class per line, in display order
pub const CPTM_LINES: [&str; 7] = [
    "rubi",
    "diamante",
    "esmeralda",
    "turquesa",
    "coral",
    "safira",
    "jade",
];

/// Commuter-rail extractor.
///
/// Each line has its own element, classed with the line's name. The element
/// text starts with that name in capitals, followed by the status.
pub struct CptmExtractor {
    url: Url,
}

impl CptmExtractor {
    pub const NAME: &'static str = "cptm";

    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Create the extractor, honouring a configured URL override
    pub fn from_config(config: &AppConfig) -> TpspResult<Box<dyn Extractor>> {
        let url = config.provider_url(Self::NAME, CPTM_URL)?;
        Ok(Box::new(Self::new(url)))
    }

    fn parse_fragment(key: &str, text: &str) -> Result<LineStatus, ExtractionError> {
        let status = normalize_ws(&text.replace(&key.to_uppercase(), ""));
        if status.is_empty() {
            return Err(ExtractionError::MalformedFragment {
                provider: Self::NAME.to_string(),
                text: text.to_string(),
                reason: "no status text after the line name".to_string(),
            });
        }

        Ok(LineStatus::new(capitalize(key), status))
    }
}

#[async_trait]
impl Extractor for CptmExtractor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn source_url(&self) -> &Url {
        &self.url
    }

    fn expected_lines(&self) -> usize {
        CPTM_LINES.len()
    }

    fn parse_document(&self, html: &str) -> TpspResult<Vec<LineStatus>> {
        let document = Html::parse_document(html);
        let mut records = Vec::with_capacity(CPTM_LINES.len());

        for key in CPTM_LINES {
            let css = format!(".{}", key);
            let sel = selector(&css)?;
            let element = document
                .select(&sel)
                .next()
                .ok_or_else(|| ExtractionError::MissingFragment {
                    provider: Self::NAME.to_string(),
                    selector: css.clone(),
                })?;

            records.push(Self::parse_fragment(key, &fragment_text(element))?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_strips_line_name() {
        let record = CptmExtractor::parse_fragment("rubi", "RUBIOperação Normal").unwrap();
        assert_eq!(record, LineStatus::new("Rubi", "Operação Normal"));
    }

    #[test]
    fn test_parse_fragment_with_spacing() {
        let record = CptmExtractor::parse_fragment("esmeralda", "ESMERALDA Velocidade Reduzida").unwrap();
        assert_eq!(record, LineStatus::new("Esmeralda", "Velocidade Reduzida"));
    }

    #[test]
    fn test_parse_fragment_without_status() {
        match CptmExtractor::parse_fragment("jade", "JADE") {
            Err(ExtractionError::MalformedFragment { provider, .. }) => assert_eq!(provider, "cptm"),
            other => panic!("Expected MalformedFragment, got {:?}", other),
        }
    }

    #[test]
    fn test_default_url() {
        let extractor = CptmExtractor::from_config(&AppConfig::default()).unwrap();
        assert_eq!(extractor.name(), "cptm");
        assert_eq!(extractor.source_url().as_str(), CPTM_URL);
        assert_eq!(extractor.expected_lines(), 7);
    }
}
