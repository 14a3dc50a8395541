use thiserror::Error;

/// Main error type for tpsp
#[derive(Debug, Error)]
pub enum TpspError {
    #[error("Provider not found: '{name}'. Available providers: {available}")]
    ProviderNotFound { name: String, available: String },

    #[error("Source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Provider '{0}' is already registered")]
    DuplicateProvider(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures reaching a provider's status page
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("could not build HTTP client: {0}")]
    ClientBuild(String),
}

/// The page did not have the shape a provider expects
#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("{provider}: no fragment matches '{selector}'")]
    MissingFragment { provider: String, selector: String },

    #[error("{provider}: malformed fragment '{text}': {reason}")]
    MalformedFragment {
        provider: String,
        text: String,
        reason: String,
    },

    #[error("{provider}: expected {expected} lines, found {found}")]
    CountMismatch {
        provider: String,
        expected: usize,
        found: usize,
    },

    #[error("record #{index} has an empty '{field}' field")]
    EmptyField { index: usize, field: &'static str },

    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

impl TpspError {
    /// True for failures detected before any network traffic
    pub fn is_user_error(&self) -> bool {
        matches!(self, TpspError::ProviderNotFound { .. })
    }
}

/// Result type alias for tpsp operations
pub type TpspResult<T> = Result<T, TpspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_extraction_error() {
        let err: TpspError = ExtractionError::CountMismatch {
            provider: "metro".to_string(),
            expected: 6,
            found: 5,
        }
        .into();

        match err {
            TpspError::Extraction(ExtractionError::CountMismatch { expected, found, .. }) => {
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            _ => panic!("Expected Extraction error"),
        }
    }

    #[test]
    fn test_error_from_source_error() {
        let err: TpspError = SourceError::HttpStatus {
            url: "http://example.com/".to_string(),
            status: 503,
        }
        .into();

        assert!(matches!(err, TpspError::Source(SourceError::HttpStatus { status: 503, .. })));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_provider_not_found_display() {
        let err = TpspError::ProviderNotFound {
            name: "trem".to_string(),
            available: "cptm, metro".to_string(),
        };

        assert!(err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Provider not found: 'trem'. Available providers: cptm, metro"
        );
    }

    #[test]
    fn test_error_display() {
        let error = TpspError::Configuration("bad timeout".to_string());
        assert!(error.to_string().contains("Configuration error: bad timeout"));
    }
}
