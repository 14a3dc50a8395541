use std::sync::Arc;

use tpsp::engine::{ProviderRegistry, StatusEngine};
use tpsp::extractors::{CPTM_URL, METRO_URL};
use tpsp::source::MockSource;
use tpsp::utils::config::AppConfig;
use tpsp::utils::error::{SourceError, TpspError};
use tpsp::utils::types::{LineStatus, StatusCategory};

const CPTM_PAGE: &str = include_str!("fixtures/cptm.html");
const METRO_PAGE: &str = include_str!("fixtures/metro.html");

fn engine_with(source: Arc<MockSource>, config: AppConfig) -> StatusEngine {
    StatusEngine::new(config, ProviderRegistry::with_builtin(), source)
}

fn mock_pages() -> Arc<MockSource> {
    Arc::new(
        MockSource::new()
            .with_page(CPTM_URL, CPTM_PAGE)
            .with_page(METRO_URL, METRO_PAGE),
    )
}

#[tokio::test]
async fn test_fetch_cptm() {
    let source = mock_pages();
    let engine = engine_with(source.clone(), AppConfig::default());

    let records = engine.fetch("cptm").await.unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(records[0], LineStatus::new("Rubi", "Operação Normal"));
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_fetch_metro() {
    let source = mock_pages();
    let engine = engine_with(source.clone(), AppConfig::default());

    let records = engine.fetch("metro").await.unwrap();

    assert_eq!(records.len(), 6);
    assert_eq!(records[3], LineStatus::new("Linha Amarela", "Velocidade Reduzida"));
    assert_eq!(records[3].category(), StatusCategory::Reduced);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_unknown_provider_never_fetches() {
    let source = mock_pages();
    let engine = engine_with(source.clone(), AppConfig::default());

    match engine.fetch("trem").await {
        Err(TpspError::ProviderNotFound { name, .. }) => assert_eq!(name, "trem"),
        other => panic!("Expected ProviderNotFound, got {:?}", other),
    }
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn test_http_error_is_source_unavailable() {
    let source = Arc::new(MockSource::new().with_status(METRO_URL, 503));
    let engine = engine_with(source.clone(), AppConfig::default());

    match engine.fetch("metro").await {
        Err(TpspError::Source(SourceError::HttpStatus { status, .. })) => assert_eq!(status, 503),
        other => panic!("Expected HttpStatus, got {:?}", other),
    }
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_changed_page_is_extraction_error() {
    let source = Arc::new(MockSource::new().with_fallback("<html><body><p>Em manutenção</p></body></html>"));
    let engine = engine_with(source, AppConfig::default());

    assert!(matches!(engine.fetch("cptm").await, Err(TpspError::Extraction(_))));
    assert!(matches!(engine.fetch("metro").await, Err(TpspError::Extraction(_))));
}

#[tokio::test]
async fn test_configured_url_is_fetched() {
    let config = AppConfig::from_json(
        r#"{ "providers": { "cptm": { "url": "http://localhost:8080/cptm" } } }"#,
    )
    .unwrap();
    let source = Arc::new(MockSource::new().with_page("http://localhost:8080/cptm", CPTM_PAGE));
    let engine = engine_with(source.clone(), config);

    let records = engine.fetch("cptm").await.unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_registered_provider_is_resolvable() {
    let mut registry = ProviderRegistry::with_builtin();
    registry
        .register("trem", "alias of cptm", tpsp::extractors::CptmExtractor::from_config)
        .unwrap();

    let source = mock_pages();
    let engine = StatusEngine::new(AppConfig::default(), registry, source.clone());

    assert_eq!(engine.registry().list_names(), vec!["cptm", "metro", "trem"]);
    assert_eq!(engine.fetch("trem").await.unwrap().len(), 7);
}
