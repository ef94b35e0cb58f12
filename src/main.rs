use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use upi_checkout::classifier::bintable::BinTableClient;
use upi_checkout::config::AppConfig;
use upi_checkout::registry::BankRegistry;
use upi_checkout::service::form_service::FormService;
use upi_checkout::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let registry = BankRegistry::load(cfg.bank_registry_path.as_deref())?;

    let classifier = Arc::new(BinTableClient {
        base_url: cfg.bin_lookup_base_url.clone(),
        api_key: cfg.bin_lookup_api_key.clone(),
        timeout_ms: cfg.bin_lookup_timeout_ms,
        client: reqwest::Client::new(),
    });

    let form_service = FormService::new(registry, classifier, cfg.submit_delay_ms);

    let state = AppState { form_service };

    let app = Router::new()
        .route("/health", get(upi_checkout::http::handlers::sessions::health))
        .route("/banks", get(upi_checkout::http::handlers::banks::list_banks))
        .route("/sessions", post(upi_checkout::http::handlers::sessions::create_session))
        .route(
            "/sessions/:session_id",
            get(upi_checkout::http::handlers::sessions::get_session),
        )
        .route(
            "/sessions/:session_id/events",
            post(upi_checkout::http::handlers::sessions::post_event),
        )
        .route(
            "/sessions/:session_id/submit",
            post(upi_checkout::http::handlers::sessions::submit),
        )
        .route(
            "/sessions/:session_id/qr",
            get(upi_checkout::http::handlers::sessions::get_qr),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
