use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use triage_store::apps_script::AppsScriptStore;
use triage_store::auth::{ServiceAccountAuth, ServiceAccountKey};
use triage_store::sheets::SheetsStore;
use triage_store::store::RecordStore;
use triage_wizard::wizard::Wizard;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Configuration problems are fatal here, before any table access.
    let config = config::from_env()?;

    let store: Arc<dyn RecordStore> = match config.backend {
        config::BackendConfig::AppsScript { webapp_url, token } => {
            tracing::info!("using script endpoint backend");
            Arc::new(AppsScriptStore::new(webapp_url, token))
        }
        config::BackendConfig::Sheets {
            spreadsheet_id,
            sheet,
            key_path,
        } => {
            let key = ServiceAccountKey::from_file(&key_path)?;
            tracing::info!(sheet = %sheet, "using direct values API backend");
            Arc::new(SheetsStore::new(
                spreadsheet_id,
                sheet,
                ServiceAccountAuth::new(key),
            ))
        }
    };

    let state = AppState::new(Wizard::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no session)
        .route("/health", get(routes::health::health_check))
        // The wizard surface
        .route("/triage", get(routes::triage::load_screen))
        .route("/triage/flags", post(routes::triage::submit_flags))
        .route(
            "/triage/classification",
            post(routes::triage::submit_classification),
        )
        .route("/triage/restart", post(routes::triage::restart))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
