use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use kg_api::{create_app, telemetry, AppState};
use kg_core::services::{AuthService, RevocationSweepConfig, RevocationSweeper, SystemClock};
use kg_infra::JsonFileStore;
use kg_shared::AppConfig;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting KeyGate API server");

    let store = JsonFileStore::from_config(&config.storage)
        .await
        .context("failed to open the credential store")?;
    let auth = AuthService::initialize(&store, &config.auth, Arc::new(SystemClock))
        .await
        .context("failed to initialize authentication")?;
    let auth = Arc::new(auth);

    let sweeper = Arc::new(RevocationSweeper::new(
        Arc::clone(auth.revocations()),
        RevocationSweepConfig::from(&config.auth),
    ));
    let _sweeper_task = sweeper.start_background_task();

    let state = web::Data::new(
        AppState::new(auth).with_token_header(config.auth.token_header.clone()),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
