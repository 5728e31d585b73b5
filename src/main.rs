// HTTP API server for the myth collection catalog

use anyhow::Result;
use myth_collection::api::ApiServer;
use myth_collection::service::Services;
use myth_collection::tracing::init_tracing;
use myth_collection::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load dotenv/env once (safe to call multiple times)
    env_util::init_env();
    init_tracing("info,sqlx=warn,actix_web=info")?;

    tracing::info!("Initializing myth collection API server");
    env_util::log_config_snapshot(
        "api_server",
        &["API_HOST", "API_PORT", "DATABASE_URL", "DB_MAX_CONNS", "AUTO_MIGRATE"],
    );

    let server = ApiServer::from_env()?;
    let services = Services::from_env().await?;

    server.run(services).await?;

    Ok(())
}
