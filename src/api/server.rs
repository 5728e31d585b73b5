// API server implementation using actix-web

use std::time::Instant;

use crate::api::handlers::StartedAt;
use crate::api::{errors, middleware, routes};
use crate::service::Services;
use crate::util::env::{env_opt, env_parse, init_env};
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

/// Largest accepted request body (bulk CSV uploads).
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub struct ApiServer {
    pub host: String,
    pub port: u16,
}

impl ApiServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        init_env();

        let host = env_opt("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match env_opt("API_PORT") {
            Some(raw) => raw.trim().parse().context("Invalid API_PORT")?,
            None => env_parse("PORT", 8080u16),
        };

        Ok(Self { host, port })
    }

    /// Start the HTTP server
    pub async fn run(self, services: Services) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        tracing::info!(
            host = %self.host,
            port = %self.port,
            "Starting myth collection API server"
        );

        let services = web::Data::new(services);
        let started = web::Data::new(StartedAt(Instant::now()));

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();

            App::new()
                .app_data(services.clone())
                .app_data(started.clone())
                .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
                .app_data(
                    web::JsonConfig::default()
                        .limit(MAX_BODY_BYTES)
                        .error_handler(errors::json_error_handler),
                )
                .app_data(web::QueryConfig::default().error_handler(errors::query_error_handler))
                .wrap(logger)
                .wrap(compress)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}
