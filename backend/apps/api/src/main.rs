//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors are rendered by the
//! feature crates through `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Json, Router,
    http::{self, Method, header},
    routing::get,
};
use chrono_tz::Tz;
use interaction::{InteractionConfig, interaction_router, store::InteractionStore};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::{UserConfig, store::UserStore, user_router};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "https://interactions.itexico.com,http://localhost:4200";
const DEFAULT_BUSINESS_TIMEZONE: &str = "America/Mexico_City";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,interaction=info,user=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
    let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {value}"))?,
        Err(_) => 5,
    };

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Interaction configuration
    let interaction_config =
        interaction_config(env::var("OFFICE_IP").ok(), env::var("BUSINESS_TIMEZONE").ok())?;
    tracing::info!(
        office_ip = %interaction_config.office_ip,
        business_timezone = %interaction_config.business_timezone,
        "Interaction scoring configured"
    );

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    // Build router
    let app = app(
        interaction_router(
            InteractionStore::new(pool.clone()),
            UserStore::new(pool.clone()),
            interaction_config,
        ),
        user_router(UserStore::new(pool.clone()), UserConfig::default()),
    )
    .layer(TraceLayer::new_for_http())
    .layer(cors_layer(&frontend_origins));

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR is not a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Top-level router: welcome route plus the feature routers
fn app(interactions: Router, users: Router) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(interactions)
        .merge(users)
}

/// GET /
async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Interaction Tracker API" }))
}

/// Scoring config from `OFFICE_IP` and `BUSINESS_TIMEZONE`; unset means default
fn interaction_config(
    office_ip: Option<String>,
    timezone: Option<String>,
) -> anyhow::Result<InteractionConfig> {
    let mut config = InteractionConfig::default();

    if let Some(office_ip) = office_ip {
        let office_ip = office_ip.trim();
        if office_ip.is_empty() {
            anyhow::bail!("OFFICE_IP is set but blank");
        }
        config = config.with_office_ip(office_ip);
    }

    let timezone = timezone.unwrap_or_else(|| DEFAULT_BUSINESS_TIMEZONE.to_string());
    let timezone: Tz = timezone
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("BUSINESS_TIMEZONE '{timezone}' is not an IANA zone: {e}"))?;

    Ok(config.with_business_timezone(timezone))
}

fn cors_layer(frontend_origins: &str) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
