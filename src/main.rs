use std::sync::Arc;

use carelink::api::router::build_router;
use carelink::bootstrap;
use carelink::config::Config;
use carelink::database::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carelink=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    sqlx::any::install_default_drivers();
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Create schema on first run
    db.init_schema().await?;
    tracing::info!("Database schema ready");

    // Seed the admin identity
    if let Err(e) = bootstrap::initialize_admin(&db, &config).await {
        tracing::error!("Failed to initialize admin user: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()).into());
    }

    // Build application state and router
    let state = bootstrap::build_app_state(Arc::new(db));
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
