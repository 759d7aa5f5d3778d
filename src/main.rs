use reelbase::middleware::auth::AuthKeys;
use reelbase::{config::Config, db, routes, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 0. Load .env file immediately
    // Silently ignores if no .env exists.
    dotenvy::dotenv().ok();

    // 1. Initialize logging
    // Uses tracing for structured logs. Respects RUST_LOG env var.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelbase=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting reelbase API...");

    // 2. Read configuration
    // Fails fast if DB or SECRET_KEY is missing.
    let config = Config::from_env()?;

    // 3. Connect to MongoDB and define the unique indexes
    let db = db::connect(&config).await?;
    tracing::info!("Connected to MongoDB");

    // 4. Build the app state passed to every handler
    let state = AppState {
        db,
        auth: AuthKeys::new(&config.secret_key),
    };
    let app = routes::create_routes(state);

    // 5. Start the server
    // 0.0.0.0 so it binds to all interfaces (necessary in Docker).
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
