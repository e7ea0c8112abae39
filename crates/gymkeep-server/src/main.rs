use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gymkeep_core::{GymService, SystemClock, UuidGenerator};
use gymkeep_db::{init_database, open_collections};
use gymkeep_server::{routes, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: GYMKEEP_LISTEN_ADDR (default: 0.0.0.0:3000)");
            eprintln!("Optional: GYMKEEP_DB_PATH (default: ./gymkeep.redb)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Gymkeep server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Database path: {}", config.db_path.display());

    // Initialize database
    let db = match init_database(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let collections = open_collections(db);
    let service = GymService::new(
        collections.members,
        collections.classes,
        collections.trainers,
        SystemClock::new(),
        UuidGenerator,
    );

    // Build router
    let app = routes::create_router(AppState::new(service));

    // Start server
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running at http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
