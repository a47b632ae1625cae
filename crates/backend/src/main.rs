pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post, put},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Diretorio dos logs
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Silencia o SQL, mantem os logs da aplicacao
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Initialize database (path comes from config.toml)
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(Some(&db_path.to_string_lossy()))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Seed the singleton settings rows and the anti-forgery secret
    system::initialization::ensure_antiforgery_secret().await?;
    system::initialization::ensure_settings_exist().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // O frontend compilado mora em dist/; rotas desconhecidas voltam para o
    // index.html para o reload funcionar nas abas de configuracao
    let spa = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM ROUTES
        // ========================================
        .route(
            "/api/system/antiforgery",
            get(handlers::antiforgery::issue_token),
        )
        // ========================================
        // CONFIGURATION ROUTES
        // ========================================
        .route(
            "/api/configuration/general",
            get(handlers::a002_general_settings::get_settings),
        )
        .route(
            "/api/configuration/general/:id",
            put(handlers::a002_general_settings::update_settings)
                .post(handlers::a002_general_settings::update_settings),
        )
        .route(
            "/api/configuration/evolution",
            get(handlers::a001_whatsapp_integration::get_settings),
        )
        .route(
            "/api/configuration/evolution/:id",
            put(handlers::a001_whatsapp_integration::update_settings)
                .post(handlers::a001_whatsapp_integration::update_settings),
        )
        .route(
            "/api/configuration/evolution/test",
            post(handlers::a001_whatsapp_integration::test_connection),
        )
        .route(
            "/api/configuration/reset-password-email",
            get(handlers::a003_reset_password_email::get_settings),
        )
        .route(
            "/api/configuration/reset-password-email/:id",
            put(handlers::a003_reset_password_email::update_settings)
                .post(handlers::a003_reset_password_email::update_settings),
        )
        .fallback_service(spa)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port 3000 is already in use. Please ensure no other process is using this port."
                );
            } else {
                tracing::error!("Failed to bind to port 3000. Error: {}", e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
