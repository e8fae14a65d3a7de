use std::sync::Arc;

use auth::Authenticator;
use brain_service::config::Config;
use brain_service::domain::content::ports::ContentServicePort;
use brain_service::domain::content::service::ContentService;
use brain_service::domain::share::ports::ShareServicePort;
use brain_service::domain::share::service::ShareService;
use brain_service::domain::user::ports::UserServicePort;
use brain_service::domain::user::service::UserService;
use brain_service::inbound::http::router::create_router;
use brain_service::outbound::repositories::PostgresContentRepository;
use brain_service::outbound::repositories::PostgresShareLinkRepository;
use brain_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brain_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "brain-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database.url)?;

    // An unreachable store is logged but not fatal: the listener starts
    // anyway and each request surfaces its own storage error.
    match pg_pool.acquire().await {
        Ok(_) => {
            tracing::info!(database = "postgresql", "Database connection established");
            match sqlx::migrate!("./migrations").run(&pg_pool).await {
                Ok(()) => {
                    tracing::info!(database = "postgresql", "Database migrations completed")
                }
                Err(e) => tracing::error!(error = %e, "Database migrations failed"),
            }
        }
        Err(e) => tracing::error!(error = %e, "Database connection failed"),
    }

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let content_repository = Arc::new(PostgresContentRepository::new(pg_pool.clone()));
    let share_repository = Arc::new(PostgresShareLinkRepository::new(pg_pool));

    let user_service: Arc<dyn UserServicePort> =
        Arc::new(UserService::new(Arc::clone(&user_repository)));
    let content_service: Arc<dyn ContentServicePort> =
        Arc::new(ContentService::new(Arc::clone(&content_repository)));
    let share_service: Arc<dyn ShareServicePort> = Arc::new(ShareService::new(
        share_repository,
        user_repository,
        content_repository,
    ));

    let address = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(user_service, content_service, share_service, authenticator);
    axum::serve(listener, application).await?;

    Ok(())
}
