use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::auth::models::TokenLifetimes;
use account_service::domain::auth::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::events::KafkaAuthEventProducer;
use account_service::outbound::oauth::GoogleOAuthClient;
use account_service::outbound::repositories::password_reset::PostgresPasswordResetRepository;
use account_service::outbound::repositories::user::PostgresUserRepository;
use authkit::PasswordHasher;
use authkit::TokenCodec;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        kafka_brokers = %config.kafka.brokers,
        kafka_topic = %config.kafka.topic,
        access_ttl_minutes = config.tokens.access_ttl_minutes,
        refresh_ttl_days = config.tokens.refresh_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_codec = Arc::new(TokenCodec::from_rsa_pem(
        config.keys.private_key_pem.as_bytes(),
        config.keys.public_key_pem.as_bytes(),
    )?);
    let password_hasher = PasswordHasher::with_params(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;
    let token_lifetimes = TokenLifetimes {
        access: Duration::minutes(config.tokens.access_ttl_minutes),
        refresh: Duration::days(config.tokens.refresh_ttl_days),
    };

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let reset_repository = Arc::new(PostgresPasswordResetRepository::new(pg_pool));
    let event_producer = Arc::new(KafkaAuthEventProducer::new(&config)?);
    let oauth_client = Arc::new(GoogleOAuthClient::new(&config));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        reset_repository,
        event_producer,
        oauth_client,
        password_hasher,
        Arc::clone(&token_codec),
        token_lifetimes,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_codec);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
