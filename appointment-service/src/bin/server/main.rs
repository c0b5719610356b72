use std::sync::Arc;

use appointment_service::config::Config;
use appointment_service::domain::appointment::service::AppointmentService;
use appointment_service::domain::user::service::AuthService;
use appointment_service::inbound::http::router::create_router;
use appointment_service::outbound::repositories::PostgresAppointmentRepository;
use appointment_service::outbound::repositories::PostgresDoctorRepository;
use appointment_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use mockable::DefaultClock;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appointment_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "appointment-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
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

    let signing_key = config.jwt.signing_key()?;
    let authenticator = Arc::new(
        Authenticator::new(&signing_key, config.jwt.token_lifetime()?)
            .with_password_hasher(config.password.hasher()?),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let doctor_repository = Arc::new(PostgresDoctorRepository::new(pg_pool.clone()));
    let appointment_repository = Arc::new(PostgresAppointmentRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let appointment_service = Arc::new(AppointmentService::new(
        appointment_repository,
        doctor_repository,
        Arc::new(DefaultClock),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, appointment_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
