use anyhow::Context;
use api::{
    Config, build, connect,
    telemetry::{get_subscriber, init_subscriber},
    time::TimeSource,
};

/// Hotel listings API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root.
///
/// Required environment variables:
/// - DATABASE_URL: SQLite connection string (the file is created if missing)
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, the default, or a
///   comma-separated list for production)
/// - BASE_URL: Public base URL used in uploaded image links (defaults to
///   http://IP_ADDRESS:PORT)
///
/// Example .env file:
/// DATABASE_URL=sqlite://hotels.db
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// BASE_URL=http://localhost:8000
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // silently ignore a missing .env file
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    let pool = connect(&config.database_url)
        .await
        .context("Failed to open the database")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    pool.close().await;

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();
    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new(jiff::Timestamp::now());

    let server = build(&mut config, time_source).await?;
    tracing::info!("Listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
