pub mod password;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_session::{
    SessionMiddleware, config::BrowserSession, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, time::Duration};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::net::TcpListener;
use std::str::FromStr;

use crate::time::TimeSource;

/// Upload requests carry the image bytes as a JSON array, which takes up to
/// four characters per byte.
const JSON_BODY_LIMIT: usize = payloads::MAX_IMAGE_SIZE * 5;

/// Open a pool on `database_url`, creating the database file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options =
        SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub async fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> std::io::Result<Server> {
    let secret_key = Key::generate(); // key for signing session cookies
    let db_pool = web::Data::new(
        connect(&config.database_url)
            .await
            .map_err(std::io::Error::other)?,
    );
    let time_source = web::Data::new(time_source);

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    if config.base_url.is_none() {
        config.base_url = Some(format!("http://{}:{}", config.ip, config.port));
    }

    let allowed_origins = config.allowed_origins.clone();
    let app_config = web::Data::new(config.clone());
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            allowed_origins.iter().fold(
                Cors::default()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        App::new()
            .wrap(cors)
            // Signed cookie holding the user id
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    secret_key.clone(),
                )
                .cookie_name("hotels".into())
                .session_lifecycle(
                    BrowserSession::default().state_ttl(Duration::days(30)),
                )
                .build(),
            )
            .service(routes::api_services())
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .app_data(db_pool.clone())
            .app_data(time_source.clone())
            .app_data(app_config.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

#[derive(Debug, Clone)]
pub struct Config {
    /// e.g. "sqlite://hotels.db"
    pub database_url: String,
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Prefix for the URLs of uploaded images. Defaults to the bound address.
    pub base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env::var;

        let required =
            |name: &'static str| var(name).map_err(|_| ConfigError::Missing(name));

        let port = required("PORT")?;
        let port = port.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port,
        })?;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base_url = var("BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Config {
            database_url: required("DATABASE_URL")?,
            ip: required("IP_ADDRESS")?,
            port,
            allowed_origins,
            base_url,
        })
    }

    /// Public URL of an uploaded image.
    pub fn upload_url(&self, image_key: &str) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => format!("http://{}:{}", self.ip, self.port),
        };
        format!("{base}/api/uploads/{image_key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            ip: "127.0.0.1".into(),
            port: 8000,
            allowed_origins: vec!["*".into()],
            base_url: base_url.map(Into::into),
        }
    }

    #[test]
    fn upload_url_ends_in_key() {
        assert_eq!(
            config(None).upload_url("abc123.png"),
            "http://127.0.0.1:8000/api/uploads/abc123.png"
        );
        let url = config(Some("https://hotels.example.com"))
            .upload_url("abc123.png");
        assert_eq!(url, "https://hotels.example.com/api/uploads/abc123.png");
        assert_eq!(payloads::image_key_from_url(&url), Some("abc123.png"));
    }
}
