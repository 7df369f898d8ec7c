use api::time::TimeSource;
use api::{Config, telemetry};
use payloads::{
    HotelAmenities, HotelId, RoomAmenities, RoomId, requests, responses,
};
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use sqlx::{SqlitePool, migrate::Migrator};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

static MIGRATOR: Migrator = sqlx::migrate!("../api/migrations");

/// Smallest valid PNG: the 8-byte signature followed by an IHDR chunk for a
/// 1x1 image, enough for content sniffing.
pub const TEST_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89,
];

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub db_pool: SqlitePool,
    pub client: payloads::APIClient,
    pub time_source: TimeSource,
    /// The test's SQLite file, removed when the app is dropped.
    pub db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        remove_database_files(&self.db_path);
    }
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    /// Create alice's account. Creating an account also logs it in.
    pub async fn create_alice_user(&self) -> anyhow::Result<()> {
        self.client.create_account(&alice_credentials()).await?;
        Ok(())
    }

    /// Create bob's account, then restore whichever session was active before.
    pub async fn create_bob_user(&self) -> anyhow::Result<()> {
        let previous = self.client.user_profile().await.ok();
        self.client.create_account(&bob_credentials()).await?;
        self.client.logout().await?;
        if let Some(previous) = previous {
            self.client
                .login(&login_credentials_for(&previous.username))
                .await?;
        }
        Ok(())
    }

    pub async fn login_alice(&self) -> anyhow::Result<()> {
        self.client.logout().await?;
        self.client.login(&alice_login_credentials()).await?;
        Ok(())
    }

    pub async fn login_bob(&self) -> anyhow::Result<()> {
        self.client.logout().await?;
        self.client.login(&bob_login_credentials()).await?;
        Ok(())
    }

    /// Upload [`TEST_PNG`] as the current user.
    pub async fn upload_test_image(
        &self,
    ) -> anyhow::Result<responses::UploadedImage> {
        Ok(self
            .client
            .upload_image(&requests::UploadImage {
                file_name: "pixel.png".into(),
                image_data: TEST_PNG.to_vec(),
            })
            .await?)
    }

    /// Create [`hotel_details_a`] as the current user.
    pub async fn create_test_hotel(&self) -> anyhow::Result<HotelId> {
        Ok(self.client.create_hotel(&hotel_details_a()).await?)
    }

    pub async fn create_test_room(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<RoomId> {
        Ok(self.client.create_room(&room_details_a(hotel_id)).await?)
    }

    /// Number of hotel rows, read straight from the database.
    pub async fn count_hotels(&self) -> anyhow::Result<i64> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.db_pool)
            .await?)
    }

    pub async fn count_rooms(&self) -> anyhow::Result<i64> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.db_pool)
            .await?)
    }

    pub async fn count_images(&self) -> anyhow::Result<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM uploaded_images")
                .fetch_one(&self.db_pool)
                .await?,
        )
    }
}

pub fn alice_credentials() -> requests::CreateAccount {
    requests::CreateAccount {
        username: "alice".into(),
        password: "supersecret".into(),
    }
}

pub fn alice_login_credentials() -> requests::LoginCredentials {
    to_login_credentials(&alice_credentials())
}

pub fn bob_credentials() -> requests::CreateAccount {
    requests::CreateAccount {
        username: "bob".into(),
        password: "bobspw".into(),
    }
}

pub fn bob_login_credentials() -> requests::LoginCredentials {
    to_login_credentials(&bob_credentials())
}

fn login_credentials_for(username: &str) -> requests::LoginCredentials {
    match username {
        "bob" => bob_login_credentials(),
        _ => alice_login_credentials(),
    }
}

pub fn to_login_credentials(
    create_account: &requests::CreateAccount,
) -> requests::LoginCredentials {
    requests::LoginCredentials {
        username: create_account.username.clone(),
        password: create_account.password.clone(),
    }
}

pub fn hotel_details_a() -> payloads::Hotel {
    payloads::Hotel {
        title: "Harbour View".into(),
        description: "Family run hotel overlooking the harbour".into(),
        image: "http://127.0.0.1/api/uploads/harbour.png".into(),
        country: "AU".into(),
        state: "NSW".into(),
        city: "Sydney".into(),
        address: "12 Circular Quay West".into(),
        location_description: "Five minutes walk from the opera house".into(),
        amenities: HotelAmenities {
            breakfast: true,
            free_wifi: true,
            ..Default::default()
        },
    }
}

pub fn room_details_a(hotel_id: HotelId) -> payloads::Room {
    payloads::Room {
        hotel_id,
        title: "Harbour Double".into(),
        description: "Double room with a view of the bridge".into(),
        image: "http://127.0.0.1/api/uploads/double.png".into(),
        bed_count: 1,
        guest_count: 2,
        bathroom_count: 1,
        king_bed: 0,
        queen_bed: 1,
        room_price: 180,
        amenities: RoomAmenities {
            tv: true,
            ocean_view: true,
            ..Default::default()
        },
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new("2025-01-01T00:00:00Z".parse().unwrap());

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();

    let (db_pool, db_path) = setup_database().await.unwrap();
    let mut config = Config {
        database_url: database_url(&db_path),
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        base_url: None,
    };

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    let server = api::build(&mut config, time_source.clone()).await.unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        db_pool,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
        time_source,
        db_path,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

fn database_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

/// Create a fresh SQLite file for the test and migrate it, returning a
/// connection and the file's path.
async fn setup_database() -> Result<(SqlitePool, PathBuf), sqlx::Error> {
    let path = std::env::temp_dir()
        .join(format!("hotels-test-{}.db", Uuid::new_v4()));
    let conn = api::connect(&database_url(&path)).await?;
    MIGRATOR.run(&conn).await?;
    Ok((conn, path))
}

/// Remove the database file along with any journal SQLite left beside it.
/// Missing files are fine.
fn remove_database_files(path: &Path) {
    let _ = std::fs::remove_file(path);
    for suffix in ["-wal", "-shm", "-journal"] {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(sidecar);
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn database_file_removed_on_drop() {
        let app = spawn_app().await;
        let path = app.db_path.clone();
        assert!(path.exists());

        drop(app);
        assert!(!path.exists());
    }

    #[test]
    fn removing_missing_files_is_quiet() {
        let path = std::env::temp_dir()
            .join(format!("hotels-test-{}.db", Uuid::new_v4()));
        remove_database_files(&path);
        assert!(!path.exists());
    }
}
