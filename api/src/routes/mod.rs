pub mod hotel;
pub mod login;
pub mod room;
pub mod upload;

use actix_identity::Identity;
use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use uuid::Uuid;

use crate::store::StoreError;
use crate::telemetry::log_error;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(login::login)
        .service(login::login_check)
        .service(login::user_profile)
        .service(login::logout)
        .service(login::create_account)
        .service(hotel::create_hotel)
        .service(hotel::get_hotel)
        .service(hotel::list_hotels)
        .service(hotel::my_hotels)
        .service(hotel::update_hotel)
        .service(hotel::delete_hotel)
        .service(
            web::resource(["/hotel", "/hotel/"])
                .route(web::patch().to(hotel::update_hotel_missing_id)),
        )
        .service(room::create_room)
        .service(room::update_room)
        .service(room::delete_room)
        .service(
            web::resource(["/room", "/room/"])
                .route(web::patch().to(room::update_room_missing_id)),
        )
        .service(upload::upload_image)
        .service(upload::get_image)
        .service(upload::delete_image)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Forbidden")]
    Forbidden(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError(e) => {
                HttpResponse::Unauthorized().body(format!("{self}: {e}"))
            }
            Self::Forbidden(e) => {
                HttpResponse::Forbidden().body(format!("{self}: {e}"))
            }
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(e) => {
                log_error(anyhow::anyhow!("{e:#}"));
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(_) | StoreError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
            StoreError::NotHotelOwner => APIError::Forbidden(e.into()),
            StoreError::UserNotFound
            | StoreError::HotelNotFound
            | StoreError::RoomNotFound
            | StoreError::ImageNotFound => APIError::NotFound(e.into()),
            StoreError::InvalidUsername(_)
            | StoreError::InvalidHotel(_)
            | StoreError::InvalidRoom(_)
            | StoreError::ImageTooLarge
            | StoreError::NotAnImage
            | StoreError::NotUnique(_) => APIError::BadRequest(e.into()),
        }
    }
}

fn get_user_id(user: &Identity) -> Result<payloads::UserId, APIError> {
    let id_str = user.id().map_err(|e| {
        APIError::AuthError(
            anyhow::Error::from(e).context("Invalid login session"),
        )
    })?;
    // recorded here, but attaches to the span of the calling route
    tracing::Span::current()
        .record("user_id", tracing::field::display(&id_str));
    Ok(payloads::UserId(
        Uuid::parse_str(&id_str).map_err(anyhow::Error::from)?,
    ))
}

/// Like [`get_user_id`], for routes that check something else before the
/// session.
fn require_user(user: Option<Identity>) -> Result<payloads::UserId, APIError> {
    match user {
        Some(user) => get_user_id(&user),
        None => Err(APIError::AuthError(anyhow::anyhow!("Not logged in"))),
    }
}

/// Parse a UUID path segment. Blank and malformed ids are both bad requests.
fn parse_id(raw: &str, what: &str) -> Result<Uuid, APIError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(APIError::BadRequest(anyhow::anyhow!("{what} is required")));
    }
    Uuid::parse_str(raw).map_err(|e| {
        APIError::BadRequest(anyhow::Error::from(e).context(format!("Invalid {what}")))
    })
}

/// Turn a failed JSON extraction into a plain-text bad request.
fn json_body<T>(
    body: Result<web::Json<T>, actix_web::Error>,
) -> Result<T, APIError> {
    body.map(web::Json::into_inner)
        .map_err(|e| APIError::BadRequest(anyhow::anyhow!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn error_statuses() {
        let status = |e: APIError| e.error_response().status();
        assert_eq!(
            status(StoreError::NotHotelOwner.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status(StoreError::HotelNotFound.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(StoreError::NotAnImage.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(APIError::UnexpectedError(anyhow::anyhow!("db down"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn ids_must_be_present_and_valid() {
        assert!(matches!(parse_id("", "Hotel ID"), Err(APIError::BadRequest(_))));
        assert!(matches!(parse_id("  ", "Hotel ID"), Err(APIError::BadRequest(_))));
        assert!(matches!(
            parse_id("not-a-uuid", "Hotel ID"),
            Err(APIError::BadRequest(_))
        ));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Hotel ID").unwrap(), id);
    }
}
