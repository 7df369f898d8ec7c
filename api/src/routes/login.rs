use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};
use sqlx::SqlitePool;

use crate::password::{
    AuthError, Credentials, NewUserDetails, create_user, validate_credentials,
};
use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_user_id};

#[tracing::instrument(
    skip(credentials, pool),
    fields(username=tracing::field::Empty, user_id=tracing::field::Empty),
    ret,
)]
#[post("/login")]
pub async fn login(
    request: HttpRequest,
    credentials: web::Json<Credentials>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    tracing::Span::current()
        .record("username", tracing::field::display(&credentials.username));
    let user_id = validate_credentials(credentials.into_inner(), &pool)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials(_) => APIError::AuthError(e.into()),
            AuthError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
        })?;
    tracing::Span::current()
        .record("user_id", tracing::field::display(&user_id));
    Identity::login(&request.extensions(), user_id.to_string())
        .map_err(|e| APIError::UnexpectedError(e.into()))?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(user), fields(user_id=tracing::field::Empty))]
#[post("/login_check")]
pub async fn login_check(user: Identity) -> Result<HttpResponse, APIError> {
    get_user_id(&user)?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(
    skip(user, pool),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[get("/user_profile")]
pub async fn user_profile(
    user: Identity,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let user = store::read_user(&pool, &user_id).await?;
    Ok(HttpResponse::Ok().json(payloads::responses::UserProfile::from(user)))
}

#[tracing::instrument(skip(user), fields(user_id=tracing::field::Empty))]
#[post("/logout")]
pub async fn logout(user: Identity) -> Result<HttpResponse, APIError> {
    let _ = get_user_id(&user); // to instrument the user_id, if exists
    user.logout();
    Ok(HttpResponse::Ok().finish())
}

/// Creates the account and logs straight into it.
#[tracing::instrument(skip(request, new_user_details, pool, time_source))]
#[post("/create_account")]
pub async fn create_account(
    request: HttpRequest,
    new_user_details: web::Json<NewUserDetails>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let user_id =
        create_user(new_user_details.into_inner(), &pool, &time_source).await?;
    Identity::login(&request.extensions(), user_id.to_string())
        .map_err(|e| APIError::UnexpectedError(e.into()))?;
    Ok(HttpResponse::Ok().finish())
}
