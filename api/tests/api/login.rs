use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{
    alice_credentials, alice_login_credentials, assert_status_code, spawn_app,
};

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // test a login with an invalid user
    let body = requests::LoginCredentials {
        username: "random".into(),
        password: "random".into(),
    };
    let result = app.client.login(&body).await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "Authentication failed: Invalid credentials");
        }
        _ => {
            panic!("Expected APIError");
        }
    }

    // login check should fail
    let is_logged_in = app.client.login_check().await?;
    assert!(!is_logged_in);

    Ok(())
}

#[tokio::test]
async fn wrong_password_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.client.logout().await?;

    let body = requests::LoginCredentials {
        username: "alice".into(),
        password: "not-her-password".into(),
    };
    let result = app.client.login(&body).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);
    assert!(!app.client.login_check().await?);

    Ok(())
}

#[tokio::test]
async fn create_account_logs_in() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.create_alice_user().await?;

    // check for valid session
    assert!(app.client.login_check().await?);
    let profile = app.client.user_profile().await?;
    assert_eq!(profile.username, "alice");

    Ok(())
}

#[tokio::test]
async fn logout_then_login() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    app.client.logout().await?;
    assert!(!app.client.login_check().await?);
    assert_status_code(
        app.client.user_profile().await,
        StatusCode::UNAUTHORIZED,
    );

    app.client.login(&alice_login_credentials()).await?;
    assert!(app.client.login_check().await?);

    Ok(())
}

#[tokio::test]
async fn duplicate_username_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.client.logout().await?;

    let result = app.client.create_account(&alice_credentials()).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn bad_usernames_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut body = requests::CreateAccount {
        username: (0..52).map(|_| "X").collect::<String>(),
        password: "a-password".into(),
    };
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    body.username = "ab".into();
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    assert!(!app.client.login_check().await?);

    Ok(())
}
