use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{TEST_PNG, assert_status_code, spawn_app};

#[tokio::test]
async fn upload_then_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let uploaded = app.upload_test_image().await?;
    assert!(uploaded.key.ends_with(".png"));
    assert_eq!(
        payloads::image_key_from_url(&uploaded.url),
        Some(uploaded.key.as_str())
    );

    // served publicly with the sniffed content type
    app.client.logout().await?;
    let response = app.client.inner_client.get(&uploaded.url).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "image/png"
    );
    assert_eq!(app.client.get_image(&uploaded.key).await?, TEST_PNG);

    Ok(())
}

#[tokio::test]
async fn upload_requires_login() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.upload_test_image().await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn non_images_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let result = app
        .client
        .upload_image(&requests::UploadImage {
            file_name: "notes.png".into(),
            image_data: b"just some text".to_vec(),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut too_big = TEST_PNG.to_vec();
    too_big.resize(payloads::MAX_IMAGE_SIZE + 1, 0);
    let result = app
        .client
        .upload_image(&requests::UploadImage {
            file_name: "huge.png".into(),
            image_data: too_big,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn delete_image_reports_success() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let uploaded = app.upload_test_image().await?;
    let request = requests::DeleteImage {
        image_key: uploaded.key.clone(),
    };

    let result = app.client.delete_image(&request).await?;
    assert!(result.success);
    assert_status_code(
        app.client.get_image(&uploaded.key).await,
        StatusCode::NOT_FOUND,
    );

    // already gone
    let result = app.client.delete_image(&request).await?;
    assert!(!result.success);

    Ok(())
}

#[tokio::test]
async fn cannot_delete_others_image() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.create_bob_user().await?;
    let uploaded = app.upload_test_image().await?;

    app.login_bob().await?;
    let result = app
        .client
        .delete_image(&requests::DeleteImage {
            image_key: uploaded.key.clone(),
        })
        .await?;
    assert!(!result.success);

    assert_eq!(app.client.get_image(&uploaded.key).await?, TEST_PNG);

    Ok(())
}
