use jiff::{Timestamp, ToSpan};
use payloads::{HotelId, requests::HotelPatch};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

use test_helpers::{
    TEST_PNG, TestApp, assert_status_code, hotel_details_a, room_details_a,
    spawn_app,
};

/// Send a hand-written JSON body, bypassing the typed patch.
async fn raw_patch(
    app: &TestApp,
    path: &str,
    body: serde_json::Value,
) -> anyhow::Result<reqwest::Response> {
    Ok(app
        .client
        .inner_client
        .patch(format!("{}/api/{path}", app.client.address))
        .json(&body)
        .send()
        .await?)
}

#[tokio::test]
async fn create_and_read_hotel() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let alice = app.client.user_profile().await?;

    let hotel_id = app.create_test_hotel().await?;

    // reading is public
    app.client.logout().await?;
    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.hotel_id, hotel_id);
    assert_eq!(hotel.owner_id, alice.user_id);
    assert_eq!(hotel.hotel_details, hotel_details_a());
    assert_eq!(hotel.created_at, "2025-01-01T00:00:00Z".parse::<Timestamp>()?);
    assert!(hotel.rooms.is_empty());

    let hotels = app.client.list_hotels().await?;
    assert_eq!(hotels.len(), 1);

    Ok(())
}

#[tokio::test]
async fn create_hotel_requires_login() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.create_hotel(&hotel_details_a()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);
    assert_eq!(app.count_hotels().await?, 0);

    Ok(())
}

#[tokio::test]
async fn create_invalid_hotel_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let mut details = hotel_details_a();
    details.title = "ab".into();
    let result = app.client.create_hotel(&details).await;
    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert!(text.contains("Title must be at least 3 characters long"));
        }
        _ => panic!("Expected APIError"),
    }

    // Sydney is not in Western Australia
    let mut details = hotel_details_a();
    details.state = "WA".into();
    let result = app.client.create_hotel(&details).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    assert_eq!(app.count_hotels().await?, 0);

    Ok(())
}

#[tokio::test]
async fn my_hotels_only_lists_own() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.create_bob_user().await?;

    let alice_hotel = app.create_test_hotel().await?;
    app.login_bob().await?;
    let mut details = hotel_details_a();
    details.title = "Bob's Lodge".into();
    app.client.create_hotel(&details).await?;

    let bobs = app.client.my_hotels().await?;
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].hotel_details.title, "Bob's Lodge");

    app.login_alice().await?;
    let alices = app.client.my_hotels().await?;
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].hotel_id, alice_hotel);

    assert_eq!(app.client.list_hotels().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn title_patch_changes_only_title() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let before = app.client.get_hotel(&hotel_id).await?;

    app.time_source.advance(1.hour());
    let response =
        raw_patch(&app, &format!("hotel/{hotel_id}"), json!({"title": "New Name"}))
            .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = before.hotel_details.clone();
    expected.title = "New Name".into();

    // the response carries the merged record
    let patched: payloads::responses::Hotel = response.json().await?;
    assert_eq!(patched.hotel_id, hotel_id);
    assert_eq!(patched.hotel_details.title, "New Name");
    assert_eq!(patched.hotel_details, expected);
    assert_eq!(patched.updated_at, before.created_at + 1.hour());

    let after = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(after.hotel, patched);
    assert_eq!(after.owner_id, before.owner_id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.updated_at, before.created_at + 1.hour());

    Ok(())
}

#[tokio::test]
async fn repeated_patch_is_idempotent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    let patch = HotelPatch {
        state: Some("VIC".into()),
        city: Some("Melbourne".into()),
        pool: Some(true),
        ..Default::default()
    };
    let once = app.client.update_hotel(&hotel_id, &patch).await?;
    let twice = app.client.update_hotel(&hotel_id, &patch).await?;
    assert_eq!(once.hotel_details, twice.hotel_details);
    assert_eq!(twice.hotel_details.city, "Melbourne");
    assert!(twice.hotel_details.amenities.pool);
    // untouched flags keep their values
    assert!(twice.hotel_details.amenities.breakfast);

    Ok(())
}

#[tokio::test]
async fn patch_without_id_is_bad_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    for path in ["hotel", "hotel/", "hotel/%20"] {
        let response = raw_patch(&app, path, json!({"title": "New Name"})).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
    }

    let response =
        raw_patch(&app, "hotel/not-a-uuid", json!({"title": "New Name"})).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.hotel_details.title, hotel_details_a().title);

    Ok(())
}

#[tokio::test]
async fn patch_without_session_is_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    app.client.logout().await?;

    let response =
        raw_patch(&app, &format!("hotel/{hotel_id}"), json!({"title": "New Name"}))
            .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.hotel_details.title, hotel_details_a().title);

    Ok(())
}

#[tokio::test]
async fn patch_by_other_user_is_forbidden() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.create_bob_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    app.login_bob().await?;
    let patch = HotelPatch {
        title: Some("Taken Over".into()),
        ..Default::default()
    };
    let result = app.client.update_hotel(&hotel_id, &patch).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    let result = app.client.delete_hotel(&hotel_id).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.hotel_details.title, hotel_details_a().title);

    Ok(())
}

#[tokio::test]
async fn missing_hotel_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let missing = HotelId(Uuid::new_v4());
    let patch = HotelPatch {
        title: Some("Nowhere Inn".into()),
        ..Default::default()
    };
    assert_status_code(
        app.client.update_hotel(&missing, &patch).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.get_hotel(&missing).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_hotel(&missing).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn patch_rejects_unlisted_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let before = app.client.get_hotel(&hotel_id).await?;

    let response = raw_patch(
        &app,
        &format!("hotel/{hotel_id}"),
        json!({"title": "New Name", "owner_id": Uuid::new_v4()}),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = raw_patch(
        &app,
        &format!("hotel/{hotel_id}"),
        json!({"title": 42}),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(after.hotel_details, before.hotel_details);
    assert_eq!(after.owner_id, before.owner_id);

    Ok(())
}

#[tokio::test]
async fn patch_is_validated_after_merge() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    // changing the country alone leaves an inconsistent state
    let patch = HotelPatch {
        country: Some("FR".into()),
        ..Default::default()
    };
    assert_status_code(
        app.client.update_hotel(&hotel_id, &patch).await,
        StatusCode::BAD_REQUEST,
    );

    let patch = HotelPatch {
        description: Some("short".into()),
        ..Default::default()
    };
    assert_status_code(
        app.client.update_hotel(&hotel_id, &patch).await,
        StatusCode::BAD_REQUEST,
    );

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.hotel_details, hotel_details_a());

    Ok(())
}

#[tokio::test]
async fn delete_hotel_removes_rooms() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    app.client.create_room(&room_details_a(hotel_id)).await?;
    app.client.create_room(&room_details_a(hotel_id)).await?;
    assert_eq!(app.count_rooms().await?, 2);

    app.client.delete_hotel(&hotel_id).await?;

    assert_status_code(
        app.client.get_hotel(&hotel_id).await,
        StatusCode::NOT_FOUND,
    );
    assert_eq!(app.count_hotels().await?, 0);
    assert_eq!(app.count_rooms().await?, 0);

    Ok(())
}

#[tokio::test]
async fn delete_hotel_removes_listing_images() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_image = app.upload_test_image().await?;
    let room_image = app.upload_test_image().await?;
    let unused_image = app.upload_test_image().await?;

    let mut details = hotel_details_a();
    details.image = hotel_image.url.clone();
    let hotel_id = app.client.create_hotel(&details).await?;
    let mut room = room_details_a(hotel_id);
    room.image = room_image.url.clone();
    app.client.create_room(&room).await?;
    assert_eq!(app.count_images().await?, 3);

    app.client.delete_hotel(&hotel_id).await?;

    assert_eq!(app.count_images().await?, 1);
    assert_eq!(app.client.get_image(&unused_image.key).await?, TEST_PNG);
    assert_status_code(
        app.client.get_image(&hotel_image.key).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
