use payloads::{HotelId, RoomId, requests::RoomPatch};
use reqwest::StatusCode;
use uuid::Uuid;

use test_helpers::{TEST_PNG, assert_status_code, room_details_a, spawn_app};

#[tokio::test]
async fn rooms_listed_with_hotel() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    let room_id = app.create_test_room(hotel_id).await?;

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.rooms.len(), 1);
    assert_eq!(hotel.rooms[0].room_id, room_id);
    assert_eq!(hotel.rooms[0].room_details, room_details_a(hotel_id));

    Ok(())
}

#[tokio::test]
async fn only_owner_adds_rooms() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.create_bob_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    app.login_bob().await?;
    let result = app.client.create_room(&room_details_a(hotel_id)).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    let missing = HotelId(Uuid::new_v4());
    let result = app.client.create_room(&room_details_a(missing)).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    app.client.logout().await?;
    let result = app.client.create_room(&room_details_a(hotel_id)).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    assert_eq!(app.count_rooms().await?, 0);

    Ok(())
}

#[tokio::test]
async fn invalid_room_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;

    let mut details = room_details_a(hotel_id);
    details.image = "".into();
    assert_status_code(
        app.client.create_room(&details).await,
        StatusCode::BAD_REQUEST,
    );

    let mut details = room_details_a(hotel_id);
    details.room_price = -5;
    assert_status_code(
        app.client.create_room(&details).await,
        StatusCode::BAD_REQUEST,
    );

    assert_eq!(app.count_rooms().await?, 0);

    Ok(())
}

#[tokio::test]
async fn update_room_merges_patch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let room_id = app.create_test_room(hotel_id).await?;

    let patch = RoomPatch {
        room_price: Some(210),
        balcony: Some(true),
        ..Default::default()
    };
    let room = app.client.update_room(&room_id, &patch).await?;
    let again = app.client.update_room(&room_id, &patch).await?;
    assert_eq!(room.room_details, again.room_details);

    let mut expected = room_details_a(hotel_id);
    expected.room_price = 210;
    expected.amenities.balcony = true;
    assert_eq!(room.room_details, expected);

    Ok(())
}

#[tokio::test]
async fn update_room_checks() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    app.create_bob_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let room_id = app.create_test_room(hotel_id).await?;

    let patch = RoomPatch {
        title: Some("Renamed".into()),
        ..Default::default()
    };

    // the parent hotel is not patchable
    let response = app
        .client
        .inner_client
        .patch(format!("{}/api/room/{room_id}", app.client.address))
        .json(&serde_json::json!({ "hotel_id": Uuid::new_v4() }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .client
        .inner_client
        .patch(format!("{}/api/room", app.client.address))
        .json(&patch)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_status_code(
        app.client.update_room(&RoomId(Uuid::new_v4()), &patch).await,
        StatusCode::NOT_FOUND,
    );

    app.login_bob().await?;
    assert_status_code(
        app.client.update_room(&room_id, &patch).await,
        StatusCode::FORBIDDEN,
    );
    assert_status_code(
        app.client.delete_room(&room_id).await,
        StatusCode::FORBIDDEN,
    );

    app.client.logout().await?;
    assert_status_code(
        app.client.update_room(&room_id, &patch).await,
        StatusCode::UNAUTHORIZED,
    );

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.rooms[0].room_details, room_details_a(hotel_id));

    Ok(())
}

#[tokio::test]
async fn delete_room() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let room_id = app.create_test_room(hotel_id).await?;
    let other_room = app.create_test_room(hotel_id).await?;

    app.client.delete_room(&room_id).await?;

    let hotel = app.client.get_hotel(&hotel_id).await?;
    assert_eq!(hotel.rooms.len(), 1);
    assert_eq!(hotel.rooms[0].room_id, other_room);
    assert_status_code(
        app.client.delete_room(&room_id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn delete_room_removes_its_image() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let hotel_id = app.create_test_hotel().await?;
    let uploaded = app.upload_test_image().await?;

    let mut details = room_details_a(hotel_id);
    details.image = uploaded.url.clone();
    let room_id = app.client.create_room(&details).await?;
    let twin_id = app.client.create_room(&details).await?;
    assert_eq!(app.count_images().await?, 1);

    // still shown by the other room
    app.client.delete_room(&room_id).await?;
    assert_eq!(app.count_images().await?, 1);
    assert_eq!(app.client.get_image(&uploaded.key).await?, TEST_PNG);

    app.client.delete_room(&twin_id).await?;
    assert_eq!(app.count_images().await?, 0);
    assert_status_code(
        app.client.get_image(&uploaded.key).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
