use crate::{HotelId, Room, RoomId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ReqwestResult {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)).json(body))
            .await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.patch(self.format_url(path)).json(body))
            .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)))
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.get(self.format_url(path)))
            .await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.delete(self.format_url(path)))
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<(), ClientError> {
        let response = self.post("create_account", details).await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", &details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user_profile").await?;
        ok_body(response).await
    }

    pub async fn create_hotel(
        &self,
        details: &crate::Hotel,
    ) -> Result<HotelId, ClientError> {
        let response = self.post("create_hotel", details).await?;
        ok_body(response).await
    }

    /// Public; no session needed.
    pub async fn get_hotel(
        &self,
        hotel_id: &HotelId,
    ) -> Result<responses::HotelWithRooms, ClientError> {
        let response = self.empty_get(&format!("hotel/{hotel_id}")).await?;
        ok_body(response).await
    }

    pub async fn list_hotels(
        &self,
    ) -> Result<Vec<responses::HotelWithRooms>, ClientError> {
        let response = self.empty_get("hotels").await?;
        ok_body(response).await
    }

    /// Hotels owned by the current user.
    pub async fn my_hotels(
        &self,
    ) -> Result<Vec<responses::HotelWithRooms>, ClientError> {
        let response = self.empty_get("my_hotels").await?;
        ok_body(response).await
    }

    /// Merge `patch` into the hotel, returning the stored result.
    pub async fn update_hotel(
        &self,
        hotel_id: &HotelId,
        patch: &requests::HotelPatch,
    ) -> Result<responses::Hotel, ClientError> {
        let response = self.patch(&format!("hotel/{hotel_id}"), patch).await?;
        ok_body(response).await
    }

    /// Also deletes every room of the hotel.
    pub async fn delete_hotel(
        &self,
        hotel_id: &HotelId,
    ) -> Result<(), ClientError> {
        let response = self.empty_delete(&format!("hotel/{hotel_id}")).await?;
        ok_empty(response).await
    }

    pub async fn create_room(
        &self,
        details: &Room,
    ) -> Result<RoomId, ClientError> {
        let response = self.post("create_room", details).await?;
        ok_body(response).await
    }

    pub async fn update_room(
        &self,
        room_id: &RoomId,
        patch: &requests::RoomPatch,
    ) -> Result<responses::Room, ClientError> {
        let response = self.patch(&format!("room/{room_id}"), patch).await?;
        ok_body(response).await
    }

    pub async fn delete_room(&self, room_id: &RoomId) -> Result<(), ClientError> {
        let response = self.empty_delete(&format!("room/{room_id}")).await?;
        ok_empty(response).await
    }

    pub async fn upload_image(
        &self,
        details: &requests::UploadImage,
    ) -> Result<responses::UploadedImage, ClientError> {
        let response = self.post("upload", details).await?;
        ok_body(response).await
    }

    /// `success` is false when no image of the current user had that key.
    pub async fn delete_image(
        &self,
        details: &requests::DeleteImage,
    ) -> Result<responses::DeleteImageResult, ClientError> {
        let response = self.post("upload/delete", details).await?;
        ok_body(response).await
    }

    /// Fetch the stored bytes of an uploaded image.
    pub async fn get_image(&self, key: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.empty_get(&format!("uploads/{key}")).await?;
        if !response.status().is_success() {
            return Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            ));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
