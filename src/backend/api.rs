use crate::backend::model::{Ack, Photo, User};
use crate::config::AppConfig;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin typed wrapper over the photo-sharing HTTP API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn photos_of_user(
        &self,
        user_id: &str,
        logged_in_user_id: Option<&str>,
    ) -> Result<Vec<Photo>, ApiError> {
        let mut req = self.http.get(self.url(&format!("/photosOfUser/{}", user_id)));
        if let Some(viewer) = logged_in_user_id {
            req = req.query(&[("currentLoggedUserId", viewer)]);
        }
        decode(checked(req.send().await?).await?).await
    }

    pub async fn user(&self, user_id: &str) -> Result<User, ApiError> {
        let resp = self.http.get(self.url(&format!("/user/{}", user_id))).send().await?;
        decode(checked(resp).await?).await
    }

    pub async fn like_photo(&self, photo_id: &str) -> Result<Ack, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/likephoto/{}", photo_id)))
            .send()
            .await?;
        ack(checked(resp).await?).await
    }

    pub async fn add_comment(&self, photo_id: &str, comment: &str) -> Result<Ack, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/commentsOfPhoto/{}", photo_id)))
            .json(&json!({ "comment": comment }))
            .send()
            .await?;
        ack(checked(resp).await?).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<Ack, ApiError> {
        let resp = self
            .http
            .delete(self.url("/deletecommentbyid"))
            .json(&json!({ "commentId": comment_id }))
            .send()
            .await?;
        ack(checked(resp).await?).await
    }

    pub async fn delete_photo(&self, photo_id: &str) -> Result<Ack, ApiError> {
        let resp = self
            .http
            .delete(self.url("/deletephotobyid"))
            .json(&json!({ "photoId": photo_id }))
            .send()
            .await?;
        ack(checked(resp).await?).await
    }
}

async fn checked(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status: status.as_u16(), body })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

// Acks are sometimes plain text; keep the text as the message then.
async fn ack(resp: Response) -> Result<Ack, ApiError> {
    let text = resp.text().await?;
    Ok(serde_json::from_str::<Ack>(&text).unwrap_or_else(|_| Ack {
        message: Some(text).filter(|t| !t.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&AppConfig::with_base_url(&server.uri()))
    }

    #[tokio::test]
    async fn test_photos_of_user_sends_viewer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photosOfUser/u1"))
            .and(query_param("currentLoggedUserId", "viewer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": "p1", "user_id": "u1", "file_name": "a.jpg", "likes": [], "num_likes": 0, "comments": [] }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let photos = client_for(&server).await.photos_of_user("u1", Some("viewer")).await.unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].file_name, "a.jpg");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/missing"))
            .respond_with(ResponseTemplate::new(400).set_body_string("User not found"))
            .mount(&server)
            .await;

        match client_for(&server).await.user("missing").await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "User not found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutations_hit_expected_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/likephoto/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Photo liked" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/commentsOfPhoto/p1"))
            .and(body_json(json!({ "comment": "nice!" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("Comment added"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/deletecommentbyid"))
            .and(body_json(json!({ "commentId": "c1" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/deletephotobyid"))
            .and(body_json(json!({ "photoId": "p1" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let liked = client.like_photo("p1").await.unwrap();
        assert_eq!(liked.message.as_deref(), Some("Photo liked"));
        let added = client.add_comment("p1", "nice!").await.unwrap();
        assert_eq!(added.message.as_deref(), Some("Comment added"));
        assert!(client.delete_comment("c1").await.unwrap().message.is_none());
        client.delete_photo("p1").await.unwrap();
    }
}
