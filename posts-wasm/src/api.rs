use crate::models::*;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

const API_BASE: &str = "http://localhost:5000";

/// The only failure kind the views know about: the call did not succeed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct ApiError(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let request_builder = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(ApiError(format!("Unsupported method: {}", method))),
        };

        let request_builder = request_builder.header("Content-Type", "application/json");

        let response = match body {
            Some(body) => {
                let body_json = serde_json::to_string(body)
                    .map_err(|e| ApiError(format!("Failed to serialize request: {}", e)))?;

                request_builder
                    .body(body_json)
                    .map_err(|e| ApiError(format!("Failed to set request body: {}", e)))?
                    .send()
                    .await
                    .map_err(|e| ApiError(format!("Network error: {}", e)))?
            }
            None => request_builder
                .send()
                .await
                .map_err(|e| ApiError(format!("Network error: {}", e)))?,
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError(format!("Failed to read response: {}", e)))?;

        if (200..300).contains(&status) {
            Ok(text)
        } else {
            // Пытаемся распарсить сообщение об ошибке
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => Err(ApiError(err.error)),
                Err(_) => Err(ApiError(format!("HTTP {}: {}", status, text))),
            }
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError(format!("Failed to parse response: {}", e)))
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request("GET", "/api/posts", None::<&()>).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.request("GET", &format!("/api/posts/{}", id), None::<&()>)
            .await
    }

    pub async fn create_post(&self, req: &PostPayload) -> Result<Post, ApiError> {
        self.request("POST", "/api/posts", Some(req)).await
    }

    pub async fn update_post(&self, id: i64, req: &PostPayload) -> Result<Post, ApiError> {
        self.request("PUT", &format!("/api/posts/{}", id), Some(req))
            .await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        // Тело ответа не используется
        self.send("DELETE", &format!("/api/posts/{}", id), None::<&()>)
            .await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
