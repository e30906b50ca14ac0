use crate::api::PostsApi;
use crate::config::ClientConfig;
use crate::error::PostsClientError;
use crate::models::{DeleteResponse, ErrorResponse, Post, PostDraft, PostId};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn handle_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, PostsClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        Err(Self::error_from(response).await)
    }

    async fn error_from(response: Response) -> PostsClientError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return PostsClientError::NotFound;
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return PostsClientError::Http(e),
        };
        // Сервер отвечает {"error": "..."}; если нет - берём тело как есть
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status {
            StatusCode::BAD_REQUEST => PostsClientError::InvalidRequest(message),
            _ => PostsClientError::Api { status, message },
        }
    }
}

#[async_trait]
impl PostsApi for HttpClient {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError> {
        let url = self.url("/api/posts");
        tracing::debug!(%url, "GET collection");

        let response = self.client.get(&url).send().await?;
        self.handle_json(response).await
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostsClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!(%url, "GET post");

        let response = self.client.get(&url).send().await?;
        self.handle_json(response).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, PostsClientError> {
        draft.validate()?;

        let url = self.url("/api/posts");
        tracing::debug!(%url, title = %draft.title, "POST post");

        let response = self.client.post(&url).json(draft).send().await?;
        self.handle_json(response).await
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, PostsClientError> {
        draft.validate()?;

        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!(%url, title = %draft.title, "PUT post");

        let response = self.client.put(&url).json(draft).send().await?;
        self.handle_json(response).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PostsClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!(%url, "DELETE post");

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        // Тело ответа не используется, но пустое или не-JSON тело не ошибка
        let text = response.text().await?;
        if let Ok(body) = serde_json::from_str::<DeleteResponse>(&text) {
            if let Some(message) = body.message {
                tracing::debug!(%id, %message, "post deleted");
            }
        }
        Ok(())
    }
}
