use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostsClientError {
    // HTTP ошибки: соединение, таймаут, разбор JSON
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Post not found")]
    NotFound,

    // 400 от сервера или локальная проверка черновика
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl PostsClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostsClientError::NotFound)
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, PostsClientError::InvalidRequest(_))
    }
}
