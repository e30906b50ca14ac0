use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Тело запроса для создания и обновления (полная замена)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}

impl PostPayload {
    /// Both fields non-empty, as `required` demands.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Post",
            FormMode::Edit(_) => "Edit Post",
        }
    }
}

pub fn clamp_title(value: &str) -> String {
    value.chars().take(TITLE_MAX_LEN).collect()
}
