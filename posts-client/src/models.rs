use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

use crate::error::PostsClientError;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Server-assigned post identifier. Never altered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

// ==================== Модели постов ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

/// Метка времени необязательна: непонятное значение даёт `None`,
/// а не ошибку разбора всего списка
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

/// Accepts RFC 3339 (offset or `Z`, normalized to UTC) and naive
/// timestamps with either `T` or a space between date and time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Request body for both create and update (update is a full replace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    #[error("Title must be at most {max} characters, got {len}", max = TITLE_MAX_LEN)]
    TitleTooLong { len: usize },
}

impl From<DraftError> for PostsClientError {
    fn from(err: DraftError) -> Self {
        PostsClientError::InvalidRequest(err.to_string())
    }
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields non-empty, as `required` inputs demand.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.is_empty() {
            return Err(DraftError::MissingContent);
        }

        let len = self.title.chars().count();
        if len > TITLE_MAX_LEN {
            return Err(DraftError::TitleTooLong { len });
        }

        Ok(())
    }
}

// ==================== Ответы сервера ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ==================== Вспомогательные функции ====================

/// Cuts `value` down to at most `TITLE_MAX_LEN` characters, the way a
/// `maxlength` input does.
pub fn clamp_title(value: &str) -> String {
    value.chars().take(TITLE_MAX_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_backend_payload() {
        let json = r#"{"id":7,"title":"Hello","content":"World","created_at":"2024-03-01T12:30:00"}"#;
        let post: Post = serde_json::from_str(json).expect("valid post");

        assert_eq!(post.id, PostId::new(7));
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.created_at.is_some());
    }

    #[test]
    fn post_without_timestamp_is_accepted() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"title":"t","content":"c"}"#).expect("valid post");
        assert_eq!(post.created_at, None);
    }

    #[test]
    fn post_missing_title_is_rejected() {
        let result = serde_json::from_str::<Post>(r#"{"id":1,"content":"c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_serializes_only_title_and_content() {
        let value = serde_json::to_value(PostDraft::new("Hello", "World")).expect("json");
        assert_eq!(value, serde_json::json!({"title": "Hello", "content": "World"}));
    }

    #[test]
    fn title_of_exactly_max_len_is_valid() {
        let draft = PostDraft::new("a".repeat(TITLE_MAX_LEN), "body");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn title_over_max_len_is_rejected() {
        let draft = PostDraft::new("ж".repeat(TITLE_MAX_LEN + 1), "body");
        assert_eq!(
            draft.validate(),
            Err(DraftError::TitleTooLong {
                len: TITLE_MAX_LEN + 1
            })
        );
    }

    #[test]
    fn empty_fields_are_missing() {
        assert_eq!(
            PostDraft::new("", "body").validate(),
            Err(DraftError::MissingTitle)
        );
        assert_eq!(
            PostDraft::new("title", "").validate(),
            Err(DraftError::MissingContent)
        );
        assert!(!PostDraft::default().is_complete());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let draft = PostDraft::new("   ", "\n");
        assert!(draft.is_complete());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn collection_survives_any_timestamp_shape() {
        for stamp in [
            r#""2024-03-01T12:30:00.123456""#,
            r#""2024-03-01T12:30:00+00:00""#,
            r#""2024-03-01T12:30:00Z""#,
            r#""2024-03-01 12:30:00""#,
            r#""yesterday""#,
            "null",
            "1709296200",
        ] {
            let json = format!(
                r#"[{{"id":7,"title":"Hello","content":"World","created_at":{stamp}}}]"#
            );
            let posts: Vec<Post> = serde_json::from_str(&json)
                .unwrap_or_else(|e| panic!("created_at {stamp} broke decoding: {e}"));
            assert_eq!(posts.len(), 1);
        }
    }

    #[test]
    fn offset_timestamps_are_normalized_to_utc() {
        let expected = parse_timestamp("2024-03-01T12:30:00");
        assert!(expected.is_some());
        assert_eq!(parse_timestamp("2024-03-01T15:30:00+03:00"), expected);
        assert_eq!(parse_timestamp("2024-03-01T12:30:00Z"), expected);
        assert_eq!(parse_timestamp("2024-03-01 12:30:00"), expected);
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn clamp_title_counts_characters_not_bytes() {
        let long = "é".repeat(150);
        let clamped = clamp_title(&long);
        assert_eq!(clamped.chars().count(), TITLE_MAX_LEN);
        assert_eq!(clamp_title("short"), "short");
    }

    #[test]
    fn post_id_parses_from_route_segment() {
        assert_eq!("42".parse::<PostId>(), Ok(PostId::new(42)));
        assert!("abc".parse::<PostId>().is_err());
        assert_eq!(PostId::new(42).to_string(), "42");
    }
}
