//! Client side of the blog post manager: the post model, a REST client for
//! `/api/posts`, and the list/form view models the front-ends render.

pub mod api;
pub mod config;
pub mod error;
pub mod http_client;
pub mod models;
pub mod navigation;
pub mod views;

pub use api::PostsApi;
pub use config::ClientConfig;
pub use error::PostsClientError;
pub use http_client::HttpClient;
pub use models::{Post, PostDraft, PostId, TITLE_MAX_LEN};
pub use navigation::{Navigator, Route};
pub use views::{FormMode, PostCard, PostFormView, PostListView, Submission};
