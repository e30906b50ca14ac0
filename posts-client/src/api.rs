use async_trait::async_trait;

use crate::error::PostsClientError;
use crate::models::{Post, PostDraft, PostId};

/// The five calls the views make against the posts resource.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /api/posts`
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError>;

    /// `GET /api/posts/{id}`
    async fn get_post(&self, id: PostId) -> Result<Post, PostsClientError>;

    /// `POST /api/posts`
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, PostsClientError>;

    /// `PUT /api/posts/{id}`, full replace of title and content.
    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, PostsClientError>;

    /// `DELETE /api/posts/{id}`
    async fn delete_post(&self, id: PostId) -> Result<(), PostsClientError>;
}

#[async_trait]
impl<T> PostsApi for std::sync::Arc<T>
where
    T: PostsApi + ?Sized,
{
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError> {
        (**self).list_posts().await
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostsClientError> {
        (**self).get_post(id).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, PostsClientError> {
        (**self).create_post(draft).await
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, PostsClientError> {
        (**self).update_post(id, draft).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PostsClientError> {
        (**self).delete_post(id).await
    }
}
