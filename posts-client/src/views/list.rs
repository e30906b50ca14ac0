use crate::api::PostsApi;
use crate::error::PostsClientError;
use crate::models::{Post, PostId};
use crate::navigation::{Navigator, Route};

/// One rendered post with its Edit target.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub edit_route: Route,
}

/// All posts, in the order the API returned them.
pub struct PostListView<A> {
    api: A,
    posts: Vec<Post>,
}

impl<A: PostsApi> PostListView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            posts: Vec::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Fetches the collection. On failure the current list is kept.
    pub async fn load(&mut self) -> Result<(), PostsClientError> {
        match self.api.list_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "posts loaded");
                self.posts = posts;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching posts");
                Err(e)
            }
        }
    }

    pub fn cards(&self) -> Vec<PostCard> {
        self.posts
            .iter()
            .map(|post| PostCard {
                id: post.id,
                title: post.title.clone(),
                content: post.content.clone(),
                edit_route: Route::Edit(post.id),
            })
            .collect()
    }

    /// "Create New Post" action.
    pub fn open_create(&self, navigator: &impl Navigator) {
        navigator.navigate(Route::Create);
    }

    pub fn open_edit(&self, id: PostId, navigator: &impl Navigator) {
        navigator.navigate(Route::Edit(id));
    }

    /// Deletes on the server, then drops the entry locally without re-fetching.
    pub async fn delete(&mut self, id: PostId) -> Result<(), PostsClientError> {
        match self.api.delete_post(id).await {
            Ok(()) => {
                self.posts.retain(|post| post.id != id);
                tracing::info!(%id, "post deleted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "Error deleting post");
                Err(e)
            }
        }
    }
}
