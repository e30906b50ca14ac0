use async_trait::async_trait;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::sync::Mutex;

use crate::api::PostsApi;
use crate::error::PostsClientError;
use crate::models::{Post, PostDraft, PostId};
use crate::navigation::{Navigator, Route};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List,
    Get(PostId),
    Create(PostDraft),
    Update(PostId, PostDraft),
    Delete(PostId),
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    next_id: i64,
    calls: Vec<Call>,
    failing: bool,
}

/// In-memory posts resource that records every call it receives.
#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            state: Mutex::new(State {
                posts,
                next_id: 100,
                ..State::default()
            }),
        }
    }

    pub(crate) fn starting_at(next_id: i64) -> Self {
        Self {
            state: Mutex::new(State {
                next_id,
                ..State::default()
            }),
        }
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>, PostsClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            return Err(PostsClientError::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_string(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl PostsApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError> {
        let state = self.record(Call::List)?;
        Ok(state.posts.clone())
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostsClientError> {
        let state = self.record(Call::Get(id))?;
        state
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PostsClientError::NotFound)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, PostsClientError> {
        let mut state = self.record(Call::Create(draft.clone()))?;
        let post = Post {
            id: PostId::new(state.next_id),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: None,
        };
        state.next_id += 1;
        state.posts.insert(0, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, PostsClientError> {
        let mut state = self.record(Call::Update(id, draft.clone()))?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PostsClientError::NotFound)?;
        post.title = draft.title.clone();
        post.content = draft.content.clone();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PostsClientError> {
        let mut state = self.record(Call::Delete(id))?;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(PostsClientError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub(crate) fn post(id: i64, title: &str, content: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: None,
    }
}
