use crate::api::PostsApi;
use crate::error::PostsClientError;
use crate::models::{clamp_title, Post, PostDraft, PostId};
use crate::navigation::{Navigator, Route};

/// Which record the form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PostId),
}

impl FormMode {
    /// `None` for routes that don't show the form.
    pub fn from_route(route: Route) -> Option<Self> {
        match route {
            Route::Create => Some(FormMode::Create),
            Route::Edit(id) => Some(FormMode::Edit(id)),
            Route::List => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Post",
            FormMode::Edit(_) => "Edit Post",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A required field is empty; nothing was sent.
    Incomplete,
    Saved(Post),
}

/// Create/edit form for a single post.
pub struct PostFormView<A> {
    api: A,
    mode: FormMode,
    title: String,
    content: String,
}

impl<A: PostsApi> PostFormView<A> {
    pub fn new(api: A, mode: FormMode) -> Self {
        Self {
            api,
            mode,
            title: String::new(),
            content: String::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = clamp_title(value);
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.content = value.into();
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft::new(self.title.clone(), self.content.clone())
    }

    /// Pre-fills the fields in edit mode; a no-op in create mode.
    /// On failure the fields stay as they were.
    pub async fn load(&mut self) -> Result<(), PostsClientError> {
        let FormMode::Edit(id) = self.mode else {
            return Ok(());
        };

        match self.api.get_post(id).await {
            Ok(post) => {
                self.title = post.title;
                self.content = post.content;
                Ok(())
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "Error fetching post");
                Err(e)
            }
        }
    }

    /// Sends create or update depending on the mode and returns to the list
    /// on success. Fields are left intact on failure.
    pub async fn submit(
        &mut self,
        navigator: &impl Navigator,
    ) -> Result<Submission, PostsClientError> {
        let draft = self.draft();
        if !draft.is_complete() {
            tracing::debug!("submit ignored, required field is empty");
            return Ok(Submission::Incomplete);
        }

        let result = match self.mode {
            FormMode::Edit(id) => self.api.update_post(id, &draft).await,
            FormMode::Create => self.api.create_post(&draft).await,
        };

        match result {
            Ok(post) => {
                tracing::info!(id = %post.id, "post saved");
                navigator.navigate(Route::List);
                Ok(Submission::Saved(post))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error saving post");
                Err(e)
            }
        }
    }
}
