//! Состояние компонентов без привязки к Yew, чтобы его можно было
//! проверять обычными тестами.

use crate::models::*;

/// Posts in the order the server returned them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListState {
    pub posts: Vec<Post>,
}

impl ListState {
    pub fn loaded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Drops the deleted post locally; returns whether anything changed.
    pub fn deleted(&mut self, id: i64) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        self.posts.len() != before
    }
}

/// Fields of the create/edit form plus the in-flight submit guard.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub title: String,
    pub content: String,
    pub saving: bool,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            title: String::new(),
            content: String::new(),
            saving: false,
        }
    }

    /// Route changed: start over with blank fields.
    pub fn reset(&mut self, mode: FormMode) {
        *self = Self::new(mode);
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = clamp_title(value);
    }

    pub fn set_content(&mut self, value: String) {
        self.content = value;
    }

    /// Fills the fields if the reply belongs to the current mode.
    pub fn accept_loaded(&mut self, mode: FormMode, post: Post) -> bool {
        if mode != self.mode {
            return false;
        }
        self.title = post.title;
        self.content = post.content;
        true
    }

    /// Payload to send, or `None` while saving or with an empty field.
    pub fn begin_submit(&mut self) -> Option<PostPayload> {
        if self.saving {
            return None;
        }

        let payload = PostPayload {
            title: self.title.clone(),
            content: self.content.clone(),
        };
        if !payload.is_complete() {
            return None;
        }

        self.saving = true;
        Some(payload)
    }

    /// Whether a save reply for `mode` should navigate away.
    pub fn accept_saved(&mut self, mode: FormMode) -> bool {
        if mode != self.mode {
            return false;
        }
        self.saving = false;
        true
    }

    /// Failed call for `mode`; fields stay as they are.
    pub fn failed(&mut self, mode: FormMode) {
        if mode == self.mode {
            self.saving = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str, content: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn delete_removes_only_that_post() {
        let mut state = ListState::default();
        state.loaded(vec![post(1, "one", "1"), post(2, "two", "2"), post(3, "three", "3")]);

        assert!(state.deleted(2));

        let ids: Vec<_> = state.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn failed_delete_leaves_list_alone() {
        let mut state = ListState::default();
        state.loaded(vec![post(1, "one", "1")]);
        let before = state.clone();

        // при ошибке компонент не вызывает deleted, а неизвестный id ничего не меняет
        assert!(!state.deleted(42));
        assert_eq!(state, before);
    }

    #[test]
    fn submit_sends_current_fields_once() {
        let mut form = FormState::new(FormMode::Edit(7));
        assert!(form.accept_loaded(FormMode::Edit(7), post(7, "Hello", "World")));
        form.set_content("Updated".to_string());

        let payload = form.begin_submit().expect("payload");
        assert_eq!(payload.title, "Hello");
        assert_eq!(payload.content, "Updated");

        // второй клик, пока запрос в полёте
        assert_eq!(form.begin_submit(), None);

        assert!(form.accept_saved(FormMode::Edit(7)));
        assert!(!form.saving);
    }

    #[test]
    fn empty_field_blocks_submit() {
        let mut form = FormState::new(FormMode::Create);
        form.set_title("Hello");

        assert_eq!(form.begin_submit(), None);
        assert!(!form.saving);
    }

    #[test]
    fn failed_save_keeps_fields_and_allows_retry() {
        let mut form = FormState::new(FormMode::Create);
        form.set_title("Hello");
        form.set_content("World".to_string());
        form.begin_submit().expect("payload");

        form.failed(FormMode::Create);

        assert_eq!(form.title, "Hello");
        assert_eq!(form.content, "World");
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn replies_for_previous_route_are_ignored() {
        let mut form = FormState::new(FormMode::Edit(1));
        form.begin_submit();
        form.reset(FormMode::Edit(2));

        assert!(!form.accept_loaded(FormMode::Edit(1), post(1, "Old", "old")));
        assert_eq!(form.title, "");
        assert!(!form.accept_saved(FormMode::Edit(1)));

        assert!(form.accept_loaded(FormMode::Edit(2), post(2, "New", "new")));
        assert_eq!(form.title, "New");
    }

    #[test]
    fn title_is_capped() {
        let mut form = FormState::new(FormMode::Create);
        form.set_title(&"x".repeat(TITLE_MAX_LEN + 5));
        assert_eq!(form.title.chars().count(), TITLE_MAX_LEN);
    }
}
