//! Framework-independent view models for the two screens.
//!
//! Each view owns its local copy of the data and mutates it only from its own
//! handlers. Failed calls are logged and otherwise leave state as it was.

mod form;
mod list;

#[cfg(test)]
pub(crate) mod fake;

pub use form::{FormMode, PostFormView, Submission};
pub use list::{PostCard, PostListView};
