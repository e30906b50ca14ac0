mod post_form;
mod post_list;

pub use post_form::PostForm;
pub use post_list::PostList;
