use crate::api::{ApiClient, ApiError};
use crate::app::Route;
use crate::models::Post;
use crate::state::ListState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

pub enum Msg {
    PostsLoaded(Vec<Post>),
    DeletePost(i64),
    PostDeleted(i64),
    Failed {
        context: &'static str,
        error: ApiError,
    },
}

/// Все посты в порядке, в котором их вернул сервер
pub struct PostList {
    state: ListState,
    api: ApiClient,
}

impl Component for PostList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = ApiClient::new();

        // Загружаем список при монтировании
        let loader = api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match loader.list_posts().await {
                Ok(posts) => link.send_message(Msg::PostsLoaded(posts)),
                Err(error) => link.send_message(Msg::Failed {
                    context: "Error fetching posts",
                    error,
                }),
            }
        });

        Self {
            state: ListState::default(),
            api,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PostsLoaded(posts) => {
                log::debug!("Loaded {} posts", posts.len());
                self.state.loaded(posts);
                true
            }

            Msg::DeletePost(id) => {
                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.delete_post(id).await {
                        Ok(()) => link.send_message(Msg::PostDeleted(id)),
                        Err(error) => link.send_message(Msg::Failed {
                            context: "Error deleting post",
                            error,
                        }),
                    }
                });

                false
            }

            // Удаляем локально, без повторной загрузки
            Msg::PostDeleted(id) => self.state.deleted(id),

            Msg::Failed { context, error } => {
                log::error!("{}: {}", context, error);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="post-list">
                <h1>{ "Blog Posts" }</h1>
                <Link<Route> to={Route::Create} classes={classes!("button", "primary")}>
                    { "Create New Post" }
                </Link<Route>>

                { for self.state.posts.iter().map(|post| self.view_post(post, ctx)) }
            </div>
        }
    }
}

impl PostList {
    fn view_post(&self, post: &Post, ctx: &Context<Self>) -> Html {
        let post_id = post.id;
        let delete_callback = ctx.link().callback(move |_| Msg::DeletePost(post_id));

        html! {
            <div class="card" key={post_id}>
                <div class="card-content">
                    <h3>{ &post.title }</h3>
                    <p class="secondary">{ &post.content }</p>
                </div>
                <div class="card-actions">
                    <Link<Route> to={Route::Edit { id: post_id }} classes={classes!("button", "primary")}>
                        { "Edit" }
                    </Link<Route>>
                    <button class="button danger" onclick={delete_callback}>
                        { "Delete" }
                    </button>
                </div>
            </div>
        }
    }
}
