use crate::api::{ApiClient, ApiError};
use crate::models::*;
use crate::state::FormState;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PostFormProps {
    pub mode: FormMode,
    /// Called after a successful save; the page navigates back to the list.
    pub on_saved: Callback<()>,
}

// Ответы сервера помечены режимом, в котором ушёл запрос:
// ответы для прошлого маршрута отбрасываются
pub enum Msg {
    UpdateTitle(String),
    UpdateContent(String),
    PostLoaded(FormMode, Post),
    Submit,
    PostSaved(FormMode, Post),
    Failed {
        mode: FormMode,
        context: &'static str,
        error: ApiError,
    },
}

pub struct PostForm {
    state: FormState,
    api: ApiClient,
}

impl Component for PostForm {
    type Message = Msg;
    type Properties = PostFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let form = Self {
            state: FormState::new(ctx.props().mode),
            api: ApiClient::new(),
        };
        form.load(ctx);
        form
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().mode != old_props.mode {
            self.state.reset(ctx.props().mode);
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(val) => {
                self.state.set_title(&val);
                true
            }
            Msg::UpdateContent(val) => {
                self.state.set_content(val);
                true
            }

            Msg::PostLoaded(mode, post) => self.state.accept_loaded(mode, post),

            Msg::Submit => {
                let Some(payload) = self.state.begin_submit() else {
                    return false;
                };

                let mode = self.state.mode;
                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    let result = match mode {
                        FormMode::Edit(id) => api.update_post(id, &payload).await,
                        FormMode::Create => api.create_post(&payload).await,
                    };

                    match result {
                        Ok(post) => link.send_message(Msg::PostSaved(mode, post)),
                        Err(error) => link.send_message(Msg::Failed {
                            mode,
                            context: "Error saving post",
                            error,
                        }),
                    }
                });

                false
            }

            Msg::PostSaved(mode, post) => {
                if self.state.accept_saved(mode) {
                    log::info!("Saved post {}", post.id);
                    ctx.props().on_saved.emit(());
                }
                false
            }

            // Поля остаются как есть, пользователь остаётся на форме
            Msg::Failed {
                mode,
                context,
                error,
            } => {
                log::error!("{}: {}", context, error);
                self.state.failed(mode);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let title_handle = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateTitle(input.value())
        });

        let content_handle = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateContent(input.value())
        });

        html! {
            <div class="post-form">
                <h2>{ self.state.mode.heading() }</h2>
                <form {onsubmit}>
                    <label>
                        { "Title" }
                        <input
                            type="text"
                            required=true
                            maxlength={TITLE_MAX_LEN.to_string()}
                            value={self.state.title.clone()}
                            oninput={title_handle}
                        />
                    </label>
                    <label>
                        { "Content" }
                        <textarea
                            required=true
                            rows="4"
                            value={self.state.content.clone()}
                            oninput={content_handle}
                        />
                    </label>
                    <button type="submit" class="button primary">
                        { "Save" }
                    </button>
                </form>
            </div>
        }
    }
}

impl PostForm {
    /// В режиме редактирования подтягиваем пост; при ошибке форма остаётся пустой
    fn load(&self, ctx: &Context<Self>) {
        let mode = ctx.props().mode;
        let FormMode::Edit(id) = mode else {
            return;
        };

        let api = self.api.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            match api.get_post(id).await {
                Ok(post) => link.send_message(Msg::PostLoaded(mode, post)),
                Err(error) => link.send_message(Msg::Failed {
                    mode,
                    context: "Error fetching post",
                    error,
                }),
            }
        });
    }
}
