use crate::components::{PostForm, PostList};
use crate::models::FormMode;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    List,
    #[at("/create")]
    Create,
    #[at("/edit/:id")]
    Edit { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Route::Create => Some(FormMode::Create),
            Route::Edit { id } => Some(FormMode::Edit(*id)),
            Route::List | Route::NotFound => None,
        }
    }
}

#[derive(Properties, PartialEq)]
struct FormPageProps {
    mode: FormMode,
}

/// Передаёт форме явный колбэк навигации вместо глобального роутера
#[function_component(FormPage)]
fn form_page(props: &FormPageProps) -> Html {
    let navigator = use_navigator();
    let on_saved = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::List);
        }
    });

    html! {
        <PostForm mode={props.mode} {on_saved} />
    }
}

fn switch(route: Route) -> Html {
    match route.form_mode() {
        Some(mode) => html! { <FormPage {mode} /> },
        None => match route {
            Route::NotFound => html! { <Redirect<Route> to={Route::List} /> },
            _ => html! { <PostList /> },
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="container">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
