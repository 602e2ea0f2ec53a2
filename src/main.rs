use yew::prelude::*;
use yew_router::prelude::*;

mod chat;
mod components;
mod config;
mod contact;
mod content;
mod pages;
mod utils;

use pages::home::Home;
use pages::loading::LoadingScreen;
use utils::viewport::{ViewportObserver, WindowViewport};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let loading = use_state(|| true);
    let viewport = use_state(|| {
        ViewportObserver::new(WindowViewport, config::get_scroll_throttle_ms())
    });

    // One set of window listeners for the whole page
    use_effect_with_deps(
        |viewport: &ViewportObserver| {
            let binding = viewport.attach();
            move || drop(binding)
        },
        (*viewport).clone(),
    );

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_| {
            log::info!("loading screen done");
            loading.set(false);
        })
    };

    html! {
        <ContextProvider<ViewportObserver> context={(*viewport).clone()}>
            {
                if *loading {
                    html! { <LoadingScreen on_complete={on_loaded} /> }
                } else {
                    html! {
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    }
                }
            }
        </ContextProvider<ViewportObserver>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    gloo_console::log!("X-Web Labs site starting");
    yew::Renderer::<App>::new().render();
}
