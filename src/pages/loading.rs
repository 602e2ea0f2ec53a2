use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

/// Intro splash shown for a fixed time before the page mounts.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let duration_ms = config::get_loading_ms();
    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration_ms, move || on_complete.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let bar_style = format!("animation-duration: {}ms;", duration_ms);

    html! {
        <div class="loading-screen">
            <div class="loading-shapes">
                { for (0..8).map(|i| html! {
                    <div class={format!("loading-shape shape-{}", i)}></div>
                }) }
            </div>
            <div class="loading-brand">
                <img src="/images/logo.png" alt="X-Web Labs" width="120" />
                <p class="loading-tagline">{"Building the future with AI automation"}</p>
            </div>
            <div class="loading-progress">
                <div class="loading-progress-bar" style={bar_style}></div>
            </div>
        </div>
    }
}
