use yew::prelude::*;

use crate::content::NAV_LINKS;
use crate::utils::hooks::use_scrolled_past;
use crate::utils::viewport::scroll_to_section;

const SCROLLED_THRESHOLD: f64 = 50.0;

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_scrolled_past(SCROLLED_THRESHOLD);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        });
        html! {
            <a href={format!("#{}", id)} class="nav-link" onclick={onclick}>{ label }</a>
        }
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <nav class="nav-container">
                <a href="#home" class="nav-logo">
                    <img src="/images/logo.png" alt="X-Web Labs" width="100" />
                </a>
                <div class="nav-links">
                    { for NAV_LINKS.into_iter().map(|(id, label)| nav_link(id, label)) }
                </div>
                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.into_iter().map(|(id, label)| nav_link(id, label)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
