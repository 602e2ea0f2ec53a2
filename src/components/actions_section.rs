use yew::prelude::*;

use crate::content::{ACTION_POINTS, ACTION_STEPS};
use crate::utils::viewport::scroll_to_section;

#[function_component(ActionsSection)]
pub fn actions_section() -> Html {
    html! {
        <section class="actions-section">
            <div class="actions-steps">
                { for ACTION_STEPS.iter().enumerate().map(|(i, (title, detail))| html! {
                    <div class="action-step">
                        <span class="action-number">{ (i + 1).to_string() }</span>
                        <div>
                            <div class="action-title">{ *title }</div>
                            <div class="action-detail">{ *detail }</div>
                        </div>
                    </div>
                }) }
            </div>
            <div class="actions-text">
                <h2 class="section-title">{"Turn data into "}<span class="gradient-text">{"action."}</span></h2>
                <p class="section-subtitle">
                    {"Transform your business with intelligent automation solutions that deliver measurable results."}
                </p>
                <ul class="check-list">
                    { for ACTION_POINTS.iter().map(|point| html! { <li>{ *point }</li> }) }
                </ul>
                <button class="hero-cta primary" onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact"))}>
                    {"Start Your Project"}
                </button>
            </div>
        </section>
    }
}
