use yew::prelude::*;

use crate::content::DATA_POINTS;

#[function_component(DataSection)]
pub fn data_section() -> Html {
    html! {
        <section class="data-section">
            <div class="data-text">
                <p class="eyebrow">{"DATA INTELLIGENCE"}</p>
                <h2 class="section-title">{"Do more with "}<span class="gradient-text">{"your data"}</span></h2>
                <p class="section-subtitle">
                    {"Transform raw data into actionable insights with our AI-powered analytics platform."}
                </p>
                <ul class="check-list">
                    { for DATA_POINTS.iter().map(|point| html! { <li>{ *point }</li> }) }
                </ul>
            </div>
            <div class="data-visual">
                <img src="/images/data-intelligence.jpg" alt="AI Business Intelligence" loading="lazy" />
                <div class="data-caption">
                    <span class="pulse-dot"></span>
                    <span>{"AI analyzing customer behavior patterns"}</span>
                </div>
            </div>
        </section>
    }
}
