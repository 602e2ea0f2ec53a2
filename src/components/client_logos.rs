use yew::prelude::*;

use crate::content::CLIENT_LOGOS;

#[function_component(ClientLogos)]
pub fn client_logos() -> Html {
    // rendered twice so the marquee loops without a gap
    let logos = CLIENT_LOGOS.iter().chain(CLIENT_LOGOS.iter());
    html! {
        <section class="logos-section">
            <p class="eyebrow">{"TECHNOLOGIES WE MASTER"}</p>
            <div class="logo-marquee">
                <div class="logo-track">
                    { for logos.map(|logo| html! { <span class="logo-item">{ *logo }</span> }) }
                </div>
            </div>
        </section>
    }
}
