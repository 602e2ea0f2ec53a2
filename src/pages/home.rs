use yew::prelude::*;

use crate::chat::widget::ChatLauncher;
use crate::components::about::AboutUs;
use crate::components::actions_section::ActionsSection;
use crate::components::client_logos::ClientLogos;
use crate::components::data_section::DataSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::services::Services;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Header />
            <Hero />
            <Services />
            <AboutUs />
            <ClientLogos />
            <DataSection />
            <Projects />
            <ActionsSection />
            <Footer />
            <ChatLauncher />
        </div>
    }
}
