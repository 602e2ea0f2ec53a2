use yew::prelude::*;

use crate::content::TEAM;

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-intro">
                <div class="about-text">
                    <p class="eyebrow">{"WHO WE ARE"}</p>
                    <h2 class="section-title">{"About "}<span class="gradient-text">{"X-Web Labs"}</span></h2>
                    <p class="section-subtitle">
                        {"We are a cutting-edge AI automation agency dedicated to transforming businesses through intelligent technology solutions."}
                    </p>
                    <ul class="check-list">
                        <li>{"Founded with a vision to democratize AI technology"}</li>
                        <li>{"50+ successful projects delivered"}</li>
                        <li>{"Trusted by enterprises worldwide"}</li>
                    </ul>
                </div>
                <div class="mission-card">
                    <h3>{"Our Mission"}</h3>
                    <p>
                        {"To empower businesses with intelligent automation solutions that enhance productivity, drive innovation, and create sustainable competitive advantages."}
                    </p>
                    <div class="mission-stats">
                        <div><div class="stat-value">{"50+"}</div><div class="stat-label">{"Projects Completed"}</div></div>
                        <div><div class="stat-value">{"100%"}</div><div class="stat-label">{"Client Satisfaction"}</div></div>
                    </div>
                </div>
            </div>

            <div class="team">
                <p class="eyebrow">{"OUR TEAM"}</p>
                <h3 class="team-title">{"Meet Our Expert Team"}</h3>
                <p class="section-subtitle">{"Passionate innovators dedicated to transforming your business with AI"}</p>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-card">
                            <img src={member.image} alt={member.name} loading="lazy" />
                            <h4>{ member.name }</h4>
                            <p class="team-role">{ member.role }</p>
                            <p class="team-bio">{ member.bio }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
