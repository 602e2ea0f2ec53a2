use yew::prelude::*;

use crate::content::PROJECTS;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="projects-section">
            <div class="section-header">
                <p class="eyebrow">{"OUR WORK"}</p>
                <h2 class="section-title">{"Projects "}<span class="gradient-text">{"Delivered"}</span></h2>
                <p class="section-subtitle">{"A selection of systems we have shipped for clients across industries."}</p>
            </div>
            <div class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article class="project-card">
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <div class="project-body">
                            <span class="project-category">{ project.category }</span>
                            <h3>{ project.title }</h3>
                            <p>{ project.description }</p>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}
