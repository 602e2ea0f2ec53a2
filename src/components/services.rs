use yew::prelude::*;

use crate::content::{ServiceDescriptor, SERVICES};
use crate::utils::hooks::use_active_index;

const SECTION_ID: &str = "services";

#[derive(Properties, PartialEq)]
struct ServiceItemProps {
    service: ServiceDescriptor,
    active: bool,
}

#[function_component(ServiceItem)]
fn service_item(props: &ServiceItemProps) -> Html {
    let service = &props.service;
    html! {
        <div class={classes!("service-item", props.active.then_some("active"))}>
            <div class="service-count">
                <span class="service-dot">{"●"}</span>
                <span>{ service.count }</span>
            </div>
            // small screens have no sticky panel, so each item carries its image
            <div class="service-image-mobile">
                <img src={service.image} alt={service.title} loading="lazy" />
            </div>
            <h3 class="service-title">
                <span class="service-icon">{ service.icon }</span>
                { service.title }
            </h3>
            <p class="service-description">{ service.description }</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li>{ *feature }</li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let active = use_active_index(SECTION_ID, SERVICES.len());
    let current = SERVICES.get(active).unwrap_or(&SERVICES[0]);

    html! {
        <section id={SECTION_ID} class="services-section">
            <div class="section-header">
                <p class="eyebrow">{"REVOLUTIONARY SOLUTIONS"}</p>
                <h2 class="section-title">
                    {"Services That "}<span class="gradient-text">{"Transform Businesses"}</span>
                </h2>
                <p class="section-subtitle">
                    {"Stop competing on price. Start winning on innovation. Our AI-powered solutions don't just automate, they change how you operate, engage, and grow."}
                </p>
            </div>

            <div class="services-layout">
                <div class="services-list">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceItem service={*service} active={service.index == active} />
                    }) }
                </div>

                <div class="services-panel">
                    <div class="services-panel-sticky">
                        <img key={current.index} src={current.image} alt={current.title} class="services-panel-image" />
                        <div class="services-panel-overlay">
                            <span class="service-icon">{ current.icon }</span>
                            <h4>{ current.title }</h4>
                            <div class="services-panel-stats">
                                { for current.stats.iter().map(|stat| html! {
                                    <div class="panel-stat">
                                        <div class="stat-value">{ stat.value }</div>
                                        <div class="stat-label">{ stat.label }</div>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <div class="services-progress">
                            { for SERVICES.iter().map(|service| html! {
                                <span class={classes!("progress-dot", (service.index == active).then_some("active"))}></span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
