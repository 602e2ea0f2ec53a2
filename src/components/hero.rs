use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::content::HERO_STATS;
use crate::utils::throttle::{Gate, Sampled};
use crate::utils::viewport::{scroll_to_section, ViewportSource, WindowViewport};

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1.0)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    // pointer position as a percentage of the viewport
    let glow = use_state_eq(|| (50.0_f64, 50.0_f64));
    let pointer = use_mut_ref(|| Sampled::new(config::get_pointer_throttle_ms()));
    // dropped with the component, which cancels a pending trailing update
    let trailing = use_mut_ref(|| None::<Timeout>);

    let onmousemove = {
        let glow = glow.clone();
        Callback::from(move |e: MouseEvent| {
            let viewport = WindowViewport;
            let width = viewport_width().max(1.0);
            let height = viewport.viewport_height().max(1.0);
            let position = (
                f64::from(e.client_x()) / width * 100.0,
                f64::from(e.client_y()) / height * 100.0,
            );

            let gate = pointer.borrow_mut().push(viewport.now_ms(), position);
            match gate {
                Gate::Run => glow.set(position),
                Gate::Defer(wait) => {
                    let pointer = pointer.clone();
                    let glow = glow.clone();
                    let timeout = Timeout::new(wait, move || {
                        let latest = pointer.borrow_mut().flush(WindowViewport.now_ms());
                        if let Some(latest) = latest {
                            glow.set(latest);
                        }
                    });
                    *trailing.borrow_mut() = Some(timeout);
                }
                Gate::Pending => {}
            }
        })
    };

    let (x, y) = *glow;
    let glow_style = format!(
        "background: radial-gradient(600px circle at {:.1}% {:.1}%, rgba(147, 51, 234, 0.25), transparent 60%);",
        x, y
    );

    html! {
        <section id="home" class="hero" onmousemove={onmousemove}>
            <div class="hero-background"></div>
            <div class="hero-overlay"></div>
            <div class="hero-glow" style={glow_style}></div>
            <div class="hero-content">
                <p class="eyebrow">{"NEXT-GENERATION AI SOLUTIONS"}</p>
                <h1 class="hero-title">
                    {"Build the Future with"}<br/>
                    <span class="gradient-text">{"AI Automation"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"We create intelligent AI agents, cutting-edge websites, and automation systems that transform how businesses operate in the digital age."}
                </p>
                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
                <div class="hero-cta-group">
                    <button class="hero-cta primary" onclick={Callback::from(|_: MouseEvent| scroll_to_section("services"))}>
                        {"Explore Our Services"}
                    </button>
                    <button class="hero-cta secondary" onclick={Callback::from(|_: MouseEvent| scroll_to_section("projects"))}>
                        {"View Projects"}
                    </button>
                </div>
                <p class="hero-footnote">{"Trusted by leading enterprises worldwide"}</p>
            </div>
        </section>
    }
}
