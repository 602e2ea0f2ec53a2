use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::controller::{FormAction, FormState};
use crate::contact::lead::{Industry, LeadField, ProjectType};

/// `name` and `value` of whichever form control fired the event.
fn control_name_value(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some((input.name(), input.value()))
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        Some((select.name(), select.value()))
    } else {
        target
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| (area.name(), area.value()))
    }
}

fn update_from(dispatcher: &UseReducerDispatcher<FormState>, target: Option<EventTarget>) {
    let Some((name, value)) = control_name_value(target) else {
        return;
    };
    match name.parse::<LeadField>() {
        Ok(field) => dispatcher.dispatch(FormAction::Update(field, value)),
        Err(err) => log::warn!("contact form: {}", err),
    }
}

fn error_line(state: &FormState, field: LeadField) -> Html {
    match state.error_for(field) {
        Some(err) => html! { <p class="field-error">{ err.to_string() }</p> },
        None => html! {},
    }
}

fn field_class(state: &FormState, field: LeadField) -> Classes {
    classes!("form-control", state.error_for(field).map(|_| "has-error"))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormState::default);

    // Simulated submission: one timer per accepted attempt. Dropping the
    // timer on cleanup cancels it if the form unmounts mid-flight.
    {
        let deps = (form.attempt, form.submitting);
        let lead = form.lead.clone();
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |&(attempt, submitting)| {
                let timeout = if submitting {
                    match serde_json::to_string(&lead) {
                        Ok(payload) => log::info!("lead #{} captured: {}", attempt, payload),
                        Err(err) => log::warn!("lead #{} not serializable: {}", attempt, err),
                    }
                    Some(Timeout::new(config::get_submit_delay_ms(), move || {
                        dispatcher.dispatch(FormAction::Completed)
                    }))
                } else {
                    None
                };
                move || drop(timeout)
            },
            deps,
        );
    }

    // Success message lifetime.
    {
        let deps = (form.status.is_some(), form.attempt);
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |&(showing, _)| {
                let timeout = showing.then(|| {
                    Timeout::new(config::get_status_clear_ms(), move || {
                        dispatcher.dispatch(FormAction::ClearStatus)
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| update_from(&dispatcher, e.target()))
    };
    let onchange = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| update_from(&dispatcher, e.target()))
    };
    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let lead = &form.lead;

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-group">
                <label for="email">{"Email Address *"}</label>
                <input
                    id="email"
                    type="email"
                    name={LeadField::Email.name()}
                    class={field_class(&form, LeadField::Email)}
                    value={lead.email.clone()}
                    oninput={oninput.clone()}
                    placeholder="your.email@example.com"
                />
                { error_line(&form, LeadField::Email) }
            </div>

            <div class="form-group">
                <label for="company-name">{"Business/Company Name *"}</label>
                <input
                    id="company-name"
                    type="text"
                    name={LeadField::CompanyName.name()}
                    class={field_class(&form, LeadField::CompanyName)}
                    value={lead.company_name.clone()}
                    oninput={oninput.clone()}
                    placeholder="Your business or company name"
                />
                { error_line(&form, LeadField::CompanyName) }
            </div>

            <div class="form-group">
                <label for="industry-type">{"Industry Type *"}</label>
                <select
                    id="industry-type"
                    name={LeadField::IndustryType.name()}
                    class={field_class(&form, LeadField::IndustryType)}
                    onchange={onchange.clone()}
                >
                    <option value="" selected={lead.industry_type.is_none()}>{"Select your industry..."}</option>
                    { for Industry::ALL.into_iter().map(|industry| html! {
                        <option value={industry.label()} selected={lead.industry_type == Some(industry)}>
                            { industry.label() }
                        </option>
                    }) }
                </select>
                { error_line(&form, LeadField::IndustryType) }
            </div>

            <div class="form-group">
                <label for="project-type">{"Project Type *"}</label>
                <select
                    id="project-type"
                    name={LeadField::ProjectType.name()}
                    class={field_class(&form, LeadField::ProjectType)}
                    onchange={onchange}
                >
                    <option value="" selected={lead.project_type.is_none()}>{"Select a service..."}</option>
                    { for ProjectType::ALL.into_iter().map(|project| html! {
                        <option value={project.label()} selected={lead.project_type == Some(project)}>
                            { project.label() }
                        </option>
                    }) }
                </select>
                { error_line(&form, LeadField::ProjectType) }
            </div>

            <div class="form-group">
                <label for="project-details">{"Project Details *"}</label>
                <textarea
                    id="project-details"
                    name={LeadField::ProjectDetails.name()}
                    class={field_class(&form, LeadField::ProjectDetails)}
                    rows="5"
                    value={lead.project_details.clone()}
                    oninput={oninput}
                    placeholder="Tell us about your project requirements, goals, and any specific details..."
                />
                { error_line(&form, LeadField::ProjectDetails) }
            </div>

            <button type="submit" class="submit-button" disabled={form.submitting}>
                { if form.submitting { "Sending..." } else { "Send Message" } }
            </button>

            {
                if let Some(status) = &form.status {
                    html! { <div class="submit-status">{ status.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
