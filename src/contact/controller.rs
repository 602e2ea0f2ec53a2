use std::rc::Rc;

use yew::Reducible;

use crate::contact::lead::{LeadField, LeadSubmission};
use crate::contact::validation::{validate, FieldError};

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Update(LeadField, String),
    Submit,
    /// The simulated submission for the current attempt finished.
    Completed,
    ClearStatus,
}

/// Contact form state. Timers live in the component; this type only decides
/// what each action does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub lead: LeadSubmission,
    pub submitting: bool,
    pub status: Option<String>,
    pub errors: Vec<FieldError>,
    /// Bumped each time a submission is accepted.
    pub attempt: u64,
}

impl FormState {
    pub fn error_for(&self, field: LeadField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Applies `action`. Returns whether anything changed.
    pub fn apply(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::Update(field, value) => {
                if self.lead.value(field) == value && self.error_for(field).is_none() {
                    return false;
                }
                self.lead.set(field, &value);
                self.errors.retain(|e| e.field() != field);
                true
            }
            FormAction::Submit => {
                if self.submitting {
                    return false;
                }
                let errors = validate(&self.lead);
                if !errors.is_empty() {
                    self.errors = errors;
                    self.status = None;
                    return true;
                }
                self.errors.clear();
                self.status = None;
                self.submitting = true;
                self.attempt += 1;
                true
            }
            FormAction::Completed => {
                if !self.submitting {
                    return false;
                }
                self.lead = LeadSubmission::default();
                self.submitting = false;
                self.status = Some(SUCCESS_MESSAGE.to_string());
                true
            }
            FormAction::ClearStatus => self.status.take().is_some(),
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::lead::{Industry, ProjectType};

    fn filled_form() -> FormState {
        let mut state = FormState::default();
        for (field, value) in [
            (LeadField::Email, "ops@harbor.co"),
            (LeadField::CompanyName, "Harbor Logistics"),
            (LeadField::IndustryType, "Transportation & Logistics"),
            (LeadField::ProjectType, "Automation Systems"),
            (LeadField::ProjectDetails, "Route planning"),
        ] {
            state.apply(FormAction::Update(field, value.to_string()));
        }
        state
    }

    #[test]
    fn submit_then_complete_clears_every_field() {
        let mut state = filled_form();
        assert_eq!(state.lead.industry_type, Some(Industry::TransportationLogistics));
        assert_eq!(state.lead.project_type, Some(ProjectType::AutomationSystems));

        assert!(state.apply(FormAction::Submit));
        assert!(state.submitting);
        assert_eq!(state.attempt, 1);

        assert!(state.apply(FormAction::Completed));
        assert!(!state.submitting);
        assert_eq!(state.lead, LeadSubmission::default());
        for field in LeadField::ALL {
            assert_eq!(state.lead.value(field), "");
        }
        assert_eq!(state.status.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        let in_flight = state.clone();

        assert!(!state.apply(FormAction::Submit));
        assert_eq!(state, in_flight);
        assert_eq!(state.attempt, 1);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(filled_form()).reduce(FormAction::Submit);
        let again = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn invalid_lead_is_rejected_without_submitting() {
        let mut state = FormState::default();
        state.apply(FormAction::Update(LeadField::Email, "not-an-email".to_string()));

        assert!(state.apply(FormAction::Submit));
        assert!(!state.submitting);
        assert_eq!(state.attempt, 0);
        assert_eq!(state.error_for(LeadField::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(state.errors.len(), 5);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = FormState::default();
        state.apply(FormAction::Submit);
        state.apply(FormAction::Update(LeadField::CompanyName, "Harbor".to_string()));

        assert!(state.error_for(LeadField::CompanyName).is_none());
        assert!(state.error_for(LeadField::Email).is_some());
        assert_eq!(state.errors.len(), 4);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = filled_form();
        assert!(!state.apply(FormAction::Completed));
        assert_eq!(state.lead.company_name, "Harbor Logistics");
        assert!(state.status.is_none());
    }

    #[test]
    fn status_clears_after_success() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        state.apply(FormAction::Completed);

        assert!(state.apply(FormAction::ClearStatus));
        assert!(state.status.is_none());
        assert!(!state.apply(FormAction::ClearStatus));
    }

    #[test]
    fn new_submission_hides_previous_status() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        state.apply(FormAction::Completed);

        let mut next = filled_form();
        next.status = state.status.clone();
        next.attempt = state.attempt;
        next.apply(FormAction::Submit);
        assert!(next.status.is_none());
        assert_eq!(next.attempt, 2);
    }

    #[test]
    fn rejected_submission_hides_previous_status() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        state.apply(FormAction::Completed);
        assert!(state.status.is_some());

        assert!(state.apply(FormAction::Submit));
        assert!(!state.submitting);
        assert_eq!(state.errors.len(), 5);
        assert!(state.status.is_none());
    }
}
