use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::contact::lead::{LeadField, LeadSubmission};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(LeadField),
    #[error("Enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> LeadField {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => LeadField::Email,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Checks a lead before it is accepted. Errors come back in form order, at
/// most one per field.
pub fn validate(lead: &LeadSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in LeadField::ALL {
        let value = lead.value(field).trim();
        if value.is_empty() {
            errors.push(FieldError::Required(field));
        } else if field == LeadField::Email && !is_valid_email(value) {
            errors.push(FieldError::InvalidEmail);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::lead::{Industry, ProjectType};

    fn valid() -> LeadSubmission {
        LeadSubmission {
            email: "founder@startup.io".to_string(),
            company_name: "Startup".to_string(),
            industry_type: Some(Industry::Technology),
            project_type: Some(ProjectType::AiAgents),
            project_details: "Customer support agent".to_string(),
        }
    }

    #[test]
    fn complete_lead_passes() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn empty_lead_reports_every_field_in_order() {
        let errors = validate(&LeadSubmission::default());
        let fields: Vec<LeadField> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, LeadField::ALL.to_vec());
        assert!(errors.iter().all(|e| matches!(e, FieldError::Required(_))));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut lead = valid();
        lead.company_name = "   ".to_string();
        lead.project_details = "\n\t".to_string();
        assert_eq!(
            validate(&lead),
            vec![
                FieldError::Required(LeadField::CompanyName),
                FieldError::Required(LeadField::ProjectDetails),
            ]
        );
    }

    #[test]
    fn malformed_email_is_reported_once() {
        for email in ["founder", "founder@", "@startup.io", "founder@startup", "a b@c.io"] {
            let mut lead = valid();
            lead.email = email.to_string();
            assert_eq!(validate(&lead), vec![FieldError::InvalidEmail], "{email}");
        }
    }

    #[test]
    fn missing_select_is_required() {
        let mut lead = valid();
        lead.industry_type = None;
        assert_eq!(validate(&lead), vec![FieldError::Required(LeadField::IndustryType)]);
    }

    #[test]
    fn email_check_ignores_surrounding_space() {
        assert!(is_valid_email("  hello@xweb.dev "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_pattern_matches_plain_addresses() {
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("first.last@example.c"));
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            FieldError::Required(LeadField::CompanyName).to_string(),
            "Business/Company Name is required"
        );
    }
}
