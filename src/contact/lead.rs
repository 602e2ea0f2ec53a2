use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Industry {
    Technology,
    Healthcare,
    #[serde(rename = "Finance & Banking")]
    FinanceBanking,
    #[serde(rename = "E-commerce & Retail")]
    EcommerceRetail,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Education,
    Manufacturing,
    #[serde(rename = "Legal Services")]
    LegalServices,
    #[serde(rename = "Marketing & Advertising")]
    MarketingAdvertising,
    #[serde(rename = "Hospitality & Tourism")]
    HospitalityTourism,
    #[serde(rename = "Transportation & Logistics")]
    TransportationLogistics,
    #[serde(rename = "Food & Beverage")]
    FoodBeverage,
    Construction,
    #[serde(rename = "Non-profit")]
    NonProfit,
    Consulting,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 16] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::FinanceBanking,
        Industry::EcommerceRetail,
        Industry::RealEstate,
        Industry::Education,
        Industry::Manufacturing,
        Industry::LegalServices,
        Industry::MarketingAdvertising,
        Industry::HospitalityTourism,
        Industry::TransportationLogistics,
        Industry::FoodBeverage,
        Industry::Construction,
        Industry::NonProfit,
        Industry::Consulting,
        Industry::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::FinanceBanking => "Finance & Banking",
            Industry::EcommerceRetail => "E-commerce & Retail",
            Industry::RealEstate => "Real Estate",
            Industry::Education => "Education",
            Industry::Manufacturing => "Manufacturing",
            Industry::LegalServices => "Legal Services",
            Industry::MarketingAdvertising => "Marketing & Advertising",
            Industry::HospitalityTourism => "Hospitality & Tourism",
            Industry::TransportationLogistics => "Transportation & Logistics",
            Industry::FoodBeverage => "Food & Beverage",
            Industry::Construction => "Construction",
            Industry::NonProfit => "Non-profit",
            Industry::Consulting => "Consulting",
            Industry::Other => "Other",
        }
    }
}

impl FromStr for Industry {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .into_iter()
            .find(|industry| industry.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// The service offerings a lead can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    #[serde(rename = "AI Agents")]
    AiAgents,
    #[serde(rename = "AI Websites")]
    AiWebsites,
    #[serde(rename = "SaaS")]
    Saas,
    #[serde(rename = "SEO Services")]
    SeoServices,
    #[serde(rename = "Generative Engine Optimization")]
    GenerativeEngineOptimization,
    #[serde(rename = "Automation Systems")]
    AutomationSystems,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::AiAgents,
        ProjectType::AiWebsites,
        ProjectType::Saas,
        ProjectType::SeoServices,
        ProjectType::GenerativeEngineOptimization,
        ProjectType::AutomationSystems,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::AiAgents => "AI Agents",
            ProjectType::AiWebsites => "AI Websites",
            ProjectType::Saas => "SaaS",
            ProjectType::SeoServices => "SEO Services",
            ProjectType::GenerativeEngineOptimization => "Generative Engine Optimization",
            ProjectType::AutomationSystems => "Automation Systems",
        }
    }
}

impl FromStr for ProjectType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|project| project.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// One input of the contact form. `name()` is the form control's `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Email,
    CompanyName,
    IndustryType,
    ProjectType,
    ProjectDetails,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Email,
        LeadField::CompanyName,
        LeadField::IndustryType,
        LeadField::ProjectType,
        LeadField::ProjectDetails,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LeadField::Email => "email",
            LeadField::CompanyName => "companyName",
            LeadField::IndustryType => "industryType",
            LeadField::ProjectType => "projectType",
            LeadField::ProjectDetails => "projectDetails",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Email => "Email Address",
            LeadField::CompanyName => "Business/Company Name",
            LeadField::IndustryType => "Industry Type",
            LeadField::ProjectType => "Project Type",
            LeadField::ProjectDetails => "Project Details",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeadField {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// A prospective client's inquiry as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub email: String,
    pub company_name: String,
    pub industry_type: Option<Industry>,
    pub project_type: Option<ProjectType>,
    pub project_details: String,
}

impl LeadSubmission {
    /// Replaces exactly one field. An empty value clears a select; a value
    /// outside the closed list also clears it. Email is stored trimmed.
    pub fn set(&mut self, field: LeadField, value: &str) {
        match field {
            LeadField::Email => self.email = value.trim().to_string(),
            LeadField::CompanyName => self.company_name = value.to_string(),
            LeadField::ProjectDetails => self.project_details = value.to_string(),
            LeadField::IndustryType => self.industry_type = parse_choice(value),
            LeadField::ProjectType => self.project_type = parse_choice(value),
        }
    }

    /// The field's current value as the form control shows it.
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Email => &self.email,
            LeadField::CompanyName => &self.company_name,
            LeadField::ProjectDetails => &self.project_details,
            LeadField::IndustryType => self.industry_type.map(Industry::label).unwrap_or(""),
            LeadField::ProjectType => self.project_type.map(ProjectType::label).unwrap_or(""),
        }
    }
}

fn parse_choice<T: FromStr<Err = UnknownOption>>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(choice) => Some(choice),
        Err(err) => {
            log::warn!("ignoring select value: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadSubmission {
        LeadSubmission {
            email: "ceo@acme.test".to_string(),
            company_name: "Acme".to_string(),
            industry_type: Some(Industry::Manufacturing),
            project_type: Some(ProjectType::AutomationSystems),
            project_details: "Automate the line".to_string(),
        }
    }

    #[test]
    fn updating_email_leaves_other_fields() {
        let mut lead = filled();
        lead.set(LeadField::Email, "cto@acme.test");

        assert_eq!(lead.email, "cto@acme.test");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.industry_type, Some(Industry::Manufacturing));
        assert_eq!(lead.project_type, Some(ProjectType::AutomationSystems));
        assert_eq!(lead.project_details, "Automate the line");
    }

    #[test]
    fn email_is_stored_and_serialized_trimmed() {
        let mut lead = filled();
        lead.set(LeadField::Email, "  cto@acme.test \n");
        assert_eq!(lead.value(LeadField::Email), "cto@acme.test");

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["email"], "cto@acme.test");
    }

    #[test]
    fn each_field_updates_in_isolation() {
        for field in LeadField::ALL {
            let mut lead = filled();
            let before = filled();
            lead.set(field, "");
            for other in LeadField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(lead.value(other), before.value(other), "{field:?} touched {other:?}");
            }
            assert_eq!(lead.value(field), "");
        }
    }

    #[test]
    fn selects_accept_listed_labels() {
        let mut lead = LeadSubmission::default();
        lead.set(LeadField::IndustryType, "Finance & Banking");
        lead.set(LeadField::ProjectType, "Generative Engine Optimization");
        assert_eq!(lead.industry_type, Some(Industry::FinanceBanking));
        assert_eq!(lead.project_type, Some(ProjectType::GenerativeEngineOptimization));
        assert_eq!(lead.value(LeadField::IndustryType), "Finance & Banking");
    }

    #[test]
    fn unlisted_select_value_clears_choice() {
        let mut lead = filled();
        lead.set(LeadField::IndustryType, "Astrology");
        assert_eq!(lead.industry_type, None);
    }

    #[test]
    fn field_names_match_form_controls() {
        for field in LeadField::ALL {
            assert_eq!(field.name().parse::<LeadField>(), Ok(field));
        }
        assert!("phone".parse::<LeadField>().is_err());
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["industryType"], "Manufacturing");
        assert_eq!(json["projectType"], "Automation Systems");
    }
}
