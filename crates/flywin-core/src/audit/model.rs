//! Audit value object.
//!
//! The model's reply is trusted as-is on the wire; this typed view is only used
//! for presentation, so every field is optional and extracted leniently.

use serde::Serialize;
use serde_json::Value;

/// Deal risk classification returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(untagged)]
    Unknown(String),
}

impl RiskLevel {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Unknown(s.to_string()),
        }
    }

    /// Label as shown in the risk banner.
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

/// Grouped action items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSteps {
    pub immediate: Vec<String>,
    pub this_week: Vec<String>,
    pub next_two_weeks: Vec<String>,
}

/// Grouped qualification status items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub complete: Vec<String>,
    pub partial: Vec<String>,
    pub missing: Vec<String>,
}

/// Optional links into the customer's CRM.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrmLinks {
    pub salesforce: Option<String>,
    pub hubspot: Option<String>,
}

/// One opportunity audit as produced by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub company_name: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub risk_summary: Option<String>,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub next_steps: NextSteps,
    pub gap_analysis: GapAnalysis,
    pub crm_links: CrmLinks,
}

impl AuditReport {
    /// Build a report from arbitrary JSON.
    ///
    /// Fields that are missing, `null`, or of the wrong type are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let next_steps = value.get("nextSteps");
        let gaps = value.get("gapAnalysis");
        let crm = value.get("crmLinks");

        Self {
            company_name: string_field(value.get("companyName")),
            risk_level: string_field(value.get("riskLevel")).map(|s| RiskLevel::parse(&s)),
            risk_summary: string_field(value.get("riskSummary")),
            strengths: string_list(value.get("strengths")),
            risks: string_list(value.get("risks")),
            next_steps: NextSteps {
                immediate: string_list(next_steps.and_then(|v| v.get("immediate"))),
                this_week: string_list(next_steps.and_then(|v| v.get("thisWeek"))),
                next_two_weeks: string_list(next_steps.and_then(|v| v.get("nextTwoWeeks"))),
            },
            gap_analysis: GapAnalysis {
                complete: string_list(gaps.and_then(|v| v.get("complete"))),
                partial: string_list(gaps.and_then(|v| v.get("partial"))),
                missing: string_list(gaps.and_then(|v| v.get("missing"))),
            },
            crm_links: CrmLinks {
                salesforce: string_field(crm.and_then(|v| v.get("salesforce"))),
                hubspot: string_field(crm.and_then(|v| v.get("hubspot"))),
            },
        }
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

// Non-string entries are dropped; the rest keep their order.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
