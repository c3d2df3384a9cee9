//! Presentation model for a finished audit.

use serde::Serialize;
use serde_json::Value;

use crate::audit::{AuditReport, RiskLevel};

/// Colour of the risk banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerColor {
    High,
    Moderate,
    Low,
    Neutral,
}

impl BannerColor {
    /// CSS class used by the dashboard.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "risk-high",
            Self::Moderate => "risk-moderate",
            Self::Low => "risk-low",
            Self::Neutral => "risk-neutral",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::High => "#dc2626",
            Self::Moderate => "#f59e0b",
            Self::Low => "#16a34a",
            Self::Neutral => "#6b7280",
        }
    }
}

impl From<&RiskLevel> for BannerColor {
    fn from(level: &RiskLevel) -> Self {
        match level {
            RiskLevel::High => Self::High,
            RiskLevel::Moderate => Self::Moderate,
            RiskLevel::Low => Self::Low,
            RiskLevel::Unknown(_) => Self::Neutral,
        }
    }
}

/// Banner colour for a raw `riskLevel` string (case-insensitive).
pub fn risk_color(level: &str) -> BannerColor {
    BannerColor::from(&RiskLevel::parse(level))
}

/// Risk banner contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBanner {
    pub label: Option<String>,
    pub summary: Option<String>,
    pub color: BannerColor,
}

/// A titled, non-empty list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// A named CRM link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrmLink {
    pub label: &'static str,
    pub url: String,
}

/// Everything a renderer needs, with empty groups already dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub company_name: Option<String>,
    pub banner: Option<RiskBanner>,
    pub strengths: Option<ListSection>,
    pub risks: Option<ListSection>,
    pub next_steps: Vec<ListSection>,
    pub gap_analysis: Vec<ListSection>,
    pub crm_links: Vec<CrmLink>,
}

impl ReportView {
    pub fn from_value(value: &Value) -> Self {
        Self::from_report(AuditReport::from_value(value))
    }

    pub fn from_report(report: AuditReport) -> Self {
        let banner = if report.risk_level.is_some() || report.risk_summary.is_some() {
            Some(RiskBanner {
                color: report
                    .risk_level
                    .as_ref()
                    .map_or(BannerColor::Neutral, BannerColor::from),
                label: report.risk_level.as_ref().map(|l| l.label().to_string()),
                summary: report.risk_summary,
            })
        } else {
            None
        };

        let next_steps = [
            section("Immediate", report.next_steps.immediate),
            section("This Week", report.next_steps.this_week),
            section("Next Two Weeks", report.next_steps.next_two_weeks),
        ];
        let gap_analysis = [
            section("Complete", report.gap_analysis.complete),
            section("Partial", report.gap_analysis.partial),
            section("Missing", report.gap_analysis.missing),
        ];

        let crm_links = [
            ("Salesforce", report.crm_links.salesforce),
            ("HubSpot", report.crm_links.hubspot),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| CrmLink { label, url }))
        .collect();

        Self {
            company_name: report.company_name,
            banner,
            strengths: section("Strengths", report.strengths),
            risks: section("Risks", report.risks),
            next_steps: next_steps.into_iter().flatten().collect(),
            gap_analysis: gap_analysis.into_iter().flatten().collect(),
            crm_links,
        }
    }

    /// True when nothing at all would be rendered.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.banner.is_none()
            && self.strengths.is_none()
            && self.risks.is_none()
            && self.next_steps.is_empty()
            && self.gap_analysis.is_empty()
            && self.crm_links.is_empty()
    }
}

fn section(title: &'static str, items: Vec<String>) -> Option<ListSection> {
    if items.is_empty() {
        None
    } else {
        Some(ListSection { title, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_color() {
        assert_eq!(risk_color("HIGH"), BannerColor::High);
        assert_eq!(risk_color("high"), BannerColor::High);
        assert_eq!(risk_color("Moderate"), BannerColor::Moderate);
        assert_eq!(risk_color("low"), BannerColor::Low);
        assert_eq!(risk_color("SEVERE"), BannerColor::Neutral);
        assert_eq!(risk_color(""), BannerColor::Neutral);
        assert_eq!(risk_color("SEVERE").css_class(), "risk-neutral");
    }

    #[test]
    fn test_empty_sections_omitted() {
        let view = ReportView::from_value(&json!({
            "companyName": "Hooli",
            "riskLevel": "LOW",
            "strengths": [],
            "risks": ["Competitor incumbent"],
            "nextSteps": { "immediate": [], "thisWeek": ["Demo"] },
            "gapAnalysis": {}
        }));

        assert_eq!(view.strengths, None);
        assert_eq!(view.risks.as_ref().unwrap().items, vec!["Competitor incumbent"]);
        assert_eq!(view.next_steps.len(), 1);
        assert_eq!(view.next_steps[0].title, "This Week");
        assert!(view.gap_analysis.is_empty());
        assert!(view.crm_links.is_empty());
    }

    #[test]
    fn test_banner_from_level_and_summary() {
        let view = ReportView::from_value(&json!({
            "riskLevel": "high",
            "riskSummary": "Stalled in procurement."
        }));

        let banner = view.banner.unwrap();
        assert_eq!(banner.color, BannerColor::High);
        assert_eq!(banner.label.as_deref(), Some("HIGH"));
        assert_eq!(banner.summary.as_deref(), Some("Stalled in procurement."));
    }

    #[test]
    fn test_summary_without_level_is_neutral() {
        let view = ReportView::from_value(&json!({ "riskSummary": "Unclear." }));
        let banner = view.banner.unwrap();
        assert_eq!(banner.color, BannerColor::Neutral);
        assert_eq!(banner.label, None);
    }

    #[test]
    fn test_crm_links_only_when_present() {
        let view = ReportView::from_value(&json!({
            "crmLinks": { "salesforce": null, "hubspot": "https://app.hubspot.com/deal/9" }
        }));

        assert_eq!(view.crm_links.len(), 1);
        assert_eq!(view.crm_links[0].label, "HubSpot");
    }

    #[test]
    fn test_empty_object_renders_nothing() {
        assert!(ReportView::from_value(&json!({})).is_empty());
    }
}
