//! Audit view state.
//!
//! Form-then-results flow shared by the browser dashboard and the terminal:
//! `Idle -> Loading -> Results | Error`, and `Results -> Idle` on reset.
//! Only one request may be in flight at a time.

pub mod report;

pub use report::{risk_color, BannerColor, CrmLink, ListSection, ReportView, RiskBanner};

use serde_json::Value;
use tracing::debug;

/// Message shown for any failed audit. The underlying error is logged, not displayed.
pub const AUDIT_ERROR_MESSAGE: &str = "Unable to run the audit. Please try again.";

/// Where the view currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { subject: String },
    Results { subject: String, report: Value },
    Error { message: &'static str },
}

/// Drives one user's audit session.
#[derive(Debug)]
pub struct AuditView {
    state: ViewState,
}

impl Default for AuditView {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Input and submit are disabled while a request is pending.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// Try to start an audit.
    ///
    /// Returns the subject to send, or `None` when the input is blank or a
    /// request is already pending. The caller must only issue a request on `Some`.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if self.is_busy() {
            debug!("Ignoring submit while an audit is pending");
            return None;
        }

        let subject = input.trim();
        if subject.is_empty() {
            return None;
        }

        let subject = subject.to_string();
        self.state = ViewState::Loading {
            subject: subject.clone(),
        };
        Some(subject)
    }

    /// Record the outcome of the pending request.
    ///
    /// Ignored (returns `false`) unless a request is pending.
    pub fn complete<E: std::fmt::Display>(&mut self, outcome: Result<Value, E>) -> bool {
        let subject = match &self.state {
            ViewState::Loading { subject } => subject.clone(),
            _ => return false,
        };

        self.state = match outcome {
            Ok(report) => ViewState::Results { subject, report },
            Err(e) => {
                debug!(error = %e, subject = %subject, "Audit failed");
                ViewState::Error {
                    message: AUDIT_ERROR_MESSAGE,
                }
            }
        };
        true
    }

    /// Leave results (or an error) and go back to an empty form.
    ///
    /// A pending request is not cancelled, so reset is ignored while loading.
    pub fn reset(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.state = ViewState::Idle;
        true
    }

    /// Presentation model for the current results, if any.
    pub fn report_view(&self) -> Option<ReportView> {
        match &self.state {
            ViewState::Results { report, .. } => Some(ReportView::from_value(report)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_moves_to_loading() {
        let mut view = AuditView::new();
        assert_eq!(view.submit("  Acme Corp "), Some("Acme Corp".to_string()));
        assert!(view.is_busy());
        assert_eq!(
            view.state(),
            &ViewState::Loading {
                subject: "Acme Corp".to_string()
            }
        );
    }

    #[test]
    fn test_blank_submit_issues_nothing() {
        let mut view = AuditView::new();
        assert_eq!(view.submit(""), None);
        assert_eq!(view.submit(" \t\n"), None);
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[test]
    fn test_no_second_request_while_pending() {
        let mut view = AuditView::new();
        assert!(view.submit("Acme").is_some());
        assert_eq!(view.submit("Globex"), None);
        assert_eq!(
            view.state(),
            &ViewState::Loading {
                subject: "Acme".to_string()
            }
        );
    }

    #[test]
    fn test_success_shows_results() {
        let mut view = AuditView::new();
        view.submit("Acme");
        assert!(view.complete::<String>(Ok(json!({ "riskLevel": "HIGH" }))));

        let report = view.report_view().unwrap();
        assert_eq!(report.banner.unwrap().color, BannerColor::High);
        assert!(!view.is_busy());
    }

    #[test]
    fn test_failure_returns_to_input_with_static_message() {
        let mut view = AuditView::new();
        view.submit("Acme");
        view.complete::<String>(Err("connection refused".to_string()));

        assert_eq!(
            view.state(),
            &ViewState::Error {
                message: AUDIT_ERROR_MESSAGE
            }
        );
        assert_eq!(view.submit("Acme"), Some("Acme".to_string()));
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut view = AuditView::new();
        assert!(!view.complete::<String>(Ok(json!({}))));
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[test]
    fn test_reset_from_results() {
        let mut view = AuditView::new();
        view.submit("Acme");
        view.complete::<String>(Ok(json!({})));
        assert!(view.reset());
        assert_eq!(view.state(), &ViewState::Idle);
        assert!(view.report_view().is_none());
    }

    #[test]
    fn test_reset_ignored_while_loading() {
        let mut view = AuditView::new();
        view.submit("Acme");
        assert!(!view.reset());
        assert!(view.is_busy());
    }
}
