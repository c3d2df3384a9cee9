//! Dashboard route handlers.
//!
//! Serves the audit form and returns HTML fragments for HTMX partial updates.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use flywin_core::view::{AuditView, ListSection, ReportView, ViewState};
use serde::Deserialize;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    model: String,
}

#[derive(Template)]
#[template(path = "partials/results.html")]
struct ResultsTemplate {
    title: String,
    banner: BannerView,
    highlights: Vec<ListSection>,
    next_steps: Vec<ListSection>,
    gap_analysis: Vec<ListSection>,
    crm_links: Vec<LinkView>,
}

#[derive(Template)]
#[template(path = "partials/error.html")]
struct ErrorTemplate {
    message: &'static str,
}

/// View model for the risk banner (with computed fields).
struct BannerView {
    visible: bool,
    class: &'static str,
    label: String,
    summary: String,
}

struct LinkView {
    label: &'static str,
    url: String,
}

impl ResultsTemplate {
    fn from_report(subject: &str, report: ReportView) -> Self {
        let banner = match report.banner {
            Some(b) => BannerView {
                visible: true,
                class: b.color.css_class(),
                label: b.label.unwrap_or_default(),
                summary: b.summary.unwrap_or_default(),
            },
            None => BannerView {
                visible: false,
                class: "risk-neutral",
                label: String::new(),
                summary: String::new(),
            },
        };

        // Only plain web links are clickable.
        let crm_links = report
            .crm_links
            .into_iter()
            .filter(|l| l.url.starts_with("https://") || l.url.starts_with("http://"))
            .map(|l| LinkView {
                label: l.label,
                url: l.url,
            })
            .collect();

        Self {
            title: report.company_name.unwrap_or_else(|| subject.to_string()),
            banner,
            highlights: report.strengths.into_iter().chain(report.risks).collect(),
            next_steps: report.next_steps,
            gap_analysis: report.gap_analysis,
            crm_links,
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct AuditForm {
    #[serde(default)]
    pub query: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Serve the audit dashboard.
pub async fn index(State(state): State<AppState>) -> Response {
    let template = DashboardTemplate {
        model: state.audit.model_name().to_string(),
    };
    render(template)
}

/// POST /audit - Run an audit from the dashboard form. Returns the results area.
///
/// A blank query returns an empty results area without contacting the model.
/// Failures render the static error message with 200 so HTMX swaps it in.
pub async fn submit_audit(State(state): State<AppState>, Form(form): Form<AuditForm>) -> Response {
    let mut view = AuditView::new();
    let Some(subject) = view.submit(&form.query) else {
        return Html(String::new()).into_response();
    };

    let span = tracing::info_span!("audit", request_id = %Uuid::new_v4());
    let outcome = async {
        info!(subject = %subject, "Running dashboard audit");
        state.audit.run(&subject).await
    }
    .instrument(span)
    .await;

    view.complete(outcome);
    render_view(&view)
}

/// GET /audit/reset - Clear the results area.
pub async fn reset_audit() -> Response {
    let mut view = AuditView::new();
    view.reset();
    render_view(&view)
}

fn render_view(view: &AuditView) -> Response {
    match view.state() {
        ViewState::Results { subject, report } => {
            let report = ReportView::from_value(report);
            render(ResultsTemplate::from_report(subject, report))
        }
        ViewState::Error { message } => render(ErrorTemplate { message: *message }),
        ViewState::Idle | ViewState::Loading { .. } => Html(String::new()).into_response(),
    }
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}
