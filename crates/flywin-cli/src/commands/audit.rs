//! Terminal audit command.
//!
//! Calls a running Flywin server and renders the result the way the dashboard does.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flywin_core::view::{AuditView, ViewState, AUDIT_ERROR_MESSAGE};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{json, Value};

use crate::output;

#[derive(Args)]
pub struct AuditArgs {
    /// Company name or opportunity ID
    #[arg(required = true, num_args = 1..)]
    pub subject: Vec<String>,

    /// Flywin server base URL
    #[arg(long, env = "FLYWIN_SERVER", default_value = "http://127.0.0.1:3001")]
    pub server: String,

    /// Print the raw audit JSON instead of the formatted report
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AuditArgs, verbose: bool) -> Result<()> {
    let mut view = AuditView::new();
    let input = args.subject.join(" ");

    let Some(subject) = view.submit(&input) else {
        println!("{}", "Nothing to audit: enter a company name or opportunity ID.".dimmed());
        return Ok(());
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Analyzing {}...", subject));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = request_audit(&args.server, &subject).await;
    spinner.finish_and_clear();

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "Audit request failed");
        if verbose {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
    }
    view.complete(outcome);

    match view.state() {
        ViewState::Results { report, .. } if args.json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        ViewState::Results { subject, .. } => {
            if let Some(report) = view.report_view() {
                output::print_report(subject, &report);
            }
        }
        ViewState::Error { message } => {
            anyhow::bail!("{}", message);
        }
        ViewState::Idle | ViewState::Loading { .. } => {
            anyhow::bail!(AUDIT_ERROR_MESSAGE);
        }
    }

    Ok(())
}

/// POST the subject to `/api/audit` and return the audit object.
async fn request_audit(server: &str, subject: &str) -> Result<Value> {
    let url = format!("{}/api/audit", server.trim_end_matches('/'));
    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "query": subject }))
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        anyhow::bail!("Server error (HTTP {}): {}", status, message);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_subject_makes_no_request() {
        // An unroutable server would fail if a request were attempted.
        let args = AuditArgs {
            subject: vec!["  ".to_string(), "\t".to_string()],
            server: "http://127.0.0.1:1".to_string(),
            json: false,
        };
        assert!(execute(args, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_static_error() {
        let args = AuditArgs {
            subject: vec!["Acme".to_string()],
            server: "http://127.0.0.1:1".to_string(),
            json: false,
        };
        let err = execute(args, false).await.unwrap_err();
        assert_eq!(err.to_string(), AUDIT_ERROR_MESSAGE);
    }
}
