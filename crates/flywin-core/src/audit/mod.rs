//! Opportunity audits.
//!
//! One audit is one prompt, one model call and one JSON parse. The parsed
//! object is returned unchanged; see [`model::AuditReport`] for the typed view.

pub mod client;
pub mod model;
pub mod prompt;

pub use client::{ClaudeClient, CompletionModel};
pub use model::{AuditReport, CrmLinks, GapAnalysis, NextSteps, RiskLevel};

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{FlywinError, FlywinResult};

/// Runs audits against a completion model.
#[derive(Clone)]
pub struct AuditService {
    model: Arc<dyn CompletionModel>,
}

impl AuditService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Model identifier used for audits.
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Audit one subject.
    ///
    /// A blank subject is rejected before the model is contacted. Any failure
    /// after that (transport, HTTP status, parse) is returned as-is; nothing is retried.
    pub async fn run(&self, subject: &str) -> FlywinResult<Value> {
        if subject.trim().is_empty() {
            return Err(FlywinError::validation("query must not be empty"));
        }

        let prompt = prompt::build_prompt(subject);
        let reply = self.model.complete(&prompt).await.map_err(|e| {
            error!(error = %e, "Audit model call failed");
            e
        })?;

        let value = parse_reply(&reply).map_err(|e| {
            error!(error = %e, reply_len = reply.len(), "Audit reply rejected");
            e
        })?;

        debug!(fields = value.as_object().map_or(0, |o| o.len()), "Audit parsed");
        Ok(value)
    }
}

/// Parse the model's reply. No repair is attempted: fenced or truncated JSON fails.
pub fn parse_reply(reply: &str) -> FlywinResult<Value> {
    let value: Value = serde_json::from_str(reply)?;
    match value {
        Value::Object(_) => Ok(value),
        Value::Array(_) => Err(FlywinError::NotAnObject("array")),
        Value::String(_) => Err(FlywinError::NotAnObject("string")),
        Value::Number(_) => Err(FlywinError::NotAnObject("number")),
        Value::Bool(_) => Err(FlywinError::NotAnObject("boolean")),
        Value::Null => Err(FlywinError::NotAnObject("null")),
    }
}
