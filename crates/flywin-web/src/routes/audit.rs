//! Audit API handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub query: String,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// POST /api/audit - Run one audit and return the model's JSON unchanged.
///
/// Failures are logged by the audit service; this layer only maps them to a status.
pub async fn run_audit(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected audit request body");
        api_error(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("audit", %request_id);

    async move {
        info!(subject = %req.query, model = %state.audit.model_name(), "Running audit");

        match state.audit.run(&req.query).await {
            Ok(report) => Ok(Json(report)),
            Err(e) if e.is_client_error() => Err(api_error(StatusCode::BAD_REQUEST, e.to_string())),
            Err(e) => Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        }
    }
    .instrument(span)
    .await
}
