//! HTTP handlers for ReguGuard API

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use compliance_engine::{samples, ComplianceReport};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Sample documents for pre-filling a client form
pub async fn get_samples() -> Json<SamplesResponse> {
    Json(SamplesResponse {
        company_text: samples::DEFAULT_SOP.to_string(),
        regulation_text: samples::DEFAULT_REGULATION.to_string(),
    })
}

/// Run a compliance check of the company SOP against the regulation
pub async fn compare(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ComplianceReport>, ApiError> {
    let Json(req) = payload.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::BodyTooLarge {
            limit: state.body_limit(),
        },
        _ => ApiError::InvalidRequest(e.body_text()),
    })?;

    let company_text = req
        .company_text
        .unwrap_or_else(|| samples::DEFAULT_SOP.to_string());
    let regulation_text = req
        .regulation_text
        .unwrap_or_else(|| samples::DEFAULT_REGULATION.to_string());

    check_size("company_text", &company_text, state.max_document_bytes)?;
    check_size("regulation_text", &regulation_text, state.max_document_bytes)?;

    // Scoring is CPU-bound, keep it off the async workers
    let engine_state = Arc::clone(&state);
    let report = tokio::task::spawn_blocking(move || {
        engine_state.engine.check(&company_text, &regulation_text)
    })
    .await
    .map_err(|join_error| {
        ApiError::Internal(anyhow::anyhow!("Comparison task failed: {}", join_error))
    })?;

    tracing::info!(
        clauses = report.summary.total,
        compliant = report.summary.compliant,
        partial = report.summary.partial,
        non_compliant = report.summary.non_compliant,
        "Compliance check complete"
    );

    Ok(Json(report))
}

fn check_size(field: &'static str, text: &str, limit: usize) -> Result<(), ApiError> {
    if text.len() > limit {
        return Err(ApiError::DocumentTooLarge { field, limit });
    }
    Ok(())
}
