//! Sales submission handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plastpartner::{ingest, parse_submission, IngestionOutcome};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tenant::Tenant;

/// POST /api/sales
///
/// Stores every row of a JSON array. Answers 204 when all rows were stored,
/// 207 with the failed and stored rows when only some were.
pub async fn submit_sales(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    body: String,
) -> Result<Response, ApiError> {
    let rows = parse_submission(&state.config.schema, &body)?;
    let result = ingest(state.store.as_ref(), &tenant, rows).await;

    if !result.succeeded.is_empty() {
        state.save().await?;
    }

    Ok(match result.outcome() {
        IngestionOutcome::Complete => StatusCode::NO_CONTENT.into_response(),
        IngestionOutcome::Partial => (StatusCode::MULTI_STATUS, Json(result)).into_response(),
    })
}
