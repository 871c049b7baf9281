//! Upload handler: tokenize and validate a sales sheet.

use axum::{body::Bytes, extract::State, Json};
use plastpartner::{Parser, SalesRow, TableValidator, UploadMetadata, ValidationReport};
use serde::Serialize;
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tenant::Tenant;

/// Result of checking an uploaded sheet.
#[derive(Serialize)]
pub struct UploadResponse {
    pub metadata: UploadMetadata,
    pub report: ValidationReport,
    pub accepted: bool,
    /// Typed rows, ready for `POST /api/sales`, when the sheet is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<SalesRow>>,
}

/// POST /api/upload
///
/// Nothing is stored; the client submits the returned rows separately.
pub async fn upload_sheet(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    let (table, metadata) = Parser::new().parse_upload(&body)?;
    let validator = TableValidator::new(&state.config.schema);

    let (report, rows) = validator.evaluate(&table);

    info!(
        company = %tenant,
        rows = metadata.row_count,
        accepted = rows.is_some(),
        "checked upload"
    );

    Ok(Json(UploadResponse {
        metadata,
        accepted: rows.is_some(),
        report,
        rows,
    }))
}
