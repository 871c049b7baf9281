//! Downloads: stored sales, measures and the upload template.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use plastpartner::{export, SalesStore, Scope};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tenant::Tenant;

fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /api/sales/export
pub async fn export_sales(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Response, ApiError> {
    let records = state.store.records(Scope::Tenant(&tenant)).await?;
    Ok(csv_attachment("mengder.csv", export::sales_csv(&records)?))
}

/// GET /api/measures/export
pub async fn export_measures(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Response, ApiError> {
    let measures = state.store.measures(&tenant).await;
    Ok(csv_attachment("tiltak.csv", export::measures_csv(&measures)?))
}

/// GET /api/template
pub async fn get_template(State(state): State<AppState>, _tenant: Tenant) -> Response {
    csv_attachment("mal.csv", state.config.schema.template_csv())
}
