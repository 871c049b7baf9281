//! Measure handlers: list, register and delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use plastpartner::{Measure, NewMeasure};
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tenant::Tenant;

/// GET /api/measures
pub async fn list_measures(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Json<Vec<Measure>> {
    Json(state.store.measures(&tenant).await)
}

/// POST /api/measures
pub async fn create_measure(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    Json(req): Json<NewMeasure>,
) -> Result<(StatusCode, Json<Measure>), ApiError> {
    let details = req.validate()?;
    let measure = state.store.add_measure(&tenant, details).await;
    state.save().await?;

    info!(company = %tenant, id = measure.id, "registered measure");
    Ok((StatusCode::CREATED, Json(measure)))
}

/// DELETE /api/measures/:id
pub async fn delete_measure(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_measure(&tenant, id).await?;
    state.save().await?;

    info!(company = %tenant, id, "deleted measure");
    Ok(StatusCode::NO_CONTENT)
}
