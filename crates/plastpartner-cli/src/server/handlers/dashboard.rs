//! Dashboard handler.

use axum::{extract::State, Json};
use chrono::{Datelike, Local};
use plastpartner::{Dashboard, SalesStore, Scope};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tenant::Tenant;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Json<Dashboard>, ApiError> {
    let mine = state.store.records(Scope::Tenant(&tenant)).await?;
    let all = state.store.records(Scope::All).await?;

    Ok(Json(Dashboard::build(
        &tenant,
        &mine,
        &all,
        &state.config,
        Local::now().year(),
    )))
}
