//! Company identification for API requests.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use plastpartner::TenantId;

use super::error::ApiError;

/// Header naming the company a request acts for.
pub const COMPANY_HEADER: &str = "x-company";

/// The requesting company, taken from the `X-Company` header.
#[derive(Debug, Clone)]
pub struct Tenant(pub TenantId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Tenant {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(COMPANY_HEADER)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .ok_or_else(|| ApiError::Unauthorized("missing X-Company header".to_string()))?;

        TenantId::new(raw)
            .map(Tenant)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))
    }
}
