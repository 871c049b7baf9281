//! Typed sales domain.

mod sales;
mod submission;
mod tenant;

pub use sales::{Category, PersistedRecord, PlasticComposition, SalesRow};
pub use submission::parse_submission;
pub use tenant::TenantId;
