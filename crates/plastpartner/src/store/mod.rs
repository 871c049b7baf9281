//! Persistence seam for sales records.

mod memory;
mod persistence;

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{PersistedRecord, SalesRow, TenantId};

pub use memory::MemoryStore;

/// Which records a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// One company's records.
    Tenant(&'a TenantId),
    /// Every company's records.
    All,
}

/// Storage for sales records.
///
/// Each insert stands alone: a failed insert must leave earlier and
/// concurrent inserts untouched.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Store one row for a tenant.
    async fn insert(&self, tenant: &TenantId, row: &SalesRow) -> Result<PersistedRecord>;

    /// Records in insertion order.
    async fn records(&self, scope: Scope<'_>) -> Result<Vec<PersistedRecord>>;
}
