//! In-memory store with JSON snapshots.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{PlastError, Result};
use crate::measure::{Measure, MeasureDetails};
use crate::record::{PersistedRecord, SalesRow, TenantId};

use super::{SalesStore, Scope};

/// Everything the store holds; also the on-disk snapshot format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct Snapshot {
    pub(super) next_id: u64,
    #[serde(default)]
    pub(super) sales: Vec<PersistedRecord>,
    #[serde(default)]
    pub(super) measures: Vec<Measure>,
}

impl Snapshot {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Sales and measure storage kept in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) state: RwLock<Snapshot>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Number of stored sales records across all tenants.
    pub async fn sales_count(&self) -> usize {
        self.state.read().await.sales.len()
    }

    /// Register a measure for a tenant.
    pub async fn add_measure(&self, tenant: &TenantId, details: MeasureDetails) -> Measure {
        let mut state = self.state.write().await;
        let measure = Measure {
            id: state.allocate_id(),
            company: tenant.clone(),
            details,
        };
        state.measures.push(measure.clone());
        measure
    }

    /// A tenant's measures, most recently implemented first.
    pub async fn measures(&self, tenant: &TenantId) -> Vec<Measure> {
        let state = self.state.read().await;
        let mut measures: Vec<Measure> = state
            .measures
            .iter()
            .filter(|m| &m.company == tenant)
            .cloned()
            .collect();
        measures.sort_by(|a, b| b.details.implemented_on.cmp(&a.details.implemented_on));
        measures
    }

    /// Delete one of the tenant's measures.
    ///
    /// Another tenant's measure is reported as not found.
    pub async fn delete_measure(&self, tenant: &TenantId, id: u64) -> Result<Measure> {
        let mut state = self.state.write().await;
        let position = state
            .measures
            .iter()
            .position(|m| m.id == id && &m.company == tenant)
            .ok_or_else(|| PlastError::NotFound(format!("measure {}", id)))?;
        Ok(state.measures.remove(position))
    }
}

#[async_trait]
impl SalesStore for MemoryStore {
    async fn insert(&self, tenant: &TenantId, row: &SalesRow) -> Result<PersistedRecord> {
        let mut state = self.state.write().await;
        let record = PersistedRecord {
            id: state.allocate_id(),
            company: tenant.clone(),
            created_at: Utc::now(),
            row: row.clone(),
        };
        state.sales.push(record.clone());
        Ok(record)
    }

    async fn records(&self, scope: Scope<'_>) -> Result<Vec<PersistedRecord>> {
        let state = self.state.read().await;
        Ok(state
            .sales
            .iter()
            .filter(|r| match scope {
                Scope::Tenant(tenant) => &r.company == tenant,
                Scope::All => true,
            })
            .cloned()
            .collect())
    }
}
