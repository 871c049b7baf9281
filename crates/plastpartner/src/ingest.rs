//! Best-effort batch ingestion of validated sales rows.
//!
//! Every row is inserted on its own. A failed insert is recorded next to the
//! row that caused it; rows that made it in stay in.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::record::{PersistedRecord, SalesRow, TenantId};
use crate::store::SalesStore;

/// A row the store refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedRecord {
    /// 1-based position of the row in the submitted batch.
    pub index: usize,
    pub row: SalesRow,
    pub error: String,
}

/// Whether every row of a batch was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionOutcome {
    Complete,
    Partial,
}

/// Stored and refused rows of one batch, each in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestionResult {
    pub succeeded: Vec<PersistedRecord>,
    pub failed: Vec<FailedRecord>,
}

impl IngestionResult {
    pub fn outcome(&self) -> IngestionOutcome {
        if self.failed.is_empty() {
            IngestionOutcome::Complete
        } else {
            IngestionOutcome::Partial
        }
    }
}

/// Insert every row for `tenant`, concurrently, and wait for all of them.
///
/// No insert is cancelled or rolled back because another one failed.
pub async fn ingest<S>(store: &S, tenant: &TenantId, rows: Vec<SalesRow>) -> IngestionResult
where
    S: SalesStore + ?Sized,
{
    let attempts = join_all(rows.iter().map(|row| store.insert(tenant, row))).await;

    let mut result = IngestionResult::default();
    for (i, (row, attempt)) in rows.into_iter().zip(attempts).enumerate() {
        match attempt {
            Ok(record) => result.succeeded.push(record),
            Err(e) => {
                warn!(company = %tenant, index = i + 1, "failed to store sales record: {}", e);
                result.failed.push(FailedRecord {
                    index: i + 1,
                    row,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        company = %tenant,
        stored = result.succeeded.len(),
        failed = result.failed.len(),
        outcome = ?result.outcome(),
        "ingested sales batch"
    );

    result
}
