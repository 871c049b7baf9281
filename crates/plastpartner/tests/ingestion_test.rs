//! Partial-failure behavior of batch ingestion.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use plastpartner::{
    ingest, Category, IngestionOutcome, MemoryStore, PersistedRecord, PlastError,
    PlasticComposition, Result, SalesRow, SalesStore, Scope, TenantId,
};

/// Store that refuses rows whose unit count is in `reject`.
struct FlakyStore {
    inner: MemoryStore,
    reject: HashSet<u64>,
    attempts: AtomicUsize,
}

impl FlakyStore {
    fn rejecting(units: &[u64]) -> Self {
        Self {
            inner: MemoryStore::new(),
            reject: units.iter().copied().collect(),
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SalesStore for FlakyStore {
    async fn insert(&self, tenant: &TenantId, row: &SalesRow) -> Result<PersistedRecord> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.reject.contains(&row.units_sold) {
            return Err(PlastError::Persistence(format!(
                "unique constraint violated for {} units",
                row.units_sold
            )));
        }
        self.inner.insert(tenant, row).await
    }

    async fn records(&self, scope: Scope<'_>) -> Result<Vec<PersistedRecord>> {
        self.inner.records(scope).await
    }
}

fn row(units: u64) -> SalesRow {
    SalesRow {
        sale_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        category: Category::DrinkingCup,
        plastic: PlasticComposition::Partial,
        units_sold: units,
        tonnes_plastic: None,
    }
}

fn tenant() -> TenantId {
    TenantId::new("Acme").unwrap()
}

#[tokio::test]
async fn test_partial_failure_keeps_successes_in_order() {
    let store = FlakyStore::rejecting(&[20, 40]);
    let rows: Vec<SalesRow> = [10, 20, 30, 40, 50].into_iter().map(row).collect();

    let result = ingest(&store, &tenant(), rows).await;

    assert_eq!(result.outcome(), IngestionOutcome::Partial);
    assert_eq!(store.attempts.load(Ordering::SeqCst), 5);

    let stored: Vec<u64> = result.succeeded.iter().map(|r| r.row.units_sold).collect();
    assert_eq!(stored, vec![10, 30, 50]);

    let failed: Vec<usize> = result.failed.iter().map(|f| f.index).collect();
    assert_eq!(failed, vec![2, 4]);
    assert_eq!(result.failed[0].row.units_sold, 20);
    assert!(result.failed[1].error.contains("40 units"));

    // Nothing is rolled back.
    let persisted = store.records(Scope::All).await.unwrap();
    assert_eq!(persisted.len(), 3);
}

#[tokio::test]
async fn test_total_failure_is_partial_with_nothing_stored() {
    let store = FlakyStore::rejecting(&[1, 2]);
    let result = ingest(&store, &tenant(), vec![row(1), row(2)]).await;

    assert_eq!(result.outcome(), IngestionOutcome::Partial);
    assert!(result.succeeded.is_empty());
    assert_eq!(result.failed.len(), 2);
}

#[tokio::test]
async fn test_complete_batch() {
    let store = MemoryStore::new();
    let result = ingest(&store, &tenant(), vec![row(1), row(2), row(3)]).await;

    assert_eq!(result.outcome(), IngestionOutcome::Complete);
    assert_eq!(result.succeeded.len(), 3);
    assert!(result.succeeded.iter().all(|r| r.company == tenant()));
}

#[tokio::test]
async fn test_empty_batch_is_complete() {
    let store = MemoryStore::new();
    let result = ingest(&store, &tenant(), Vec::new()).await;

    assert_eq!(result.outcome(), IngestionOutcome::Complete);
    assert!(result.succeeded.is_empty());
    assert_eq!(store.sales_count().await, 0);
}

#[tokio::test]
async fn test_ingest_through_trait_object() {
    let store: Box<dyn SalesStore> = Box::new(FlakyStore::rejecting(&[2]));
    let result = ingest(store.as_ref(), &tenant(), vec![row(1), row(2)]).await;

    assert_eq!(result.succeeded.len(), 1);
    assert_eq!(result.failed[0].index, 2);
}
