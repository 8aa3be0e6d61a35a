use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Catch, FishingResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no fishing result with id {0:?}")]
    RecordNotFound(String),
    #[error("fishing result {id:?} has no catch named {fish_name:?}")]
    CatchNotFound { id: String, fish_name: String },
    #[error("no {fish_name} left in fishing result {id:?}")]
    NotAvailable { id: String, fish_name: String },
}

/// In-memory fishing results, shared between handlers.
///
/// Cloning yields another handle onto the same records. Quantity changes
/// happen under the write lock, so a read-check-modify of one catch is never
/// interleaved with another.
#[derive(Clone, Default)]
pub struct FishingResultStore {
    records: Arc<RwLock<Vec<FishingResult>>>,
}

impl FishingResultStore {
    pub fn new(records: Vec<FishingResult>) -> Self {
        FishingResultStore {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Store holding the three records the service starts with
    pub fn seeded() -> Self {
        Self::new(vec![
            FishingResult::new("1", "Taichi", vec![Catch::new("アジ", 30)]),
            FishingResult::new(
                "2",
                "Ichita",
                vec![Catch::new("アジ", 10), Catch::new("タチウオ", 10)],
            ),
            FishingResult::new(
                "3",
                "Chita",
                vec![
                    Catch::new("イサキ", 20),
                    Catch::new("カサゴ", 10),
                    Catch::new("マダイ", 1),
                ],
            ),
        ])
    }

    pub async fn list(&self) -> Vec<FishingResult> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    // Ids are not unique; the earliest insert wins
    pub async fn find_by_id(&self, id: &str) -> Result<FishingResult, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    pub async fn append(&self, result: FishingResult) {
        self.records.write().await.push(result);
    }

    /// Add `delta` to the quantity of the first catch named `fish_name`.
    pub async fn adjust_quantity(
        &self,
        id: &str,
        fish_name: &str,
        delta: i64,
    ) -> Result<FishingResult, StoreError> {
        self.update_catch(id, fish_name, |c| {
            c.quantity += delta;
            Ok(())
        })
        .await
    }

    /// Take one unit of `fish_name`, refusing when none are left.
    pub async fn checkout(&self, id: &str, fish_name: &str) -> Result<FishingResult, StoreError> {
        self.update_catch(id, fish_name, |c| {
            if c.quantity <= 0 {
                return Err(StoreError::NotAvailable {
                    id: id.to_string(),
                    fish_name: fish_name.to_string(),
                });
            }
            c.quantity -= 1;
            Ok(())
        })
        .await
    }

    /// Put one unit of `fish_name` back. There is no upper bound.
    pub async fn give_back(&self, id: &str, fish_name: &str) -> Result<FishingResult, StoreError> {
        self.adjust_quantity(id, fish_name, 1).await
    }

    async fn update_catch<F>(
        &self,
        id: &str,
        fish_name: &str,
        apply: F,
    ) -> Result<FishingResult, StoreError>
    where
        F: FnOnce(&mut Catch) -> Result<(), StoreError>,
    {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;
        let entry = record
            .catch_mut(fish_name)
            .ok_or_else(|| StoreError::CatchNotFound {
                id: id.to_string(),
                fish_name: fish_name.to_string(),
            })?;
        apply(entry)?;
        Ok(record.clone())
    }
}
