use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::catalog::{ActivityStore, StoreError};
use crate::models::activity::{ActivityRecord, Category};

/// Catalog held in memory, seeded once at startup. Used for local runs without
/// Postgres and throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityStore {
    activities: Vec<ActivityRecord>,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<ActivityRecord>) -> Self {
        Self { activities }
    }

    /// Loads a JSON array of activity records.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Seed(format!("cannot read {}: {e}", path.display())))?;
        let activities: Vec<ActivityRecord> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Seed(format!("invalid seed {}: {e}", path.display())))?;

        info!(
            "Loaded {} seed activities from {}",
            activities.len(),
            path.display()
        );
        Ok(Self::new(activities))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ActivityRecord>, StoreError> {
        Ok(self
            .activities
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect())
    }
}
