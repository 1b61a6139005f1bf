//! Activity catalog: the read-only store the recommendation engine fetches from.
//!
//! The catalog is populated out-of-band by the ingestion pipeline. This service
//! only ever reads it, one category at a time.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::activity::{ActivityRecord, Category};

pub use memory::InMemoryActivityStore;
pub use postgres::PgActivityStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("catalog row {id} carries invalid category {value}")]
    InvalidCategory { id: uuid::Uuid, value: i64 },

    #[error("seed error: {0}")]
    Seed(String),
}

/// Catalog fetch seam. Carried in `AppState` as `Arc<dyn ActivityStore>`.
///
/// Implementations must return records in a stable order: ranking ties keep it.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn find_by_category(&self, category: Category)
        -> Result<Vec<ActivityRecord>, StoreError>;
}
