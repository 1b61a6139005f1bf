use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::catalog::{ActivityStore, StoreError};
use crate::models::activity::{ActivityRecord, ActivityRow, Category};

/// Postgres-backed catalog reader over the `activities` table.
#[derive(Clone)]
pub struct PgActivityStore {
    pool: PgPool,
}

impl PgActivityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ActivityRecord>, StoreError> {
        // created_at, id gives a total order so equal-score ties are reproducible
        let rows: Vec<ActivityRow> = sqlx::query_as(
            "SELECT id, category, title, description, tags FROM activities WHERE category = $1 ORDER BY created_at, id",
        )
        .bind(i64::from(category) as i32)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} activities for {:?}", rows.len(), category);

        rows.into_iter().map(into_record).collect()
    }
}

fn into_record(row: ActivityRow) -> Result<ActivityRecord, StoreError> {
    let id = row.id;
    let value = i64::from(row.category);
    ActivityRecord::try_from(row).map_err(|_| StoreError::InvalidCategory { id, value })
}
