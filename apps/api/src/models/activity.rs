use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Evaluation bucket an activity is catalogued under.
///
/// Wire and storage representation is the integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Category {
    SpecializationSpike = 1,
    Leadership = 2,
    GlobalImpact = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("category must be one of 1, 2 or 3 (got {0})")]
pub struct InvalidCategory(pub i64);

impl TryFrom<i64> for Category {
    type Error = InvalidCategory;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Category::SpecializationSpike),
            2 => Ok(Category::Leadership),
            3 => Ok(Category::GlobalImpact),
            other => Err(InvalidCategory(other)),
        }
    }
}

impl From<Category> for i64 {
    fn from(category: Category) -> Self {
        category as i64
    }
}

/// A catalog entry. Owned by the catalog; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub category: Category,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ActivityRecord {
    /// Lowercased title, description and tags joined into one whitespace-normalized string.
    /// Retrieval and every scoring dimension match against this same text.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.tags.len() + 2);
        parts.push(&self.title);
        parts.push(&self.description);
        parts.extend(self.tags.iter().map(String::as_str));

        parts
            .join(" ")
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Row shape of the `activities` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub id: Uuid,
    pub category: i32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl TryFrom<ActivityRow> for ActivityRecord {
    type Error = InvalidCategory;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(ActivityRecord {
            id: row.id,
            category: Category::try_from(i64::from(row.category))?,
            title: row.title,
            description: row.description,
            tags: row.tags,
        })
    }
}

/// Public projection returned to API callers. Scores stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Category,
}

impl From<ActivityRecord> for ActivityView {
    fn from(record: ActivityRecord) -> Self {
        ActivityView {
            id: record.id,
            title: record.title,
            description: record.description,
            tags: record.tags,
            category: record.category,
        }
    }
}
