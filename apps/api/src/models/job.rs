use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A submitted piece of job content. Rows are never hard-deleted;
/// `search_string`, `title` and `summary` are filled in by later operations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub title: Option<String>,
    pub search_string: Option<String>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}
