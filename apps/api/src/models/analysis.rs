use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeAnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub analysis_data: Value,
    pub created_at: DateTime<Utc>,
}
