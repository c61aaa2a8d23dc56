//! Analysis Store: persistence for finished resume analyses.
//!
//! `PgAnalysisStore` is the production backend. `MemoryAnalysisStore` backs
//! local runs without `DATABASE_URL` and the route tests.
//!
//! `AppState` holds an `Arc<dyn AnalysisStore>`, chosen at startup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::analysis::models::AnalysisReport;
use crate::models::analysis::ResumeAnalysisRow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored analysis is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A persisted analysis together with who uploaded what, and when.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub report: AnalysisReport,
    pub created_at: DateTime<Utc>,
}

impl StoredAnalysis {
    fn from_row(row: ResumeAnalysisRow) -> Result<Self, StoreError> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            filename: row.filename,
            report: serde_json::from_value(row.analysis_data)?,
            created_at: row.created_at,
        })
    }

    /// Like `from_row`, but a report that no longer decodes is replaced by an
    /// empty one so a single bad row cannot fail a whole listing.
    fn from_row_or_empty(row: ResumeAnalysisRow) -> Self {
        let report = serde_json::from_value(row.analysis_data).unwrap_or_else(|e| {
            warn!("Stored analysis {} is undecodable, listing it as empty: {e}", row.id);
            AnalysisReport::default()
        });
        Self {
            id: row.id,
            user_id: row.user_id,
            filename: row.filename,
            report,
            created_at: row.created_at,
        }
    }

    pub fn summary(&self) -> AnalysisSummary {
        let analysis = self.report.analysis.as_ref();
        AnalysisSummary {
            id: self.id,
            filename: self.filename.clone(),
            created_at: self.created_at,
            score: analysis.map(|a| a.score).unwrap_or(0),
            domain: analysis
                .map(|a| a.identified_domain.clone())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// One line of a user's analysis history.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub id: Uuid,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    /// 0 when the analysis stage produced nothing.
    pub score: u8,
    /// "N/A" when the analysis stage produced nothing.
    pub domain: String,
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn insert(
        &self,
        user_id: Uuid,
        filename: &str,
        report: &AnalysisReport,
    ) -> Result<StoredAnalysis, StoreError>;

    /// All analyses for `user_id`, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredAnalysis>, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgAnalysisStore
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(
        &self,
        user_id: Uuid,
        filename: &str,
        report: &AnalysisReport,
    ) -> Result<StoredAnalysis, StoreError> {
        let data = serde_json::to_value(report)?;
        let row: ResumeAnalysisRow = sqlx::query_as(
            r#"
            INSERT INTO resume_analyses (id, user_id, filename, analysis_data)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(filename)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;

        StoredAnalysis::from_row(row)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, StoreError> {
        let rows: Vec<ResumeAnalysisRow> = sqlx::query_as(
            "SELECT * FROM resume_analyses WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredAnalysis::from_row_or_empty).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredAnalysis>, StoreError> {
        let row: Option<ResumeAnalysisRow> =
            sqlx::query_as("SELECT * FROM resume_analyses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(StoredAnalysis::from_row).transpose()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryAnalysisStore
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryAnalysisStore {
    records: RwLock<Vec<StoredAnalysis>>,
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn insert(
        &self,
        user_id: Uuid,
        filename: &str,
        report: &AnalysisReport,
    ) -> Result<StoredAnalysis, StoreError> {
        let stored = StoredAnalysis {
            id: Uuid::new_v4(),
            user_id,
            filename: filename.to_string(),
            report: report.clone(),
            created_at: Utc::now(),
        };
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, StoreError> {
        let records = self.records.read().await;
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut matching: Vec<StoredAnalysis> = records
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredAnalysis>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}
