//! Result persistence — one JSONB document per assessment, keyed by id.
//!
//! The store is a plain insert-and-fetch collaborator: no updates, no
//! retries, no ordering guarantees beyond read-your-writes on the pool.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::models::assessment::AssessmentResult;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored document is not a valid assessment result: {0}")]
    Codec(#[from] serde_json::Error),
}

/// The storage boundary consumed by the handlers.
///
/// Held in `AppState` as `Arc<dyn ResultStore>` so tests can swap in an
/// in-memory backend.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put(&self, result: &AssessmentResult) -> Result<(), StoreError>;
    async fn get(&self, id: &str) -> Result<Option<AssessmentResult>, StoreError>;
}

/// PostgreSQL-backed document store. Each result is serialized whole into a
/// `doc` JSONB column; the table name comes from configuration and is
/// validated as a bare identifier at startup.
pub struct PgResultStore {
    pool: PgPool,
    table: String,
}

impl PgResultStore {
    pub async fn connect(database_url: &str, table: impl Into<String>) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self {
            pool,
            table: table.into(),
        })
    }

    /// Creates the results table when absent. Idempotent.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
            self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn put(&self, result: &AssessmentResult) -> Result<(), StoreError> {
        let doc = serde_json::to_value(result)?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", self.table);
        sqlx::query(&sql)
            .bind(result.id.to_string())
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<AssessmentResult>, StoreError> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", self.table);
        let doc: Option<serde_json::Value> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        doc.map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }
}
