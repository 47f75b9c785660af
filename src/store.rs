use anyhow::{Context, Result};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

use crate::config::Config;
use crate::models::CatFactUpdate;

/// A stored cat fact as it exists in the `catfact` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CatFact {
    pub id: String,
    pub description: String,
}

/// Shareable SQLite-backed store for use across async handlers
///
/// Every operation checks a connection out of the pool for its own duration
/// only. Writes run inside a transaction that is committed before the call
/// returns; any early return drops the transaction, which rolls it back and
/// hands the connection back to the pool.
#[derive(Clone)]
pub struct CatFactStore {
    pool: SqlitePool,
}

impl CatFactStore {
    /// Open the store described by the configuration
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::open(&config.database_path).await
    }

    /// Open (creating if missing) the SQLite file at `path` and make sure the
    /// schema exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open SQLite database at {}", path.display()))?;

        tracing::info!("Opened SQLite database: {}", path.display());

        Self::with_pool(pool).await
    }

    /// Private in-memory database, one per call. The pool is pinned to a
    /// single connection that never expires, since each SQLite in-memory
    /// connection is its own database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::with_pool(pool).await
    }

    /// Close every pooled connection; later operations fail
    #[cfg(test)]
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Insert a new cat fact with a freshly generated id
    ///
    /// # Errors
    /// Returns an error if the insert or its commit fails
    pub async fn create(&self, description: String) -> Result<CatFact> {
        let fact = CatFact {
            id: Uuid::new_v4().to_string(),
            description,
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin insert transaction")?;

        sqlx::query("INSERT INTO catfact (id, description) VALUES (?, ?)")
            .bind(&fact.id)
            .bind(&fact.description)
            .execute(&mut *tx)
            .await
            .context("Failed to insert cat fact")?;

        tx.commit().await.context("Failed to commit cat fact insert")?;

        tracing::debug!("Inserted cat fact with id: {}", fact.id);
        Ok(fact)
    }

    /// All cat facts in the order they were created
    pub async fn list(&self) -> Result<Vec<CatFact>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let facts = sqlx::query_as::<_, CatFact>(
            "SELECT id, description FROM catfact ORDER BY rowid ASC",
        )
        .fetch_all(&mut *conn)
        .await
        .context("Failed to list cat facts")?;

        tracing::debug!("Listed {} cat facts", facts.len());
        Ok(facts)
    }

    /// Read a cat fact by id
    ///
    /// # Returns
    /// * `Ok(Some(fact))` - Row found
    /// * `Ok(None)` - No row with that id
    /// * `Err(_)` - The query failed
    pub async fn get(&self, id: &str) -> Result<Option<CatFact>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let fact = sqlx::query_as::<_, CatFact>(
            "SELECT id, description FROM catfact WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("Failed to read cat fact")?;

        Ok(fact)
    }

    /// Apply the fields present in `changes` to an existing cat fact
    ///
    /// Fields left as `None` keep their stored value. Returns `Ok(None)`
    /// without writing anything when no row has the given id.
    ///
    /// Read and write stay one statement: the transaction must take the
    /// write lock before it reads, or a concurrent commit makes it `BUSY`.
    pub async fn update(&self, id: &str, changes: CatFactUpdate) -> Result<Option<CatFact>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin update transaction")?;

        let updated = sqlx::query_as::<_, CatFact>(
            "UPDATE catfact SET description = COALESCE(?, description) WHERE id = ? \
             RETURNING id, description",
        )
        .bind(changes.description)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to update cat fact")?;

        let Some(fact) = updated else {
            return Ok(None);
        };

        tx.commit().await.context("Failed to commit cat fact update")?;

        tracing::debug!("Updated cat fact with id: {}", fact.id);
        Ok(Some(fact))
    }

    /// Permanently remove a cat fact. Returns `false` if no row had that id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin delete transaction")?;

        let result = sqlx::query("DELETE FROM catfact WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete cat fact")?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await.context("Failed to commit cat fact delete")?;

        tracing::debug!("Deleted cat fact with id: {}", id);
        Ok(true)
    }

    /// Perform a health check by executing `SELECT 1`
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Failed to execute health check query")?;

        tracing::debug!("Health check query succeeded");
        Ok(())
    }
}

/// Create the `catfact` table and its description index if they are missing
async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS catfact (
    id TEXT NOT NULL PRIMARY KEY,
    description TEXT NOT NULL
)
"#,
    )
    .execute(pool)
    .await
    .context("Failed to create table 'catfact'")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_catfact_description ON catfact (description)")
        .execute(pool)
        .await
        .context("Failed to create index 'ix_catfact_description'")?;

    tracing::info!("Table 'catfact' is ready");
    Ok(())
}
