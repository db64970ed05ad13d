use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::core::error::{AppError, Result};
use crate::features::items::models::{Item, ItemChanges, NewItem};

pub const DUPLICATE_NAME_MESSAGE: &str = "item with that name already exists";

/// Persistence for items.
///
/// Implementations enforce name uniqueness at the storage layer and report a
/// violation as `AppError::Conflict` after discarding the pending write.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(&self, item: NewItem) -> Result<Item>;
    async fn list(&self) -> Result<Vec<Item>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>>;
    /// `Ok(None)` when no row has this id
    async fn update(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>>;
    /// `Ok(false)` when no row has this id
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Convert database error to a more specific AppError
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(DUPLICATE_NAME_MESSAGE.to_string());
        }
    }

    AppError::Database(e)
}

/// Roll back explicitly so the connection goes back to the pool clean
async fn rollback_on_error<T>(
    tx: Transaction<'_, Sqlite>,
    result: std::result::Result<T, sqlx::Error>,
) -> Result<(T, Transaction<'_, Sqlite>)> {
    match result {
        Ok(value) => Ok((value, tx)),
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Failed to roll back transaction: {:?}", rollback_err);
            }
            Err(handle_db_error(e))
        }
    }
}

pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn insert(&self, item: NewItem) -> Result<Item> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .fetch_one(&mut *tx)
        .await;

        let (created, tx) = rollback_on_error(tx, result).await?;
        tx.commit().await.map_err(handle_db_error)?;

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get item by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(item)
    }

    async fn update(&self, id: i64, changes: ItemChanges) -> Result<Option<Item>> {
        // One statement, so SQLite takes the write lock up front and concurrent
        // writers wait on the busy timeout instead of failing a lock upgrade.
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = COALESCE(?, name),
                description = COALESCE(?, description)
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete item: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
