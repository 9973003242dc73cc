//! Task repository - per-user CRUD over the flat task list.
//!
//! Every query except `create` is scoped by `user_id` as well as the row
//! id, so a task id belonging to someone else behaves exactly like a
//! missing row.

use crate::{DbError, Result as DbErrorResult};

use todo_core::Task;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a task and return it with the database-assigned id.
    pub async fn create(&self, mut task: Task) -> DbErrorResult<Task> {
        let user_id = task.user_id.to_string();
        let created_at = task.created_at.timestamp();
        let updated_at = task.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO tasks (user_id, title, description, is_complete, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.is_complete)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        task.id = result.last_insert_rowid();
        Ok(task)
    }

    /// All tasks owned by `user_id`, newest first. The id tiebreak keeps
    /// the order stable when several tasks share a creation second.
    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, user_id, title, description, is_complete, created_at, updated_at
                FROM tasks
                WHERE user_id = ?
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_task).collect()
    }

    pub async fn find_by_id_for_user(
        &self,
        id: i64,
        user_id: Uuid,
    ) -> DbErrorResult<Option<Task>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, user_id, title, description, is_complete, created_at, updated_at
                FROM tasks
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_task).transpose()
    }

    /// Persist changed fields of an already-loaded task. Returns false
    /// when the row no longer exists for that owner.
    pub async fn update(&self, task: &Task) -> DbErrorResult<bool> {
        let user_id = task.user_id.to_string();
        let updated_at = task.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, is_complete = ?, updated_at = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.is_complete)
        .bind(updated_at)
        .bind(task.id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a task owned by `user_id`. Returns false when no such row.
    pub async fn delete_for_user(&self, id: i64, user_id: Uuid) -> DbErrorResult<bool> {
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
                DELETE FROM tasks
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_task(row: &SqliteRow) -> DbErrorResult<Task> {
    let user_id: String = row.try_get("user_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Task {
        id: row.try_get("id")?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in tasks.user_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        is_complete: row.try_get("is_complete")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in tasks.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in tasks.updated_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
