/// Assignment model and database operations
///
/// This module provides the Assignment model for the todos_assignees join
/// table, linking todos to the users responsible for them.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos_assignees (
///     id SERIAL PRIMARY KEY,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     todo_id INTEGER NOT NULL REFERENCES todos(id) ON DELETE CASCADE,
///     assigned_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// There is no uniqueness constraint on (user_id, todo_id): assigning the
/// same user twice produces two rows, and unassigning removes them all.
/// Deleting either endpoint cascades into this table.
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::models::assignment::{Assignment, CreateAssignment};
/// use todoboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let assignment = Assignment::create(&pool, CreateAssignment {
///     user_id: 1,
///     todo_id: 2,
/// }).await?;
///
/// println!("User {} now owns todo {}", assignment.user_id, assignment.todo_id);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Assignment model linking a user to a todo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assignment {
    /// Unique assignment ID (serial)
    pub id: i32,

    /// Assigned user
    pub user_id: i32,

    /// Assigned todo
    pub todo_id: i32,

    /// When the assignment was made
    pub assigned_at: DateTime<Utc>,
}

/// Input for creating a new assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    /// User to assign
    pub user_id: i32,

    /// Todo being assigned
    pub todo_id: i32,
}

impl Assignment {
    /// Creates a new assignment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The referenced todo or user doesn't exist (foreign key violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateAssignment) -> Result<Self, sqlx::Error> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO todos_assignees (user_id, todo_id)
            VALUES ($1, $2)
            RETURNING id, user_id, todo_id, assigned_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.todo_id)
        .fetch_one(pool)
        .await?;

        Ok(assignment)
    }

    /// Deletes the assignment(s) for a user/todo pair
    ///
    /// Removes every matching row (duplicates included) and returns one of
    /// the removed rows, or None if nothing matched.
    pub async fn delete(
        pool: &PgPool,
        user_id: i32,
        todo_id: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            DELETE FROM todos_assignees
            WHERE user_id = $1 AND todo_id = $2
            RETURNING id, user_id, todo_id, assigned_at
            "#,
        )
        .bind(user_id)
        .bind(todo_id)
        .fetch_optional(pool)
        .await?;

        Ok(assignment)
    }

    /// Lists all assignments for a todo ordered by id
    pub async fn list_for_todo(pool: &PgPool, todo_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, user_id, todo_id, assigned_at
            FROM todos_assignees
            WHERE todo_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(todo_id)
        .fetch_all(pool)
        .await?;

        Ok(assignments)
    }

    /// Counts assignments for a todo
    pub async fn count_for_todo(pool: &PgPool, todo_id: i32) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM todos_assignees WHERE todo_id = $1")
                .bind(todo_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assignment_struct() {
        let create = CreateAssignment {
            user_id: 3,
            todo_id: 9,
        };

        assert_eq!(create.user_id, 3);
        assert_eq!(create.todo_id, 9);
    }

    #[test]
    fn test_assignment_serialization_shape() {
        let assignment = Assignment {
            id: 1,
            user_id: 3,
            todo_id: 9,
            assigned_at: Utc::now(),
        };

        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["user_id"], 3);
        assert_eq!(json["todo_id"], 9);
        assert!(json.get("assigned_at").is_some());
    }

    // Integration tests for database operations are in todoboard-api/tests/
}
