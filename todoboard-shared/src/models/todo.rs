/// Todo model and database operations
///
/// This module provides the Todo model, the core entity of the board, along
/// with the `TodoResource` wire projection returned by the API.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id SERIAL PRIMARY KEY,
///     title TEXT,
///     "order" INTEGER,
///     status INTEGER NOT NULL DEFAULT 0
/// );
/// ```
///
/// The `status` column holds a closed three-state value: 0 = todo,
/// 1 = doing, 2 = done. New rows always start at 0 regardless of what a
/// client sends on create.
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::models::todo::{Todo, CreateTodo, UpdateTodo, TodoStatus};
/// use todoboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let todo = Todo::create(&pool, CreateTodo {
///     title: Some("walk the dog".to_string()),
///     order: Some(1),
/// }).await?;
///
/// // Move it to "doing"
/// Todo::update(&pool, todo.id, UpdateTodo {
///     status: Some(TodoStatus::Doing),
///     ..Default::default()
/// }).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;

/// Todo progress status
///
/// Stored as a plain integer column and serialized as the bare integer on
/// the wire. Values outside 0..=2 are rejected during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum TodoStatus {
    /// Not started yet
    Todo = 0,

    /// In progress
    Doing = 1,

    /// Finished
    Done = 2,
}

impl TodoStatus {
    /// Converts status to its wire/database integer
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Converts status to a label for display and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::Doing => "doing",
            TodoStatus::Done => "done",
        }
    }
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Todo
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TodoStatus> for i32 {
    fn from(status: TodoStatus) -> i32 {
        status.as_i32()
    }
}

impl TryFrom<i32> for TodoStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TodoStatus::Todo),
            1 => Ok(TodoStatus::Doing),
            2 => Ok(TodoStatus::Done),
            other => Err(format!("invalid todo status: {}", other)),
        }
    }
}

/// Todo model representing a row in the todos table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID (serial)
    pub id: i32,

    /// Display text (nullable; the store accepts title-less rows)
    pub title: Option<String>,

    /// Client-managed sort position
    pub order: Option<i32>,

    /// Progress status (0 = todo, 1 = doing, 2 = done)
    pub status: TodoStatus,
}

/// Wire projection of a todo
///
/// This is what every todo endpoint returns. There is no `id` field; the
/// canonical handle is `url`, assembled per request from the request's
/// scheme and host. The URL is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoResource {
    /// Display text
    pub title: Option<String>,

    /// Client-managed sort position
    pub order: Option<i32>,

    /// Progress status
    pub status: TodoStatus,

    /// Canonical URL of this todo ("{scheme}://{host}/{id}")
    pub url: String,
}

impl TodoResource {
    /// Recovers the numeric id from the trailing path segment of `url`
    ///
    /// Returns None if the URL does not end in a numeric segment.
    pub fn resource_id(&self) -> Option<i32> {
        self.url.rsplit('/').next()?.parse().ok()
    }
}

/// Input for creating a new todo
///
/// Status is intentionally absent: new rows always start at status 0 and
/// any status a client supplies on create is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Display text
    pub title: Option<String>,

    /// Sort position
    pub order: Option<i32>,
}

/// Input for partially updating a todo
///
/// All fields are optional. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New display text
    pub title: Option<String>,

    /// New sort position
    pub order: Option<i32>,

    /// New progress status
    pub status: Option<TodoStatus>,
}

impl Todo {
    /// Lists all todos ordered by id
    pub async fn all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, "order", status
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Finds a todo by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, "order", status
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Creates a new todo
    ///
    /// The status column takes its default (0 = todo); callers cannot set it
    /// here. Use [`Todo::update`] to move a todo through the board.
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `data` - Todo creation data
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use todoboard_shared::models::todo::{Todo, CreateTodo};
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
    /// let todo = Todo::create(&pool, CreateTodo {
    ///     title: Some("buy milk".to_string()),
    ///     order: None,
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, "order")
            VALUES ($1, $2)
            RETURNING id, title, "order", status
            "#,
        )
        .bind(data.title)
        .bind(data.order)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Partially updates a todo
    ///
    /// Only non-None fields in `data` are written. A patch with no fields at
    /// all is an error: there is nothing to SET.
    ///
    /// # Returns
    ///
    /// The updated todo if found, None if the row doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if `data` has no fields set or the database
    /// operation fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTodo,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut sets: Vec<String> = Vec::new();
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            sets.push(format!("title = ${}", bind_count));
        }
        if data.order.is_some() {
            bind_count += 1;
            sets.push(format!("\"order\" = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            sets.push(format!("status = ${}", bind_count));
        }

        if sets.is_empty() {
            return Err(sqlx::Error::Protocol("no fields to update".into()));
        }

        let query = format!(
            "UPDATE todos SET {} WHERE id = $1 RETURNING id, title, \"order\", status",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Todo>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(order) = data.order {
            q = q.bind(order);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }

        let todo = q.fetch_optional(pool).await?;

        Ok(todo)
    }

    /// Deletes a todo by ID
    ///
    /// Assignments referencing the todo are removed by the ON DELETE CASCADE
    /// on todos_assignees.
    ///
    /// # Returns
    ///
    /// The removed todo if found, None if the row didn't exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            WHERE id = $1
            RETURNING id, title, "order", status
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Deletes every todo and returns the removed rows
    pub async fn clear(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            RETURNING id, title, "order", status
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Projects this todo into its wire form
    ///
    /// `base_url` is "{scheme}://{host}" for the request being served, with
    /// no trailing slash.
    pub fn into_resource(self, base_url: &str) -> TodoResource {
        TodoResource {
            title: self.title,
            order: self.order,
            status: self.status,
            url: format!("{}/{}", base_url, self.id),
        }
    }
}
