/// Database models for Todoboard
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `todo`: To-do items with a three-state status column
/// - `user`: Users registered through the identity provider
/// - `assignment`: Todo/user assignment rows (`todos_assignees` table)
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::models::todo::{Todo, CreateTodo};
/// use todoboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let todo = Todo::create(&pool, CreateTodo {
///     title: Some("water the plants".to_string()),
///     order: Some(1),
/// }).await?;
///
/// println!("Created todo {}", todo.id);
/// # Ok(())
/// # }
/// ```

pub mod assignment;
pub mod todo;
pub mod user;

// Re-export common types for convenience
pub use assignment::{Assignment, CreateAssignment};
pub use todo::{CreateTodo, Todo, TodoResource, TodoStatus, UpdateTodo};
pub use user::{CreateUser, User};
