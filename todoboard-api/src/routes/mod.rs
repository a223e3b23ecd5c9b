/// HTTP route handlers
///
/// - `todos`: Todo CRUD at the root path
/// - `users`: User listing and provider-backed registration
/// - `assignments`: Todo/user assignment endpoints

pub mod assignments;
pub mod todos;
pub mod users;
