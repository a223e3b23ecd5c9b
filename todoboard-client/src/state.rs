/// Dashboard state management
///
/// The dashboard is a single reducer over a fixed state shape. `Action` is
/// a closed enum, so every dispatch is handled and an unknown action tag is
/// unrepresentable; the reducer is a pure function from state and action to
/// the next state. All network I/O happens outside the reducer (see
/// [`crate::api::ApiClient`]) and feeds back in as dispatched actions.
///
/// # Example
///
/// ```
/// use todoboard_client::{Action, Store};
///
/// let mut store = Store::new();
/// store.dispatch(Action::SetTitle("walk the dog".to_string()));
/// store.dispatch(Action::ToggleModal);
///
/// assert_eq!(store.state().title, "walk the dog");
/// assert!(store.state().show_modal);
/// ```
use todoboard_shared::models::{Assignment, TodoResource, TodoStatus, User};

/// Outcome of the most recent todo fetch.
///
/// The dashboard renders either the todo list or the raw status and body of
/// a failed response, so both live in one union instead of a separate
/// error channel.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedTodos {
    /// The server answered with a todo list
    Loaded(Vec<TodoResource>),

    /// The server answered with a non-success status; status 0 marks a
    /// request that never reached the server
    Failed { status: u16, message: String },
}

impl Default for FetchedTodos {
    fn default() -> Self {
        FetchedTodos::Loaded(Vec::new())
    }
}

/// The complete dashboard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Human-readable tag of the last request, e.g. "GET at /"
    pub last_request: String,

    /// Form field: todo id as entered
    pub id: String,

    /// Form field: todo title as entered
    pub title: String,

    /// Form field: order as entered; kept as raw text until submission
    pub order: String,

    /// Form field: selected board column
    pub status: TodoStatus,

    /// Result of the last todo fetch
    pub response: FetchedTodos,

    /// Name of the signed-in user, when there is one
    pub user: Option<String>,

    /// All registered users
    pub users: Vec<User>,

    /// Assignments of the todo currently being inspected
    pub assigned_users: Vec<Assignment>,

    /// Create-todo modal visibility
    pub show_modal: bool,

    /// Delete-confirmation modal visibility
    pub show_delete_modal: bool,

    /// Edit modal visibility
    pub show_edit_modal: bool,

    /// Todo loaded into the edit modal
    pub todo_to_edit: Option<TodoResource>,

    /// Todo staged for deletion
    pub todo_to_delete: Option<TodoResource>,
}

/// Every action the dashboard can dispatch
#[derive(Debug, Clone)]
pub enum Action {
    SetLastRequest(String),
    SetId(String),
    SetTitle(String),
    SetOrder(String),
    SetStatus(TodoStatus),
    SetResponse(FetchedTodos),
    SetUser(Option<String>),
    SetUsers(Vec<User>),
    SetAssignedUsers(Vec<Assignment>),
    SetShowModal(bool),
    SetShowDeleteModal(bool),
    SetShowEditModal(bool),
    SetTodoToEdit(Option<TodoResource>),
    SetTodoToDelete(Option<TodoResource>),

    /// Flips the create-todo modal
    ToggleModal,

    /// Flips the delete-confirmation modal
    ToggleDeleteModal,

    /// Flips the edit modal and loads the given todo into it
    ToggleEditModal(Option<TodoResource>),

    /// Clears the create form back to its initial values
    ResetForm,
}

impl DashboardState {
    /// Applies an action and returns the next state.
    #[must_use]
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::SetLastRequest(last_request) => self.last_request = last_request,
            Action::SetId(id) => self.id = id,
            Action::SetTitle(title) => self.title = title,
            Action::SetOrder(order) => self.order = order,
            Action::SetStatus(status) => self.status = status,
            Action::SetResponse(response) => self.response = response,
            Action::SetUser(user) => self.user = user,
            Action::SetUsers(users) => self.users = users,
            Action::SetAssignedUsers(assigned_users) => self.assigned_users = assigned_users,
            Action::SetShowModal(show) => self.show_modal = show,
            Action::SetShowDeleteModal(show) => self.show_delete_modal = show,
            Action::SetShowEditModal(show) => self.show_edit_modal = show,
            Action::SetTodoToEdit(todo) => self.todo_to_edit = todo,
            Action::SetTodoToDelete(todo) => self.todo_to_delete = todo,
            Action::ToggleModal => self.show_modal = !self.show_modal,
            Action::ToggleDeleteModal => self.show_delete_modal = !self.show_delete_modal,
            Action::ToggleEditModal(todo) => {
                self.show_edit_modal = !self.show_edit_modal;
                self.todo_to_edit = todo;
            }
            Action::ResetForm => {
                self.title.clear();
                self.order.clear();
                self.status = TodoStatus::Todo;
            }
        }
        self
    }
}

/// Owns the dashboard state and serializes updates through `dispatch`.
#[derive(Debug, Default)]
pub struct Store {
    state: DashboardState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Applies an action to the current state.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(title: &str, id: i32) -> TodoResource {
        TodoResource {
            title: Some(title.to_string()),
            order: Some(1),
            status: TodoStatus::Todo,
            url: format!("http://localhost:5000/{}", id),
        }
    }

    #[test]
    fn test_default_state() {
        let state = DashboardState::default();
        assert_eq!(state.last_request, "");
        assert_eq!(state.title, "");
        assert_eq!(state.order, "");
        assert_eq!(state.status, TodoStatus::Todo);
        assert_eq!(state.response, FetchedTodos::Loaded(vec![]));
        assert!(state.user.is_none());
        assert!(!state.show_modal);
        assert!(!state.show_delete_modal);
        assert!(!state.show_edit_modal);
    }

    #[test]
    fn test_set_form_fields() {
        let state = DashboardState::default()
            .reduce(Action::SetTitle("walk the dog".to_string()))
            .reduce(Action::SetOrder("5".to_string()))
            .reduce(Action::SetStatus(TodoStatus::Doing));

        assert_eq!(state.title, "walk the dog");
        assert_eq!(state.order, "5");
        assert_eq!(state.status, TodoStatus::Doing);
    }

    #[test]
    fn test_set_response_loaded() {
        let todos = vec![resource("walk the dog", 1), resource("water plants", 2)];
        let state = DashboardState::default()
            .reduce(Action::SetResponse(FetchedTodos::Loaded(todos.clone())));

        assert_eq!(state.response, FetchedTodos::Loaded(todos));
    }

    #[test]
    fn test_set_response_failed_keeps_status_and_body() {
        let state = DashboardState::default().reduce(Action::SetResponse(FetchedTodos::Failed {
            status: 500,
            message: "Oops! Could not fetch all todos.".to_string(),
        }));

        match state.response {
            FetchedTodos::Failed { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Oops! Could not fetch all todos.");
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_modal_flips_back_and_forth() {
        let state = DashboardState::default().reduce(Action::ToggleModal);
        assert!(state.show_modal);

        let state = state.reduce(Action::ToggleModal);
        assert!(!state.show_modal);
    }

    #[test]
    fn test_toggle_edit_modal_carries_the_todo() {
        let todo = resource("water plants", 7);
        let state = DashboardState::default()
            .reduce(Action::ToggleEditModal(Some(todo.clone())));

        assert!(state.show_edit_modal);
        assert_eq!(state.todo_to_edit, Some(todo));

        let state = state.reduce(Action::ToggleEditModal(None));
        assert!(!state.show_edit_modal);
        assert!(state.todo_to_edit.is_none());
    }

    #[test]
    fn test_toggle_delete_modal_with_staged_todo() {
        let todo = resource("old chore", 3);
        let state = DashboardState::default()
            .reduce(Action::SetTodoToDelete(Some(todo.clone())))
            .reduce(Action::ToggleDeleteModal);

        assert!(state.show_delete_modal);
        assert_eq!(state.todo_to_delete, Some(todo));
    }

    #[test]
    fn test_reset_form_clears_only_form_fields() {
        let todos = vec![resource("keep me", 1)];
        let state = DashboardState::default()
            .reduce(Action::SetTitle("draft".to_string()))
            .reduce(Action::SetOrder("9".to_string()))
            .reduce(Action::SetStatus(TodoStatus::Done))
            .reduce(Action::SetResponse(FetchedTodos::Loaded(todos.clone())))
            .reduce(Action::ResetForm);

        assert_eq!(state.title, "");
        assert_eq!(state.order, "");
        assert_eq!(state.status, TodoStatus::Todo);
        assert_eq!(state.response, FetchedTodos::Loaded(todos));
    }

    #[test]
    fn test_set_user_and_users() {
        let state = DashboardState::default()
            .reduce(Action::SetUser(Some("Geraldine".to_string())));
        assert_eq!(state.user.as_deref(), Some("Geraldine"));

        let state = state.reduce(Action::SetUser(None));
        assert!(state.user.is_none());
    }

    #[test]
    fn test_reduce_is_pure_over_unrelated_fields() {
        let before = DashboardState::default()
            .reduce(Action::SetTitle("stable".to_string()))
            .reduce(Action::SetLastRequest("GET at /".to_string()));

        let after = before.clone().reduce(Action::SetOrder("3".to_string()));
        assert_eq!(after.title, before.title);
        assert_eq!(after.last_request, before.last_request);
        assert_eq!(after.order, "3");
    }

    #[test]
    fn test_store_dispatch_applies_in_order() {
        let mut store = Store::new();
        store.dispatch(Action::SetLastRequest("GET at /".to_string()));
        store.dispatch(Action::SetTitle("first".to_string()));
        store.dispatch(Action::SetTitle("second".to_string()));

        assert_eq!(store.state().last_request, "GET at /");
        assert_eq!(store.state().title, "second");
    }
}
