/// HTTP client for the Todoboard API
///
/// Wraps the server's wire contract behind typed methods. Fetches feed
/// their results straight into the [`Store`](crate::state::Store) as
/// dispatched actions; mutations return the decoded response so the caller
/// can refresh afterwards. Assignment endpoints respond `201` on success,
/// and the client treats any other status as a failure.
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use todoboard_shared::models::{Assignment, CreateTodo, TodoResource, UpdateTodo, User};

use crate::state::{Action, FetchedTodos, Store};

/// Result alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },
}

/// JSON error body used by registration and assignment endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    #[serde(rename = "allUsers")]
    all_users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct AssigneesEnvelope {
    users: Vec<Assignment>,
}

#[derive(Debug, Deserialize)]
struct AssignEnvelope {
    assignee: Assignment,
}

#[derive(Debug, Deserialize)]
struct UnassignEnvelope {
    result: Option<Assignment>,
}

/// Typed client for one Todoboard server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`. A trailing slash on
    /// the base URL is accepted and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http: Client::builder().build()?,
            base_url,
        })
    }

    /// Fetches the todo list and records both the request tag and its
    /// outcome in the store. Failures land in the state as
    /// [`FetchedTodos::Failed`] rather than being returned.
    pub async fn fetch_todos(&self, store: &mut Store) {
        store.dispatch(Action::SetLastRequest("GET at /".to_string()));

        let fetched = match self.list_todos().await {
            Ok(todos) => FetchedTodos::Loaded(todos),
            Err(ClientError::Api { status, message }) => FetchedTodos::Failed { status, message },
            // status 0 marks a request that never produced a response
            Err(error) => FetchedTodos::Failed {
                status: 0,
                message: error.to_string(),
            },
        };

        store.dispatch(Action::SetResponse(fetched));
    }

    /// Fetches all users into the store; on failure the current list is
    /// left untouched.
    pub async fn fetch_users(&self, store: &mut Store) {
        match self.list_users().await {
            Ok(users) => store.dispatch(Action::SetUsers(users)),
            Err(error) => tracing::warn!("Could not fetch users: {}", error),
        }
    }

    /// Fetches the assignments of a todo into the store; on failure the
    /// current list is left untouched.
    pub async fn fetch_assignees(&self, store: &mut Store, todo_id: i32) {
        match self.list_assignees(todo_id).await {
            Ok(assignees) => store.dispatch(Action::SetAssignedUsers(assignees)),
            Err(error) => tracing::warn!("Could not fetch assignees: {}", error),
        }
    }

    /// Creates a todo and returns its resource representation.
    pub async fn create_todo(&self, todo: CreateTodo) -> ClientResult<TodoResource> {
        let response = self.http.post(self.url("/")).json(&todo).send().await?;
        Self::parse(response).await
    }

    /// Applies a partial update to a todo.
    pub async fn update_todo(&self, id: i32, patch: UpdateTodo) -> ClientResult<TodoResource> {
        let response = self
            .http
            .patch(self.url(&format!("/{}", id)))
            .json(&patch)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Deletes a todo and returns the removed resource.
    pub async fn delete_todo(&self, id: i32) -> ClientResult<TodoResource> {
        let response = self
            .http
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Assigns a todo to a user.
    pub async fn assign_user(&self, user_id: i32, todo_id: i32) -> ClientResult<Assignment> {
        let response = self
            .http
            .post(self.url("/assign-todo"))
            .json(&serde_json::json!({"userId": user_id, "todoId": todo_id}))
            .send()
            .await?;
        let envelope: AssignEnvelope = Self::parse_created(response).await?;
        Ok(envelope.assignee)
    }

    /// Removes an assignment. Returns the removed row, or `None` when no
    /// assignment matched.
    pub async fn unassign_user(
        &self,
        user_id: i32,
        todo_id: i32,
    ) -> ClientResult<Option<Assignment>> {
        let response = self
            .http
            .delete(self.url(&format!("/delete-assign/{}/{}", user_id, todo_id)))
            .send()
            .await?;
        let envelope: UnassignEnvelope = Self::parse_created(response).await?;
        Ok(envelope.result)
    }

    async fn list_todos(&self) -> ClientResult<Vec<TodoResource>> {
        let response = self.http.get(self.url("/")).send().await?;
        Self::parse(response).await
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        let response = self.http.get(self.url("/users")).send().await?;
        let envelope: UsersEnvelope = Self::parse(response).await?;
        Ok(envelope.all_users)
    }

    async fn list_assignees(&self, todo_id: i32) -> ClientResult<Vec<Assignment>> {
        let response = self
            .http
            .get(self.url(&format!("/todos/{}/assignees", todo_id)))
            .send()
            .await?;
        let envelope: AssigneesEnvelope = Self::parse(response).await?;
        Ok(envelope.users)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decodes a response, mapping any non-success status to an error.
    async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    /// Decodes a response from an endpoint that only ever succeeds
    /// with `201`.
    async fn parse_created<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

/// Builds an API error, pulling the message out of a JSON
/// `{"error": "..."}` body when the server sent one.
fn api_error(status: u16, body: String) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.error)
        .unwrap_or(body);

    ClientError::Api { status, message }
}
