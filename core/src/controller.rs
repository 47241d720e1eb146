//! Keeps an `AppState` in sync with the remote todo service.
//!
//! # Design
//! Each action runs one exchange through the `Transport`, writes the
//! diagnostic into `last_response`, and only then decides whether `todos`
//! changes. Mutations never patch `todos` locally: a successful create,
//! update or delete is followed by a full reload, awaited before the action
//! returns. Actions take `&mut self`, so exchanges belonging to one
//! controller never overlap.
//!
//! Every action returns a `Result` for the caller to inspect, but the state
//! is already consistent by the time it does; ignoring the result is fine.

use tracing::{debug, warn};

use crate::client::{check_status, TodoClient};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::format::{format_failure, format_response, Action};
use crate::http::{HttpRequest, HttpResponse};
use crate::state::AppState;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Owns the state and the transport; the only writer of `AppState`.
pub struct TodoController<T> {
    client: TodoClient,
    transport: T,
    state: AppState,
}

impl<T: Transport> TodoController<T> {
    pub fn new(api_base: &str, transport: T) -> Self {
        let client = TodoClient::new(api_base);
        let state = AppState::new(client.base_url());
        Self {
            client,
            transport,
            state,
        }
    }

    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self::new(config.api_base(), transport)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replace the input buffer read by `create_todo`.
    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.state.new_title = title.into();
    }

    /// Startup hook: one load.
    pub async fn init(&mut self) -> Result<usize, ApiError> {
        self.load_todos().await
    }

    /// GET `api_base + path` and show whatever comes back.
    pub async fn ping(&mut self, path: &str) -> Result<u16, ApiError> {
        let request = self.client.build_ping(path);
        let response = self.exchange(Action::Ping, request).await?;
        check_status(&response)?;
        Ok(response.status)
    }

    /// Fetch the list and replace `todos` on success. Returns the item count.
    pub async fn load_todos(&mut self) -> Result<usize, ApiError> {
        let request = self.client.build_list_todos();
        let response = self.exchange(Action::Load, request).await?;
        match self.client.parse_list_todos(&response) {
            Ok(todos) => {
                let count = todos.len();
                self.state.todos = todos;
                Ok(count)
            }
            Err(err @ ApiError::HttpError { .. }) => Err(err),
            Err(err) => Err(self.fail(Action::Load, err)),
        }
    }

    /// Create a todo from the trimmed input buffer.
    ///
    /// Returns `Ok(None)` without touching anything when the trimmed title
    /// is empty, otherwise the status of the POST.
    pub async fn create_todo(&mut self) -> Result<Option<u16>, ApiError> {
        let title = self.state.new_title.trim().to_string();
        if title.is_empty() {
            debug!("create skipped: empty title");
            return Ok(None);
        }

        let request = match self.client.build_create_todo(&CreateTodo { title }) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(Action::Create, err)),
        };
        let response = self.exchange(Action::Create, request).await?;
        check_status(&response)?;

        self.state.new_title.clear();
        self.reload_after(Action::Create).await;
        Ok(Some(response.status))
    }

    /// Send `item` back with `done` inverted.
    pub async fn toggle_todo(&mut self, item: &Todo) -> Result<u16, ApiError> {
        let request = match self
            .client
            .build_update_todo(&item.id, &UpdateTodo::toggled(item))
        {
            Ok(request) => request,
            Err(err) => return Err(self.fail(Action::Update, err)),
        };
        let response = self.exchange(Action::Update, request).await?;
        check_status(&response)?;

        self.reload_after(Action::Update).await;
        Ok(response.status)
    }

    pub async fn delete_todo(&mut self, item: &Todo) -> Result<u16, ApiError> {
        let request = self.client.build_delete_todo(&item.id);
        let response = self.exchange(Action::Delete, request).await?;
        check_status(&response)?;

        self.reload_after(Action::Delete).await;
        Ok(response.status)
    }

    /// Run one exchange and record its diagnostic, whatever the outcome.
    async fn exchange(
        &mut self,
        action: Action,
        request: HttpRequest,
    ) -> Result<HttpResponse, ApiError> {
        debug!(%action, method = %request.method, url = %request.url, "sending request");
        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(%action, status = response.status, "exchange completed");
                self.state.last_response = format_response(&response);
                Ok(response)
            }
            Err(err) => Err(self.fail(action, err.into())),
        }
    }

    fn fail(&mut self, action: Action, err: ApiError) -> ApiError {
        warn!(%action, error = %err, "action failed");
        self.state.last_response = format_failure(action, &err);
        err
    }

    /// Resynchronize `todos` after a successful mutation.
    ///
    /// When the reload succeeds, `last_response` goes back to the mutation's
    /// own diagnostic. A failed reload leaves its diagnostic visible.
    async fn reload_after(&mut self, action: Action) {
        let diagnostic = self.state.last_response.clone();
        match self.load_todos().await {
            Ok(count) => {
                debug!(%action, count, "reloaded todos");
                self.state.last_response = diagnostic;
            }
            Err(err) => warn!(%action, error = %err, "reload after mutation failed"),
        }
    }
}
