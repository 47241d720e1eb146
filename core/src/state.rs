//! Observable state of the todo controller.

use serde::Serialize;

use crate::types::Todo;

/// Everything a rendering layer needs to draw the todo view.
///
/// Fields are only written by `TodoController`; hosts read them through the
/// accessors and may only edit the input buffer via
/// `TodoController::set_new_title`. Serializes to a camelCase snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub(crate) api_base: String,
    pub(crate) last_response: String,
    pub(crate) todos: Vec<Todo>,
    pub(crate) new_title: String,
}

impl AppState {
    /// Fresh state: no todos, empty input buffer, empty diagnostic.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Diagnostic of the most recently completed action.
    pub fn last_response(&self) -> &str {
        &self.last_response
    }

    /// Result of the last successful load, in server order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn new_title(&self) -> &str {
        &self.new_title
    }
}
