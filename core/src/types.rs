//! Domain DTOs for the todo API.
//!
//! # Design
//! The server owns every todo; these types are a read-through copy. The id
//! is opaque: backends hand out either integers or strings, so `TodoId`
//! keeps whichever form arrived and writes it back unchanged. Fields the
//! client does not use (such as `created_at`) are ignored on input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done,
        }
    }
}

/// Request payload for `POST /api/todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for `PUT /api/todos/{id}`. Both fields are always sent;
/// the server stores them as the item's new state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: String,
    pub done: bool,
}

impl UpdateTodo {
    /// The update that flips `done` and keeps the title as is.
    pub fn toggled(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            done: !todo.done,
        }
    }
}
