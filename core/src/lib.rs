//! Client-side controller for a remote todo service.
//!
//! # Overview
//! `TodoController` owns an `AppState` (todo list, input buffer, diagnostic
//! text, base URL) and exposes the actions `ping`, `load_todos`,
//! `create_todo`, `toggle_todo`, `delete_todo` and `init`. Each action sends
//! one request through a `Transport`, formats the outcome into
//! `last_response`, and reloads the list after a successful mutation.
//!
//! # Design
//! - `TodoClient` builds requests as plain data; it has no I/O.
//! - `Transport` is the only async seam. `ReqwestTransport` is the default.
//! - Diagnostic formatting lives in pure functions in `format`.
//! - Errors never escape as panics: every failure ends up in `last_response`
//!   and in the `ApiError` returned by the action.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use controller::TodoController;
pub use error::{ApiError, ErrorKind, TransportError};
pub use format::{format_failure, format_response, Action};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::AppState;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
