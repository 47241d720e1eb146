//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a normalized `base_url`. Each action gets a
//! `build_*` method that produces an `HttpRequest`; the list endpoint also
//! gets `parse_list_todos`, because it is the only response whose body is
//! read as data. Executing the request is someone else's job, which keeps
//! this module deterministic.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, NO_CONTENT};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

const TODOS_PATH: &str = "/api/todos";

/// Strip every trailing `/` from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn accept_json() -> (String, String) {
    ("accept".to_string(), "application/json".to_string())
}

fn content_type_json() -> (String, String) {
    ("content-type".to_string(), "application/json".to_string())
}

/// Synchronous, stateless request builder for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET of an arbitrary path under the base URL. `path` is appended as is.
    pub fn build_ping(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{TODOS_PATH}", self.base_url),
            headers: vec![accept_json()],
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{TODOS_PATH}", self.base_url),
            headers: vec![content_type_json(), accept_json()],
            body: Some(body),
        })
    }

    pub fn build_update_todo(
        &self,
        id: &TodoId,
        input: &UpdateTodo,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}{TODOS_PATH}/{id}", self.base_url),
            headers: vec![content_type_json()],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{TODOS_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Interpret a list response. A 204, or an empty success body, means no
    /// todos; a 204 body is never read.
    pub fn parse_list_todos(&self, response: &HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(response)?;
        if response.status == NO_CONTENT || response.body.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map a non-2xx response to `ApiError::HttpError`.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
