//! Diagnostic strings shown after every action.
//!
//! Both functions are pure so they can be tested without a transport.

use std::fmt;

use crate::error::ApiError;
use crate::http::{HttpResponse, NO_CONTENT};

/// The user-triggered actions of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ping,
    Load,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Leading word of the diagnostic written when the exchange fails.
    pub fn error_prefix(self) -> &'static str {
        match self {
            Action::Ping => "Fetch error",
            Action::Load => "Load error",
            Action::Create => "Create error",
            Action::Update => "Update error",
            Action::Delete => "Delete error",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Ping => "ping",
            Action::Load => "load",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// `HTTP <status>\n<body>`. A 204 always renders an empty body.
pub fn format_response(response: &HttpResponse) -> String {
    let body = if response.status == NO_CONTENT {
        ""
    } else {
        response.body.as_str()
    };
    format!("HTTP {}\n{body}", response.status)
}

/// `<Action> error: <detail>` for an exchange that did not complete.
pub fn format_failure(action: Action, err: &ApiError) -> String {
    format!("{}: {err}", action.error_prefix())
}
