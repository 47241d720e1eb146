//! The I/O seam between the controller and the network.
//!
//! # Design
//! The controller only knows the `Transport` trait. `ReqwestTransport` is the
//! production implementation; tests substitute scripted transports. A
//! transport reports an exchange that completed with any status as `Ok`, and
//! reserves `Err` for exchanges that never completed.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, NO_CONTENT};

/// Executes one HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the status plus the body read as text.
    ///
    /// Implementations must not read the body of a 204 response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// `Transport` backed by an async `reqwest::Client`.
///
/// The default client has no request timeout; a hung server hangs the action.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn send_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(send_error)?;
        let status = response.status().as_u16();
        let body = if status == NO_CONTENT {
            String::new()
        } else {
            response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?
        };

        Ok(HttpResponse { status, body })
    }
}
