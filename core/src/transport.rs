//! The seam between the I/O-free core and whoever owns the network.

use async_trait::async_trait;
use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// The round-trip could not be completed (connection refused, DNS, TLS, a
/// dropped worker). Non-2xx responses are not transport errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Executes one plain-data request and returns the plain-data response.
///
/// Implementations must not retry and must not add a timeout of their own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}
