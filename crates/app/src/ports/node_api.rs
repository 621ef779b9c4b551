//! Node API port: the backend's three JSON endpoints.
//!
//! Implementations resolve paths themselves (for instance under an ingress
//! prefix) and only deal with transport: decoding the node list is done by
//! the console so non-array payloads are handled in one place.

use std::future::Future;

use nodeconsole_domain::command::{ActionRequest, SetNumberRequest};

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, …).
    #[error("request failed: {message}")]
    Transport { message: String },
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body could not be read as JSON.
    #[error("invalid response: {message}")]
    Decode { message: String },
}

/// Client for the node backend.
pub trait NodeApi {
    /// `GET api/nodes` - raw JSON payload.
    fn list_nodes(&self) -> impl Future<Output = Result<serde_json::Value, ApiError>>;

    /// `POST api/action` - raw JSON result.
    fn run_action(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>>;

    /// `POST api/set_number` - raw JSON result.
    fn set_number(
        &self,
        request: &SetNumberRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>>;
}

impl<T: NodeApi + ?Sized> NodeApi for std::rc::Rc<T> {
    fn list_nodes(&self) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        (**self).list_nodes()
    }

    fn run_action(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        (**self).run_action(request)
    }

    fn set_number(
        &self,
        request: &SetNumberRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        (**self).set_number(request)
    }
}
