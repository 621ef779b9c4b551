//! HTTP API client wrapping `gloo-net` for calls to `api/*`.
//!
//! Paths are resolved against the page URL so the console keeps working
//! when it is served behind an ingress prefix.

use std::future::Future;

use gloo_net::http::{Request, Response};
use nodeconsole_app::ports::{ApiError, NodeApi};
use nodeconsole_domain::command::{ActionRequest, SetNumberRequest};
use nodeconsole_domain::ingress::ApiBase;
use serde::Deserialize;

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

fn transport(err: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("request failed: {err}");
    ApiError::Transport {
        message: err.to_string(),
    }
}

/// Text shown for a non-2xx response: `error: message` from the JSON body,
/// `error` alone, or `HTTP <status>` when the body is not an error object.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error,
            message: Some(detail),
        }) => format!("{error}: {detail}"),
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    }
}

/// Result of a successful command: the JSON body, or the status code when
/// the backend answered with an empty or non-JSON body.
fn command_body(status: u16, body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "status_code": status }))
}

/// Decode the body of `api/nodes`; an empty body is `null`.
fn node_list_body(body: &str) -> Result<serde_json::Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        message: err.to_string(),
    })
}

/// Read the body of a 2xx response, or turn any other status into
/// [`ApiError::Status`].
async fn success_body(resp: Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    if resp.ok() {
        let text = resp.text().await.map_err(transport)?;
        return Ok((status, text));
    }
    let text = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(status, &text),
    })
}

async fn command_result(resp: Response) -> Result<serde_json::Value, ApiError> {
    let (status, text) = success_body(resp).await?;
    Ok(command_body(status, &text))
}

/// [`NodeApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct GlooNodeApi {
    base: ApiBase,
}

impl GlooNodeApi {
    /// Resolve API paths against an explicit page URL.
    #[must_use]
    pub fn new(page_url: &str) -> Self {
        Self {
            base: ApiBase::from_page_url(page_url),
        }
    }

    /// Resolve API paths against `window.location`.
    #[must_use]
    pub fn from_location() -> Self {
        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        Self::new(&href)
    }
}

impl NodeApi for GlooNodeApi {
    fn list_nodes(&self) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        let url = self.base.url("api/nodes");
        async move {
            let resp = Request::get(&url).send().await.map_err(transport)?;
            let (_, text) = success_body(resp).await?;
            node_list_body(&text)
        }
    }

    fn run_action(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        let built = Request::post(&self.base.url("api/action")).json(request);
        async move {
            let resp = built.map_err(transport)?.send().await.map_err(transport)?;
            command_result(resp).await
        }
    }

    fn set_number(
        &self,
        request: &SetNumberRequest,
    ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
        let built = Request::post(&self.base.url("api/set_number")).json(request);
        async move {
            let resp = built.map_err(transport)?.send().await.map_err(transport)?;
            command_result(resp).await
        }
    }
}
