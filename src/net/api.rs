//! HTTP transport for the image-generation endpoint.
//!
//! Client-side (csr): real `POST` via `gloo-net`.
//! Native builds: the transport reports `Unavailable` since the endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `DispatchError` so the dispatcher can log it
//! and reset UI state without inspecting transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BoundingBoxRequest, ImageResponse};

/// Why an image request produced no image.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Endpoint answered with a non-2xx status.
    #[error("image request failed with status {0}")]
    Status(u16),
    /// Request could not be built or delivered.
    #[error("image request transport error: {0}")]
    Transport(String),
    /// Body was not an `ImageResponse`.
    #[error("image response could not be decoded: {0}")]
    Decode(String),
    /// No browser network stack in this build.
    #[error("image transport not available outside the browser")]
    Unavailable,
}

/// Anything that can deliver one bounding box and return the image reference.
///
/// Futures are not `Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait ImageTransport {
    /// Post `request` and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns a `DispatchError` for non-2xx replies, transport failures, or
    /// bodies without `image_path`.
    async fn post_viewport(&self, request: &BoundingBoxRequest) -> Result<ImageResponse, DispatchError>;
}

/// `gloo-net` backed transport posting JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a response status onto success or `DispatchError::Status`.
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), DispatchError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(DispatchError::Status(status)) }
}

impl ImageTransport for HttpTransport {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn post_viewport(&self, request: &BoundingBoxRequest) -> Result<ImageResponse, DispatchError> {
        #[cfg(feature = "csr")]
        {
            // `json` also sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| DispatchError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| DispatchError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<ImageResponse>()
                .await
                .map_err(|e| DispatchError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(DispatchError::Unavailable)
        }
    }
}
