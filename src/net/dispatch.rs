//! Send one captured viewport and fold the outcome into `RenderState`.
//!
//! The phase goes to `Loading` before the request and leaves it on every
//! path. Failures are logged and swallowed; there is no retry, timeout, or
//! in-flight guard, so overlapping clicks race and the last reply wins.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use super::api::ImageTransport;
use super::types::BoundingBoxRequest;
use crate::state::render::{RenderSink, RenderState};

/// Post `request` through `transport`, updating `sink` around the await.
pub async fn dispatch<T, S>(transport: &T, sink: &S, request: BoundingBoxRequest)
where
    T: ImageTransport,
    S: RenderSink,
{
    log::debug!(
        "requesting {} image: nw=({}, {}) se=({}, {}) zoom={}",
        request.render_mode,
        request.upper_left_lng,
        request.upper_left_lat,
        request.lower_right_lng,
        request.lower_right_lat,
        request.zoom_level
    );
    sink.apply(RenderState::begin);

    match transport.post_viewport(&request).await {
        Ok(resp) => {
            log::debug!("image ready: {}", resp.image_path);
            sink.apply(|state| state.succeed(resp.image_path));
        }
        Err(e) => {
            log::error!("failed to send bounding box: {e}");
            sink.apply(|state| state.fail(e.to_string()));
        }
    }
}
