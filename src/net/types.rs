//! Wire types exchanged with the image-generation endpoint.
//!
//! DESIGN
//! ======
//! Rust field names describe the geometry; serde renames map them onto the
//! short keys the endpoint expects (`ulx`, `uly`, `lrx`, `lry`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-side image style requested for a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Shaded relief raster.
    #[default]
    Hillshade,
    /// Elevation contour lines.
    Contour,
}

impl RenderMode {
    /// Every mode, in the order the picker shows them.
    pub const ALL: [RenderMode; 2] = [RenderMode::Hillshade, RenderMode::Contour];

    /// Value sent in the `option` field.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Hillshade => "hillshade",
            Self::Contour => "contour",
        }
    }

    /// Human-readable label for the radio input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hillshade => "Hillshade",
            Self::Contour => "Contour",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Returned when a string is not a known render mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown render mode: {0}")]
pub struct UnknownRenderMode(pub String);

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hillshade" => Ok(Self::Hillshade),
            "contour" => Ok(Self::Contour),
            other => Err(UnknownRenderMode(other.to_owned())),
        }
    }
}

/// Visible map rectangle plus the render options, posted once per click.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxRequest {
    /// Longitude of the north-west corner.
    #[serde(rename = "ulx")]
    pub upper_left_lng: f64,
    /// Latitude of the north-west corner.
    #[serde(rename = "uly")]
    pub upper_left_lat: f64,
    /// Longitude of the south-east corner.
    #[serde(rename = "lrx")]
    pub lower_right_lng: f64,
    /// Latitude of the south-east corner.
    #[serde(rename = "lry")]
    pub lower_right_lat: f64,
    pub zoom_level: i32,
    #[serde(rename = "option")]
    pub render_mode: RenderMode,
}

/// Successful endpoint reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// URL or path usable directly as an `<img>` source.
    pub image_path: String,
}
