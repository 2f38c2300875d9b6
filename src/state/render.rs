//! Render request lifecycle: selected mode, request phase, displayed image.
//!
//! DESIGN
//! ======
//! The phase is an explicit tagged union so the presenter and tests can tell
//! "never requested" from "last request failed". The displayed image lives
//! outside the phase because a failure must leave the previous image visible.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use leptos::prelude::*;

use crate::net::types::RenderMode;

/// Where the most recent image request stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenderPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// Last request returned this image reference.
    Loaded(String),
    /// Last request failed; message is for diagnostics only.
    Failed(String),
}

/// State read by the mode picker and result view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    pub mode: RenderMode,
    pub phase: RenderPhase,
    /// Source bound to the `<img>`; survives failed requests.
    pub image_path: Option<String>,
}

impl RenderState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == RenderPhase::Loading
    }

    /// Image source to render, if any. Empty references render nothing.
    #[must_use]
    pub fn visible_image(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|path| !path.is_empty())
    }

    pub fn select_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// Enter `Loading`. The displayed image is kept until a reply arrives.
    pub fn begin(&mut self) {
        self.phase = RenderPhase::Loading;
    }

    pub fn succeed(&mut self, image_path: String) {
        self.image_path = Some(image_path.clone());
        self.phase = RenderPhase::Loaded(image_path);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = RenderPhase::Failed(message.into());
    }
}

/// A cell the dispatcher can write `RenderState` through across awaits.
pub trait RenderSink {
    fn apply(&self, f: impl FnOnce(&mut RenderState));
}

impl RenderSink for RwSignal<RenderState> {
    fn apply(&self, f: impl FnOnce(&mut RenderState)) {
        self.update(f);
    }
}
