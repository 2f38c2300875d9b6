//! Render mode radio group.

use leptos::prelude::*;

use crate::net::types::RenderMode;
use crate::state::render::RenderState;

/// One radio input per `RenderMode`, bound to `RenderState::mode`.
#[component]
pub fn ModePicker() -> impl IntoView {
    let render = expect_context::<RwSignal<RenderState>>();

    view! {
        <div class="radio-options">
            {RenderMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <label>
                            <input
                                type="radio"
                                name="render-mode"
                                value=mode.as_wire()
                                prop:checked=move || render.with(|s| s.mode == mode)
                                on:change=move |_| render.update(|s| s.select_mode(mode))
                            />
                            {mode.label()}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
