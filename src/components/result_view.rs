//! Spinner and generated image, driven purely by `RenderState`.

use leptos::prelude::*;

use crate::state::render::RenderState;

#[component]
pub fn ResultView() -> impl IntoView {
    let render = expect_context::<RwSignal<RenderState>>();

    let loading = move || render.with(RenderState::is_loading);
    let image = move || render.with(|s| s.visible_image().map(str::to_owned));

    view! {
        <Show when=loading>
            <div class="loading-spinner"></div>
        </Show>
        <div id="image-container">
            {move || image().map(|src| view! { <img id="image" src=src alt="Generated"/> })}
        </div>
    }
}
