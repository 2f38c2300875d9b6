//! Terrain image generator page: map, mode picker, Generate button, result.
//!
//! The page owns the map handle. A click captures the viewport synchronously
//! and hands it to the dispatcher on a local task; clicks are not de-duplicated.

use leptos::prelude::*;

use crate::components::map_host::MapHost;
use crate::components::mode_picker::ModePicker;
use crate::components::result_view::ResultView;
use crate::config::ClientConfig;
use crate::map::leaflet::{LeafletMap, MapSlot};
use crate::net::api::HttpTransport;
use crate::state::render::RenderState;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let render = expect_context::<RwSignal<RenderState>>();
    let map: MapSlot = StoredValue::new_local(None::<LeafletMap>);
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let transport = StoredValue::new(HttpTransport::new(config.endpoint));

    let on_generate = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::map::capture_from_slot;
            use crate::net::dispatch::dispatch;

            let mode = render.with_untracked(|s| s.mode);
            let Some(request) = map.with_value(|slot| capture_from_slot(slot.as_ref(), mode)) else {
                return;
            };
            let transport = transport.get_value();
            leptos::task::spawn_local(async move {
                dispatch(&transport, &render, request).await;
            });
        }
    };

    view! {
        <div>
            <h1>"Terrain Image Generator"</h1>
            <MapHost slot=map/>
            <div class="button-radio-container">
                <ModePicker/>
                <button on:click=on_generate>"Generate"</button>
            </div>
            <ResultView/>
        </div>
    }
}
