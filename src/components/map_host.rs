//! Host element for the Leaflet map.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `MapSlot`. This component fills it once its `<div>` is in
//! the DOM and empties it on cleanup, which drops the handle and removes the
//! widget.

use leptos::prelude::*;

use crate::map::leaflet::MapSlot;
#[cfg(feature = "csr")]
use crate::{
    config::ClientConfig,
    map::leaflet::{LeafletMap, MapSetup},
};

/// Map container. Mounts Leaflet into `slot` on first render.
#[component]
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn MapHost(slot: MapSlot) -> impl IntoView {
    let map_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let setup = MapSetup::from(&expect_context::<ClientConfig>());
        Effect::new(move || {
            let Some(container) = map_ref.get() else {
                return;
            };
            if slot.with_value(Option::is_some) {
                return;
            }
            match LeafletMap::mount(&container, &setup) {
                Ok(map) => slot.set_value(Some(map)),
                Err(e) => log::error!("failed to mount map: {e}"),
            }
        });
        on_cleanup(move || slot.set_value(None));
    }
    view! { <div id="map" node_ref=map_ref></div> }
}
