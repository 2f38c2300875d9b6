//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::generator::GeneratorPage;
use crate::state::render::RenderState;

/// Root application component.
///
/// Reads page configuration once and provides it, together with the shared
/// render state, to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "csr")]
    let config = ClientConfig::from_document();
    #[cfg(not(feature = "csr"))]
    let config = ClientConfig::default();
    log::debug!("image endpoint: {}", config.endpoint);

    provide_context(config);
    provide_context(RwSignal::new(RenderState::default()));

    view! {
        <Title text="Terrain Image Generator"/>
        <GeneratorPage/>
    }
}
