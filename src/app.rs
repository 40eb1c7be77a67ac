use leptos::prelude::*;

use crate::components::explorer::{provide_explorer_state, Explorer};
use crate::services::catalog::{load_catalog, Catalog};

#[component]
pub fn App() -> impl IntoView {
    // A parse failure here means a broken build artifact, not a runtime
    // condition; degrade to an empty catalog.
    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::warn!("failed to parse embedded paper catalog: {err}");
            Catalog::default()
        }
    };

    provide_explorer_state(catalog);

    view! { <Explorer /> }
}
