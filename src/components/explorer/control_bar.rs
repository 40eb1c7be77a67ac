//! Control Bar Component
//!
//! The shared search input and sort toggle. Both panels derive their
//! displayed sequences from the state mutated here; there is no per-panel
//! search or sort.

use leptos::ev;
use leptos::prelude::*;

use super::use_explorer_state;
use crate::components::design_system::{Button, ButtonVariant, Input};

/// Search input plus the 2-state sort toggle
#[component]
pub fn ControlBar() -> impl IntoView {
    let state = use_explorer_state();
    let search_term = state.search_term;
    let sort_by = state.sort_by;

    let toggle_sort = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.toggle_sort()
    };

    view! {
        <div class="flex-shrink-0 px-4 py-3 border-b border-[var(--border-subtle)] bg-[var(--bg-surface)]">
            <div class="flex items-center gap-3">
                <div class="flex-1">
                    <Input
                        value=search_term
                        placeholder="Search titles, abstracts, and keywords..."
                    />
                </div>

                <Show when=move || !search_term.get().is_empty()>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=move |_: ev::MouseEvent| search_term.set(String::new())
                        title="Clear the search term"
                    >
                        "Clear"
                    </Button>
                </Show>

                <Button
                    variant=ButtonVariant::Secondary
                    on_click=toggle_sort
                    title="Toggle the sort criterion for both panels"
                >
                    {move || sort_by.get().toggle_label()}
                </Button>
            </div>

            <p class="mt-2 text-xs text-[var(--text-muted)]">
                {move || format!("Sorted by {}, descending", sort_by.get().label())}
            </p>
        </div>
    }
}
