//! Category Panel Component
//!
//! Renders one collection: header with the post-filter count, then the
//! filtered-and-sorted card list. The count is taken before sorting, so
//! toggling the sort key can never change it.

use leptos::prelude::*;

use super::{sort_papers, use_explorer_state, PaperCard};
use crate::components::design_system::{Card, CardBody, CardHeader};
use crate::services::catalog::Category;

/// One collection's panel: heading, `"(N papers)"` count, card list
#[component]
pub fn CategoryPanel(category: Category) -> impl IntoView {
    let state = use_explorer_state();

    view! {
        <Card class="flex-1 min-w-0 flex flex-col">
            {move || {
                let filtered = state.filtered(category);
                let count = filtered.len();
                let visible = sort_papers(state.sort_by.get(), filtered);

                view! {
                    <CardHeader>
                        <div class="min-w-0">
                            <h2 class="text-lg font-semibold text-[var(--text-primary)] truncate">
                                {category.label()}
                            </h2>
                            <p class="text-xs text-[var(--text-muted)]">{category.description()}</p>
                        </div>
                        <span class="text-sm font-mono text-[var(--text-muted)] flex-shrink-0">
                            {format!("({} papers)", count)}
                        </span>
                    </CardHeader>

                    <CardBody class="flex-1 overflow-y-auto space-y-3">
                        {if visible.is_empty() {
                            view! { <EmptyPanelState /> }.into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|paper| view! { <PaperCard paper=paper /> })
                                .collect_view()
                                .into_any()
                        }}
                    </CardBody>
                }
            }}
        </Card>
    }
}

/// Empty state when the filter matches nothing in this collection
#[component]
fn EmptyPanelState() -> impl IntoView {
    let state = use_explorer_state();

    view! {
        <div class="text-center py-10">
            <p class="text-sm text-[var(--text-muted)]">
                {move || {
                    let term = state.search_term.get();
                    if term.is_empty() {
                        "No papers in this collection.".to_string()
                    } else {
                        format!("No papers match '{}'.", term)
                    }
                }}
            </p>
        </div>
    }
}
