//! Explorer Module
//!
//! The presentation-state engine for the paper catalog:
//! - `Explorer` - page shell with the shared control bar and the two panels
//! - `ControlBar` - search input and sort toggle, shared by both panels
//! - `CategoryPanel` - one collection's filtered-and-sorted card list
//! - `PaperCard` - a single paper with its own expansion state
//!
//! Everything displayed is derived fresh from the immutable catalog on each
//! state change; the session state itself is three independent pieces (search
//! term, sort key, expansion set) and resets on reload.

mod control_bar;
mod panel;
mod paper_card;

pub use control_bar::ControlBar;
pub use panel::CategoryPanel;
pub use paper_card::PaperCard;

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use crate::services::catalog::{Catalog, Category, Paper};

// ============================================================================
// Sort Controller
// ============================================================================

/// The global sort criterion. A strict 2-state cycle: `toggled` is the only
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Year,
    Citations,
}

impl SortKey {
    /// The other sort key.
    pub fn toggled(self) -> Self {
        match self {
            SortKey::Year => SortKey::Citations,
            SortKey::Citations => SortKey::Year,
        }
    }

    /// Toggle-button label. Always names the *other* state so the control is
    /// self-descriptive.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortKey::Year => "Sort by Citations",
            SortKey::Citations => "Sort by Year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Year => "year",
            SortKey::Citations => "citations",
        }
    }
}

/// Order a filtered sequence by the active sort key: descending (newest year
/// first, most-cited first), stable on ties so equal keys keep the filtered
/// sequence's relative order. Applied to both panels in lockstep.
pub fn sort_papers(key: SortKey, mut papers: Vec<Paper>) -> Vec<Paper> {
    match key {
        SortKey::Year => papers.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Citations => papers.sort_by(|a, b| b.citations.cmp(&a.citations)),
    }
    papers
}

// ============================================================================
// Filter Engine
// ============================================================================

/// Select the records whose title, abstract, or any keyword contains the
/// term, case-insensitively, preserving the collection's relative order. An
/// empty term is the identity filter. Pure; runs on every keystroke.
pub fn filter_papers(papers: &[Paper], term: &str) -> Vec<Paper> {
    if term.is_empty() {
        return papers.to_vec();
    }
    let needle = term.to_lowercase();
    papers
        .iter()
        .filter(|paper| {
            paper.title.to_lowercase().contains(&needle)
                || paper.abstract_text.to_lowercase().contains(&needle)
                || paper
                    .keywords
                    .iter()
                    .any(|keyword| keyword.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

// ============================================================================
// Explorer State Context
// ============================================================================

/// Shared session state provided to all explorer components.
///
/// The catalog is read-only for the lifetime of the session; the three
/// signals are the only mutable pieces, each changed by exactly one reducer
/// below. Expansion is keyed by the stable record id, never by render
/// position, so open/closed state cannot attach to the wrong paper when
/// filtering or sorting reorders the list.
#[derive(Clone)]
pub struct ExplorerState {
    catalog: Arc<Catalog>,
    pub search_term: RwSignal<String>,
    pub sort_by: RwSignal<SortKey>,
    pub expanded: RwSignal<HashSet<String>>,
}

impl ExplorerState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            search_term: RwSignal::new(String::new()),
            sort_by: RwSignal::new(SortKey::default()),
            expanded: RwSignal::new(HashSet::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the search term.
    pub fn apply_search(&self, term: &str) {
        self.search_term.set(term.to_string());
    }

    /// Flip the global sort key. Both panels re-derive from the same signal.
    pub fn toggle_sort(&self) {
        self.sort_by.update(|key| *key = key.toggled());
    }

    /// Flip exactly one card's expansion state.
    pub fn toggle_expanded(&self, id: &str) {
        self.expanded.update(|set| {
            if !set.remove(id) {
                set.insert(id.to_string());
            }
        });
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|set| set.contains(id))
    }

    /// The current filtered sequence for one collection, in catalog order.
    /// Tracks the search term when called inside a reactive closure.
    pub fn filtered(&self, category: Category) -> Vec<Paper> {
        filter_papers(self.catalog.papers(category), &self.search_term.get())
    }
}

/// Provide explorer state context
pub fn provide_explorer_state(catalog: Catalog) {
    provide_context(ExplorerState::new(catalog));
}

/// Get explorer state from context
pub fn use_explorer_state() -> ExplorerState {
    expect_context::<ExplorerState>()
}

// ============================================================================
// Main Explorer Component
// ============================================================================

/// The explorer page: header, shared control bar, and the two side-by-side
/// category panels.
#[component]
pub fn Explorer() -> impl IntoView {
    let state = use_explorer_state();
    let total = state.catalog().total();

    view! {
        <div class="flex flex-col h-full min-h-screen bg-[var(--bg-deep)] text-[var(--text-primary)]">
            // Header
            <header class="flex-shrink-0 px-6 py-4 border-b border-[var(--border-subtle)] bg-[var(--bg-surface)]">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <h1 class="text-2xl font-bold text-[var(--text-primary)]">"Paper Atlas"</h1>
                        <span class="text-sm text-[var(--text-muted)]">
                            {format!("{} papers in the catalog", total)}
                        </span>
                    </div>
                </div>
            </header>

            // Shared search / sort controls
            <ControlBar />

            // The two collection panels
            <div class="flex-1 flex gap-4 p-4 overflow-hidden">
                <CategoryPanel category=Category::Red />
                <CategoryPanel category=Category::Blue />
            </div>
        </div>
    }
}
