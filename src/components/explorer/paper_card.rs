//! Paper Card Component
//!
//! One paper record inside a panel. The summary row is always visible;
//! clicking it flips this card's expansion state and nothing else. The
//! detail section surfaces the abstract, keyword chips, the date added, and
//! the external links, each only when the record carries the field.

use leptos::ev;
use leptos::prelude::*;

use super::use_explorer_state;
use crate::components::design_system::{Badge, BadgeVariant};
use crate::services::catalog::{ImpactTier, Paper};

fn tier_badge(tier: ImpactTier) -> BadgeVariant {
    match tier {
        ImpactTier::High => BadgeVariant::Success,
        ImpactTier::Medium => BadgeVariant::Warning,
        ImpactTier::Low => BadgeVariant::Default,
    }
}

/// A single paper with its own expansion state, keyed by the stable record id
#[component]
pub fn PaperCard(paper: Paper) -> impl IntoView {
    let state = use_explorer_state();
    let expanded_set = state.expanded;

    let is_expanded = {
        let id = paper.id.clone();
        move || expanded_set.with(|set| set.contains(&id))
    };

    let toggle = {
        let state = state.clone();
        let id = paper.id.clone();
        move |_: ev::MouseEvent| state.toggle_expanded(&id)
    };

    let tier = paper.impact_tier();
    let has_pdf = paper.pdf_filename.is_some();

    // Detail fields, owned by the expansion section below.
    let abstract_text = paper.abstract_text.clone();
    let keywords = paper.keywords.clone();
    let date_added = paper.date_added.clone();
    let doi_link = paper.doi_link();
    let url = paper.url.clone();

    let card_class = {
        let is_expanded = is_expanded.clone();
        move || {
            format!(
                "rounded-xl border transition-all {}",
                if is_expanded() {
                    "bg-[var(--bg-elevated)] border-[var(--accent)] shadow-md"
                } else {
                    "bg-[var(--bg-elevated)] border-[var(--border-subtle)] hover:border-[var(--text-muted)]"
                }
            )
        }
    };

    view! {
        <div class=card_class>
            // Summary row. A click here flips exactly this card.
            <div class="p-3 cursor-pointer" on:click=toggle>
                <div class="flex items-start justify-between gap-2">
                    <h3 class="font-medium text-[var(--text-primary)] min-w-0">
                        {paper.title.clone()}
                    </h3>
                    {has_pdf.then(|| view! {
                        <Badge variant=BadgeVariant::Info>"PDF"</Badge>
                    })}
                </div>

                <p class="text-sm text-[var(--text-muted)] mt-1 truncate">
                    {format!("{} · {}", paper.authors, paper.year)}
                </p>

                <div class="flex items-center gap-2 mt-2">
                    <span class="text-xs font-mono text-[var(--text-muted)]">
                        {format!("{} citations", paper.citations)}
                    </span>
                    <Badge variant=tier_badge(tier)>{tier.as_str()}</Badge>
                </div>
            </div>

            // Detail section, only while expanded.
            <Show when=is_expanded>
                <div class="px-3 pb-3 pt-2 border-t border-[var(--border-subtle)] space-y-3">
                    <p class="text-sm text-[var(--text-muted)] leading-relaxed">
                        {abstract_text.clone()}
                    </p>

                    {(!keywords.is_empty()).then(|| view! {
                        <div class="flex flex-wrap gap-1.5">
                            {keywords
                                .iter()
                                .map(|keyword| view! {
                                    <span class="text-xs px-2 py-0.5 rounded bg-[var(--bg-deep)] text-[var(--text-muted)] border border-[var(--border-subtle)]">
                                        {keyword.clone()}
                                    </span>
                                })
                                .collect_view()}
                        </div>
                    })}

                    {date_added.clone().map(|date| view! {
                        <p class="text-xs text-[var(--text-muted)]">
                            {format!("Added: {}", date)}
                        </p>
                    })}

                    <div class="flex gap-3">
                        {doi_link.clone().map(|href| view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-xs text-[var(--accent)] hover:underline"
                            >
                                "DOI"
                            </a>
                        })}
                        {url.clone().map(|href| view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-xs text-[var(--accent)] hover:underline"
                            >
                                "View Paper"
                            </a>
                        })}
                    </div>
                </div>
            </Show>
        </div>
    }
}
