use leptos::prelude::*;

/// Badge variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-[var(--bg-elevated)] text-[var(--text-muted)] border border-[var(--border-subtle)]",
            BadgeVariant::Success => "bg-green-900/50 text-green-400 border border-green-500/30",
            BadgeVariant::Warning => "bg-yellow-900/50 text-yellow-400 border border-yellow-500/30",
            BadgeVariant::Danger => "bg-red-900/50 text-red-400 border border-red-500/30",
            BadgeVariant::Info => "bg-blue-900/50 text-blue-400 border border-blue-500/30",
        }
    }
}

/// A small inline status label
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "inline-flex items-center text-xs px-2 py-0.5 rounded-full font-medium whitespace-nowrap";
    let full_class = format!("{base_class} {} {class}", variant.class());

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
