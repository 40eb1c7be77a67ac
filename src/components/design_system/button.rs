use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-[var(--accent)] hover:brightness-110 text-white border border-transparent shadow-lg"
            }
            ButtonVariant::Secondary => {
                "bg-[var(--bg-elevated)] hover:bg-[var(--bg-surface)] text-[var(--text-primary)] border border-[var(--border-subtle)]"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-[var(--text-muted)] hover:text-[var(--text-primary)] border border-transparent"
            }
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    on_click: F,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded-lg transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none";
    let variant_class = variant.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get() {
            on_click(evt);
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=move || disabled.get()
            title=title
        >
            {children()}
        </button>
    }
}
