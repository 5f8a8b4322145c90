use leptos::prelude::*;

use crate::theme::use_theme;

/// Button that moves to the next theme on every click.
pub fn component() -> impl IntoView {
    let theme = use_theme();
    let label = move || format!("Theme: {}", theme.get().label());
    let next = move || format!("Switch to {} theme", theme.get().next().label());

    view! {
        <button
            type="button"
            class="py-1 px-3 text-xs font-semibold rounded-full border transition-colors border-white/20 hover:border-accent hover:text-accent"
            title=next
            aria-label=next
            on:click=move |_| theme.cycle()
        >
            {label}
        </button>
    }
}
