//! Hover card and section heading used across the content pages.

use leptos::{
    html::{div, h2, p},
    prelude::*,
};

/// A card that lifts and glows on hover. `highlight` adds an accent ring.
pub fn component(highlight: bool, body: AnyView) -> impl IntoView {
    div()
        .class("flex relative flex-col p-6 h-full rounded-2xl border transition-all duration-300 hover:-translate-y-1 hover:shadow-xl group bg-card border-white/10 hover:border-accent/40")
        .class(("ring-2", highlight))
        .class(("ring-accent", highlight))
        .child(body)
}

pub fn section_heading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    div().class("mx-auto mb-12 max-w-3xl text-center").child((
        h2().class("mb-3 text-3xl font-bold sm:text-4xl text-accent").child(title),
        p().class("text-lg text-muted").child(subtitle),
    ))
}
