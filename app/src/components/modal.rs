//! Dialog overlay with a title, a message and a close button.

use leptos::{
    ev,
    html::{button, div, h3, p},
    prelude::*,
};

/// Renders nothing while `open` is false.
///
/// `on_close` runs when the close button or the backdrop is clicked.
pub fn component(
    open: Signal<bool>,
    title: &'static str,
    message: &'static str,
    on_close: impl Fn() + Clone + Send + Sync + 'static,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            let close_backdrop = on_close.clone();
            let close_button = on_close.clone();
            div()
                .class("flex fixed inset-0 z-50 justify-center items-center p-4 bg-black/60")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .on(ev::click, move |_| close_backdrop())
                .child(
                    div()
                        .class("p-8 w-full max-w-md text-center rounded-2xl shadow-2xl bg-card")
                        .on(ev::click, |e| e.stop_propagation())
                        .child((
                            h3().class("mb-3 text-2xl font-bold text-accent").child(title),
                            p().class("mb-6 text-muted").child(message),
                            button()
                                .class("py-2 px-6 font-semibold rounded-full bg-accent text-on-accent hover:opacity-90")
                                .on(ev::click, move |_| close_button())
                                .child("Close"),
                        )),
                )
        })
    }
}
