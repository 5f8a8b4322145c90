//! Spinner with a short caption, shown while the contact form is "sending".

use leptos::{
    html::{div, p},
    prelude::*,
    svg::{path, svg},
};

pub fn component(caption: &'static str) -> impl IntoView {
    div().class("flex flex-row gap-2 justify-center items-center").child((
        svg()
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("aria-hidden", "true")
            .class("animate-spin size-5")
            .child(
                path()
                    .attr("d", "M12 2a10 10 0 0 1 10 10")
                    .attr("stroke", "currentColor")
                    .attr("stroke-width", "3")
                    .attr("stroke-linecap", "round"),
            ),
        p().class("text-sm italic").child(caption),
    ))
}
