use icondata::{BsGlobe, BsInstagram, BsTiktok, BsTwitterX, BsYoutube};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::content::SOCIAL_LINKS;

/// Row of links to the association's social media accounts.
pub fn component() -> impl IntoView {
    div().class("flex flex-row gap-4 items-center h-10").child(
        SOCIAL_LINKS
            .iter()
            .map(|link| {
                let icon = match link.name {
                    "YouTube" => BsYoutube,
                    "Instagram" => BsInstagram,
                    "TikTok" => BsTiktok,
                    "X" => BsTwitterX,
                    _ => BsGlobe,
                };
                a().href(link.url)
                    .rel("noopener noreferrer")
                    .target("_blank")
                    .aria_label(link.name)
                    .attr("title", link.short)
                    .class("transition-all duration-500 hover:text-accent")
                    .child(
                        svg()
                            .attr("viewBox", icon.view_box)
                            .attr("fill", "currentColor")
                            .attr("innerHTML", icon.data)
                            .class("size-6"),
                    )
            })
            .collect_view(),
    )
}
