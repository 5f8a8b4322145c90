use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::{components::card, content::SERVICES, routes::Page};

pub fn component() -> impl IntoView {
    let services = SERVICES
        .iter()
        .map(|service| {
            let highlights = service
                .highlights
                .iter()
                .map(|item| view! { <li class="flex gap-2"><span class="text-accent">"\u{2713}"</span>{*item}</li> })
                .collect_view();
            card::component(
                false,
                view! {
                    <h3 class="mb-3 text-2xl font-bold group-hover:text-accent">{service.title}</h3>
                    <p class="mb-4 text-muted">{service.summary}</p>
                    <ul class="mt-auto space-y-1 text-sm">{highlights}</ul>
                }
                .into_any(),
            )
        })
        .collect_view();

    view! {
        <Title text=Page::Services.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Services", "Everything a working creator needs, under one roof.")}
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{services}</div>
                <div class="mt-12 text-center">
                    <A href=Page::Membership.path() attr:class="py-3 px-8 font-semibold rounded-full bg-accent text-on-accent hover:opacity-90">
                        "Compare memberships"
                    </A>
                </div>
            </div>
        </section>
    }
}
