//! Landing page: animated hero, headline numbers, a preview of the
//! services, member testimonials and a call to action.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::{
    components::{card, particles, typewriter},
    content::{HERO_PHRASES, SERVICES, STATS, TESTIMONIALS},
    routes::Page,
};

const SERVICE_PREVIEW: usize = 3;

pub fn component() -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="text-center">
                    <p class="text-4xl font-extrabold text-accent">{stat.value}</p>
                    <p class="mt-1 text-sm tracking-wide uppercase text-muted">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    let services = SERVICES
        .iter()
        .take(SERVICE_PREVIEW)
        .map(|service| {
            card::component(
                false,
                view! {
                    <h3 class="mb-2 text-xl font-bold group-hover:text-accent">{service.title}</h3>
                    <p class="text-muted">{service.summary}</p>
                }
                .into_any(),
            )
        })
        .collect_view();

    let testimonials = TESTIMONIALS
        .iter()
        .map(|testimonial| {
            card::component(
                false,
                view! {
                    <blockquote class="flex-grow mb-4 italic">"\u{201c}"{testimonial.quote}"\u{201d}"</blockquote>
                    <p class="font-semibold text-accent">{testimonial.author}</p>
                    <p class="text-xs text-muted">{testimonial.channel}</p>
                }
                .into_any(),
            )
        })
        .collect_view();

    view! {
        <Title text=Page::Home.title()/>
        <section class="flex overflow-hidden relative items-center py-32 px-4 min-h-[70vh]">
            {particles::component()}
            <div class="container relative mx-auto max-w-5xl">
                <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl md:text-7xl">
                    "A home for "
                    <br class="sm:hidden"/>
                    <span class="text-accent">{typewriter::component(HERO_PHRASES)}</span>
                </h1>
                <p class="mb-10 max-w-2xl text-lg text-muted">
                    "Creators Guild brings together people who make things online. Learn from peers, book studio time, find collaborators and get paid fairly."
                </p>
                <div class="flex flex-wrap gap-4">
                    <A href=Page::Membership.path() attr:class="py-3 px-8 font-semibold rounded-full transition-opacity bg-accent text-on-accent hover:opacity-90">
                        "Join the guild"
                    </A>
                    <A href=Page::Events.path() attr:class="py-3 px-8 font-semibold rounded-full border transition-colors border-white/30 hover:border-accent hover:text-accent">
                        "See upcoming events"
                    </A>
                </div>
            </div>
        </section>

        <section class="py-16 px-4 bg-card/40">
            <div class="grid grid-cols-2 gap-8 mx-auto max-w-5xl md:grid-cols-4">{stats}</div>
        </section>

        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("What we do", "Programs built around what creators actually need.")}
                <div class="grid gap-6 md:grid-cols-3">{services}</div>
                <div class="mt-10 text-center">
                    <A href=Page::Services.path() attr:class="font-semibold hover:underline text-accent">"All services \u{2192}"</A>
                </div>
            </div>
        </section>

        <section class="py-20 px-4 bg-card/40">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Members say", "Stories from creators who grew with the guild.")}
                <div class="grid gap-6 md:grid-cols-3">{testimonials}</div>
            </div>
        </section>

        <section class="py-24 px-4 text-center">
            <h2 class="mb-4 text-3xl font-bold sm:text-4xl">"Ready to create together?"</h2>
            <p class="mb-8 text-muted">"Membership starts free. Upgrade when you need the studio."</p>
            <A href=Page::Contact.path() attr:class="py-3 px-8 font-semibold rounded-full bg-accent text-on-accent hover:opacity-90">
                "Get in touch"
            </A>
        </section>
    }
}
