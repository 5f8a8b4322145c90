//! Events listing (upcoming and past) and the per-event detail page.

use chrono::Utc;
use icondata::{BsCalendarEvent, BsGeoAlt};
use leptos::{prelude::*, svg::svg};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::{
    components::{card, error_template::AppError},
    content::{CONTACT, find_event, past_events, upcoming_events},
    routes::{Page, SITE_NAME, event_path},
    types::Event,
};

fn event_card(event: &'static Event, past: bool) -> impl IntoView {
    card::component(
        false,
        view! {
            <div class="flex gap-3 justify-between items-center mb-3 text-xs tracking-wide uppercase">
                <span class="py-1 px-2 rounded-full bg-accent/20 text-accent">{event.category}</span>
                <span class="flex gap-1 items-center text-muted">
                    {svg().attr("viewBox", BsCalendarEvent.view_box).attr("fill", "currentColor").attr("innerHTML", BsCalendarEvent.data).class("size-4")}
                    {event.display_date()}
                </span>
            </div>
            <h3 class="mb-2 text-xl font-bold group-hover:text-accent">{event.title}</h3>
            <p class="flex gap-1 items-center mb-1 text-sm text-muted">
                {svg().attr("viewBox", BsGeoAlt.view_box).attr("fill", "currentColor").attr("innerHTML", BsGeoAlt.data).class("size-4")}
                {event.location}
            </p>
            <p class="flex-grow mb-4">{event.summary}</p>
            <A href=event_path(event.slug) attr:class="font-semibold hover:underline text-accent">
                {if past { "Recap \u{2192}" } else { "Details \u{2192}" }}
            </A>
        }
        .into_any(),
    )
}

pub fn component() -> impl IntoView {
    let today = Utc::now().date_naive();
    let upcoming = upcoming_events(today);
    let past = past_events(today);

    let upcoming_view = if upcoming.is_empty() {
        view! { <p class="text-center text-muted">"New events are announced every month. Check back soon."</p> }.into_any()
    } else {
        let cards = upcoming.into_iter().map(|event| event_card(event, false)).collect_view();
        view! { <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{cards}</div> }.into_any()
    };
    let past_cards = past.into_iter().map(|event| event_card(event, true)).collect_view();

    view! {
        <Title text=Page::Events.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Upcoming events", "Workshops, meetups and showcases open to members and friends.")}
                {upcoming_view}
            </div>
        </section>
        <section class="py-20 px-4 bg-card/40">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Past events", "What we have been up to.")}
                <div class="grid gap-6 opacity-90 md:grid-cols-2 lg:grid-cols-3">{past_cards}</div>
            </div>
        </section>
    }
}

/// Detail page for `/events/:slug`. An unknown slug raises
/// [`AppError::EventNotFound`] for the error boundary to render.
pub fn detail() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || {
        let slug = slug();
        let event = find_event(&slug).ok_or_else(|| AppError::EventNotFound(slug.clone()))?;
        let is_past = event.date().is_some_and(|date| date < Utc::now().date_naive());
        Ok::<_, AppError>(view! {
            <Title text=format!("{} \u{2013} {SITE_NAME}", event.title)/>
            <article class="py-20 px-4 mx-auto max-w-3xl">
                <A href=Page::Events.path() attr:class="text-sm hover:underline text-muted">"\u{2190} All events"</A>
                <p class="mt-8 mb-2 text-sm tracking-wide uppercase text-accent">
                    {event.category}" \u{b7} "{event.display_date()}
                </p>
                <h1 class="mb-4 text-4xl font-extrabold sm:text-5xl">{event.title}</h1>
                <p class="mb-8 text-muted">{event.location}</p>
                <p class="mb-4 text-lg">{event.summary}</p>
                <p class="mb-10 text-muted">{event.details}</p>
                {(!is_past).then(|| view! {
                    <a href=CONTACT.membership_form_url target="_blank" rel="noopener noreferrer"
                        class="py-3 px-8 font-semibold rounded-full bg-accent text-on-accent hover:opacity-90">
                        "Reserve a spot"
                    </a>
                })}
            </article>
        })
    }
}
