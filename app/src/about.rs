//! About page: mission statement, values and the team.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::card,
    content::{FALLBACK_IMAGE, TEAM, VALUES},
    routes::Page,
    types::TeamMember,
};

/// Portrait that swaps to the placeholder image if the real one fails to load.
fn portrait(member: &TeamMember) -> impl IntoView {
    let src = RwSignal::new(member.image.to_owned());
    view! {
        <img
            src=move || src.get()
            alt=member.name
            width="96"
            height="96"
            loading="lazy"
            class="object-cover mb-4 rounded-full size-24"
            on:error=move |_| src.set(FALLBACK_IMAGE.to_owned())
        />
    }
}

pub fn component() -> impl IntoView {
    let values = VALUES
        .iter()
        .map(|(title, text)| {
            view! {
                <div class="p-6 rounded-2xl border border-white/10">
                    <h3 class="mb-2 text-lg font-bold text-accent">{*title}</h3>
                    <p class="text-muted">{*text}</p>
                </div>
            }
        })
        .collect_view();

    let team = TEAM
        .iter()
        .map(|member| {
            card::component(
                false,
                view! {
                    <div class="flex flex-col items-center text-center">
                        {portrait(member)}
                        <h3 class="text-lg font-bold">{member.name}</h3>
                        <p class="mb-3 text-sm text-accent">{member.role}</p>
                        <p class="mb-3 text-sm text-muted">{member.bio}</p>
                        {member.profile_url.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="text-sm hover:underline text-accent">"Profile"</a>
                        })}
                    </div>
                }
                .into_any(),
            )
        })
        .collect_view();

    view! {
        <Title text=Page::About.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-4xl text-center">
                <h1 class="mb-6 text-5xl font-extrabold md:text-6xl text-accent">"About the guild"</h1>
                <p class="text-lg text-muted">
                    "We started in 2019 as a monthly meetup of a dozen video makers. Today the guild is a member-run association supporting thousands of creators with education, studio space and fair business practices."
                </p>
            </div>
        </section>
        <section class="py-12 px-4">
            <div class="grid gap-6 mx-auto max-w-5xl md:grid-cols-3">{values}</div>
        </section>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("The team", "The people who keep the lights on and the cameras rolling.")}
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">{team}</div>
            </div>
        </section>
    }
}
