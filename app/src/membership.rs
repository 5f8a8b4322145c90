//! Membership tiers with a monthly/yearly billing switch.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::card,
    content::{CONTACT, PLANS},
    routes::Page,
    types::{Billing, Plan},
};

fn plan_card(plan: &'static Plan, billing: RwSignal<Billing>) -> impl IntoView {
    let features = plan
        .features
        .iter()
        .map(|feature| view! { <li class="flex gap-2"><span class="text-accent">"\u{2713}"</span>{*feature}</li> })
        .collect_view();

    card::component(
        plan.highlighted,
        view! {
            {plan.highlighted.then(|| view! {
                <span class="absolute -top-3 left-1/2 py-1 px-3 text-xs font-semibold rounded-full -translate-x-1/2 bg-accent text-on-accent">
                    "Most popular"
                </span>
            })}
            <h3 class="mb-1 text-2xl font-bold">{plan.name}</h3>
            <p class="mb-6 text-sm text-muted">{plan.tagline}</p>
            <p class="mb-6 text-4xl font-extrabold text-accent">{move || plan.price_label(billing.get())}</p>
            <ul class="flex-grow mb-8 space-y-2 text-sm">{features}</ul>
            <a
                href=CONTACT.membership_form_url
                target="_blank"
                rel="noopener noreferrer"
                class="py-3 px-6 font-semibold text-center rounded-full bg-accent text-on-accent hover:opacity-90"
            >
                {format!("Choose {}", plan.name)}
            </a>
        }
        .into_any(),
    )
}

pub fn component() -> impl IntoView {
    let billing = RwSignal::new(Billing::default());
    let plans = PLANS.iter().map(|plan| plan_card(plan, billing)).collect_view();

    view! {
        <Title text=Page::Membership.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Membership", "Start free. Upgrade when you need the studio.")}
                <div class="flex gap-3 justify-center items-center mb-12 text-sm">
                    <span class:text-accent=move || billing.get() == Billing::Monthly>"Monthly"</span>
                    <button
                        class="relative w-14 h-7 rounded-full transition-colors bg-white/20"
                        role="switch"
                        aria-label="Toggle yearly billing"
                        aria-checked=move || (billing.get() == Billing::Yearly).to_string()
                        on:click=move |_| billing.update(|b| *b = b.toggled())
                    >
                        <span
                            class="absolute top-1 left-1 rounded-full transition-transform size-5 bg-accent"
                            class:translate-x-7=move || billing.get() == Billing::Yearly
                        ></span>
                    </button>
                    <span class:text-accent=move || billing.get() == Billing::Yearly>
                        "Yearly "<span class="text-xs text-muted">"(2 months free)"</span>
                    </span>
                </div>
                <div class="grid gap-8 md:grid-cols-3">{plans}</div>
            </div>
        </section>
    }
}
