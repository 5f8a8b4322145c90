//! Contact page: direct contact details, a map and the message form.
//!
//! There is no backend behind the form. A valid submission shows a spinner
//! for [`SUBMIT_DELAY`], then clears the fields and opens a confirmation
//! dialog. The hidden `website` input is a honeypot for bots.

use std::time::Duration;

use leptos::{logging, prelude::*};
use leptos_meta::Title;

use crate::{
    components::{card, loader, modal},
    content::CONTACT,
    routes::Page,
    types::{ContactRequest, FormStatus, MAX_MESSAGE_LEN},
};

/// How long the simulated delivery takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1200);

const INPUT_CLASS: &str = "py-3 px-4 w-full rounded-lg transition-shadow focus:ring-2 focus:outline-none placeholder-muted bg-surface focus:ring-accent";

fn details() -> impl IntoView {
    card::component(
        false,
        view! {
            <h3 class="mb-4 text-xl font-bold text-accent">"Visit or call"</h3>
            <ul class="mb-6 space-y-3">
                <li>
                    <span class="block text-xs tracking-wide uppercase text-muted">"Email"</span>
                    <a href=CONTACT.mailto() class="hover:underline">{CONTACT.email}</a>
                </li>
                <li>
                    <span class="block text-xs tracking-wide uppercase text-muted">"Phone"</span>
                    <a href=CONTACT.tel() class="hover:underline">{CONTACT.phone}</a>
                </li>
                <li>
                    <span class="block text-xs tracking-wide uppercase text-muted">"Studio"</span>
                    <address class="not-italic">{CONTACT.address}</address>
                </li>
            </ul>
            <iframe
                src=CONTACT.map_embed_url
                title="Map to the studio"
                class="w-full rounded-xl border-0 aspect-video"
                {..leptos::attr::loading("lazy")}
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        }
        .into_any(),
    )
}

fn cancel_pending(pending: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = pending.try_get_value().flatten() {
        handle.clear();
    }
}

pub fn component() -> impl IntoView {
    let state = RwSignal::new(ContactRequest::default());
    let status = RwSignal::new(FormStatus::default());
    let error = RwSignal::new(None::<String>);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // Leaving the page cancels a delivery that has not fired yet.
    on_cleanup(move || cancel_pending(pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = status.get_untracked();
        if current.is_submitting() {
            return;
        }
        match state.with(|request| current.on_submit(request)) {
            Ok(FormStatus::Submitting) => {
                error.set(None);
                status.set(FormStatus::Submitting);
                let handle = set_timeout_with_handle(
                    move || {
                        pending.set_value(None);
                        state.set(ContactRequest::default());
                        status.update(|s| *s = s.on_delivered());
                    },
                    SUBMIT_DELAY,
                );
                match handle {
                    Ok(handle) => pending.set_value(Some(handle)),
                    Err(err) => logging::error!("could not schedule contact delivery: {err:?}"),
                }
            }
            // Honeypot hit: pretend it worked and leave the fields alone.
            Ok(next) => status.set(next),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <Title text=Page::Contact.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Get in touch", "Questions about membership, studio bookings or partnerships? We read everything.")}
                <div class="grid gap-8 lg:grid-cols-2">
                    {details()}
                    <form class="space-y-5" novalidate=true on:submit=on_submit>
                        <div class="grid gap-5 md:grid-cols-2">
                            <input
                                id="name"
                                name="name"
                                placeholder="Your name"
                                type="text"
                                autocomplete="name"
                                prop:value=move || state.get().name
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    state.update(|prev| prev.name = name);
                                }
                                class=INPUT_CLASS
                            />
                            <input
                                id="email"
                                name="email"
                                placeholder="Your email"
                                type="email"
                                autocomplete="email"
                                prop:value=move || state.get().email
                                on:input=move |ev| {
                                    let email = event_target_value(&ev);
                                    state.update(|prev| prev.email = email);
                                }
                                class=INPUT_CLASS
                            />
                        </div>
                        <input
                            id="subject"
                            name="subject"
                            placeholder="Subject (optional)"
                            type="text"
                            prop:value=move || state.get().subject
                            on:input=move |ev| {
                                let subject = event_target_value(&ev);
                                state.update(|prev| prev.subject = subject);
                            }
                            class=INPUT_CLASS
                        />
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Your message"
                            rows="6"
                            maxlength=MAX_MESSAGE_LEN.to_string()
                            prop:value=move || state.get().message
                            on:input=move |ev| {
                                let message = event_target_value(&ev);
                                state.update(|prev| prev.message = message);
                            }
                            class=INPUT_CLASS
                        />
                        <input
                            name="website"
                            type="text"
                            tabindex="-1"
                            autocomplete="off"
                            aria-hidden="true"
                            class="hidden"
                            prop:value=move || state.get().website.unwrap_or_default()
                            on:input=move |ev| {
                                let website = event_target_value(&ev);
                                state.update(|prev| prev.website = Some(website));
                            }
                        />
                        {move || error.get().map(|message| view! {
                            <p class="text-sm text-red-400" role="alert">{message}</p>
                        })}
                        <button
                            type="submit"
                            disabled=move || status.get().is_submitting()
                            class="flex justify-center items-center py-3 px-6 w-full text-lg font-semibold rounded-full transition-opacity disabled:opacity-60 bg-accent text-on-accent hover:opacity-90"
                        >
                            <Show when=move || status.get().is_submitting() fallback=|| "Send message">
                                {loader::component("Sending\u{2026}")}
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </section>
        {modal::component(
            Signal::derive(move || status.get().is_sent()),
            "Message sent",
            "Thanks for reaching out. We usually reply within two working days.",
            move || status.update(|s| *s = s.on_dismiss()),
        )}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_meta::provide_meta_context;

    #[test]
    fn test_submit_delay() {
        assert_eq!(SUBMIT_DELAY, Duration::from_millis(1200));
    }

    #[test]
    fn test_unmount_without_pending_delivery() {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            drop(component());
        });
        owner.cleanup();
    }

    #[test]
    fn test_cancel_after_store_is_disposed() {
        let owner = Owner::new();
        let pending = owner.with(|| StoredValue::new(None::<TimeoutHandle>));
        owner.cleanup();
        cancel_pending(pending);
    }
}
