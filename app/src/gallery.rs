//! Photo gallery with a category filter and a lightbox.
//!
//! The filter works like a tag list: "All" clears it, a category button
//! selects that category. Clicking a photo opens it in the lightbox, whose
//! previous/next buttons wrap around the filtered list.

use leptos::{ev, prelude::*};
use leptos_meta::Title;

use crate::{
    components::card,
    content::{FALLBACK_IMAGE, gallery_categories, gallery_items},
    routes::Page,
};

/// Index after `index` in a list of `len`, wrapping to the start.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

/// Index before `index` in a list of `len`, wrapping to the end.
pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + len - 1) % len }
}

pub fn component() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);
    let open = RwSignal::new(None::<usize>);
    let items = Memo::new(move |_| gallery_items(selected.get()));

    // A new filter invalidates lightbox indices.
    Effect::new(move |_| {
        selected.track();
        open.set(None);
    });

    let filter_button = move |label: &'static str, category: Option<&'static str>| {
        view! {
            <button
                class="py-1 px-3 rounded-full border transition-colors border-white/20 hover:border-accent"
                class:bg-accent=move || selected.get() == category
                class:text-on-accent=move || selected.get() == category
                on:click=move |_| selected.set(category)
            >
                {label}
            </button>
        }
    };

    let filters = gallery_categories()
        .into_iter()
        .map(|category| filter_button(category, Some(category)))
        .collect_view();

    let grid = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let src = RwSignal::new(item.image.to_owned());
                card::component(
                    false,
                    view! {
                        <button class="block overflow-hidden rounded-xl" on:click=move |_| open.set(Some(index))>
                            <img
                                src=move || src.get()
                                alt=item.title
                                loading="lazy"
                                class="object-cover w-full transition-transform duration-500 aspect-[4/3] group-hover:scale-105"
                                on:error=move |_| src.set(FALLBACK_IMAGE.to_owned())
                            />
                        </button>
                        <p class="mt-3 font-semibold">{item.title}</p>
                        <p class="text-xs text-muted">{item.category}</p>
                    }
                    .into_any(),
                )
            })
            .collect_view()
    };

    let step = move |forward: bool| {
        let len = items.with(Vec::len);
        open.update(|current| {
            if let Some(index) = current {
                *index = if forward { next_index(*index, len) } else { prev_index(*index, len) };
            }
        });
    };

    let lightbox = move || {
        let index = open.get()?;
        let item = items.with(|items| items.get(index).copied())?;
        Some(view! {
            <div
                class="flex fixed inset-0 z-50 flex-col gap-4 justify-center items-center p-4 bg-black/80"
                role="dialog"
                aria-modal="true"
                on:click=move |_| open.set(None)
            >
                <img src=item.image alt=item.title class="object-contain rounded-xl max-h-[75vh]"
                    on:click=|e: ev::MouseEvent| e.stop_propagation()/>
                <p class="font-semibold text-white">{item.title}</p>
                <div class="flex gap-4" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                    <button class="py-2 px-4 rounded-full bg-white/10 hover:bg-white/20" aria-label="Previous photo" on:click=move |_| step(false)>"\u{2190}"</button>
                    <button class="py-2 px-4 rounded-full bg-white/10 hover:bg-white/20" aria-label="Close" on:click=move |_| open.set(None)>"\u{2715}"</button>
                    <button class="py-2 px-4 rounded-full bg-white/10 hover:bg-white/20" aria-label="Next photo" on:click=move |_| step(true)>"\u{2192}"</button>
                </div>
            </div>
        })
    };

    view! {
        <Title text=Page::Gallery.title()/>
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                {card::section_heading("Gallery", "Moments from our studios, classes and events.")}
                <div class="flex flex-wrap gap-2 justify-center mb-10 text-sm">
                    {filter_button("All", None)}
                    {filters}
                </div>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">{grid}</div>
            </div>
        </section>
        {lightbox}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_single_item() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
