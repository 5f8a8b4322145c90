use crate::{
    components::{icons, theme_switcher},
    routes::{Page, SITE_NAME},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

pub fn component() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu whenever the route changes.
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let links = move |extra: &'static str| {
        Page::ALL
            .into_iter()
            .map(|page| {
                let active = move || page.is_active(&pathname.get());
                view! {
                    <A href=page.path() attr:class=extra>
                        <span class="transition-colors duration-300 hover:text-accent" class:text-accent=active>
                            {page.label()}
                        </span>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 right-0 left-0 z-20 py-4 px-4 md:px-6 bg-surface/80 backdrop-blur-md">
            <div class="container mx-auto max-w-6xl">
                <div class="flex flex-row justify-between items-center">
                    <div class="text-xl font-extrabold tracking-tight sm:text-2xl">
                        <A href="/">{SITE_NAME}</A>
                    </div>
                    <nav class="hidden flex-row gap-6 font-semibold lg:flex" aria-label="Main">
                        {links("")}
                    </nav>
                    <div class="flex flex-row gap-3 items-center">
                        {theme_switcher::component()}
                        <div class="hidden md:block">
                            {icons::component()}
                        </div>
                        <button
                            class="p-2 rounded-md lg:hidden hover:bg-white/10"
                            aria-label="Toggle navigation"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <Show when=move || menu_open.get() fallback=|| "\u{2630}">
                                "\u{2715}"
                            </Show>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="flex flex-col gap-3 pt-4 pb-2 font-semibold lg:hidden" aria-label="Mobile">
                        {links("block py-1")}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
