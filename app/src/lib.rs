#![recursion_limit = "256"]

// Core application modules and components
use crate::{
    components::{error_template, header, icons},
    routes::{Page, SITE_NAME},
};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, main, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod about;
pub mod components;
mod contact;
pub mod content;
pub mod csp;
pub mod effects;
mod events;
mod gallery;
mod home;
mod membership;
pub mod routes;
mod services;
pub mod theme;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    csp::provide_page_policy();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta()
                .name("description")
                .content("Creators Guild is a community and professional association for content creators."),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/creators.css")
                    .build(),
            ),
            Title(TitleProps::builder().text(Page::Home.title()).build()),
        )),
        body().class("bg-surface text-body").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    theme::provide_theme();

    view! {
        <Router>
            <div class="overflow-x-hidden min-h-screen font-poppins">
                {header::component}
                <main class="pt-20 pb-28">
                    <ErrorBoundary fallback=error_template::boundary_fallback>
                        <FlatRoutes fallback=|| {
                            let mut outside_errors = Errors::default();
                            outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                            error_template::component(Some(outside_errors), None)
                        }>
                            <Route path=StaticSegment(Page::Home.segment()) view=home::component/>
                            <Route path=StaticSegment(Page::About.segment()) view=about::component/>
                            <Route path=StaticSegment(Page::Services.segment()) view=services::component/>
                            <Route path=StaticSegment(Page::Events.segment()) view=events::component/>
                            <Route path=(StaticSegment(Page::Events.segment()), ParamSegment("slug")) view=events::detail/>
                            <Route path=StaticSegment(Page::Gallery.segment()) view=gallery::component/>
                            <Route path=StaticSegment(Page::Membership.segment()) view=membership::component/>
                            <Route path=StaticSegment(Page::Contact.segment()) view=contact::component/>
                        </FlatRoutes>
                    </ErrorBoundary>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 px-4 border-t border-white/10 bg-surface")
        .child(
            div().class("flex flex-col gap-2 justify-center items-center text-sm").child((
                icons::component(),
                p().class("text-muted").child((
                    a()
                        .href(content::CONTACT.mailto())
                        .class("hover:underline text-accent")
                        .child(content::CONTACT.email),
                    format!(" \u{b7} \u{a9} {} {SITE_NAME}", Utc::now().year()),
                )),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("creators").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_footer_links_contact_and_socials() {
        let html = Owner::new().with(|| footer_component().to_html());
        assert!(html.contains(&content::CONTACT.mailto()));
        assert!(html.contains(SITE_NAME));
        for link in content::SOCIAL_LINKS {
            assert!(html.contains(link.url), "missing {}", link.name);
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_every_page_has_a_route() {
        let paths: Vec<String> = leptos_axum::generate_route_list(component)
            .into_iter()
            .map(|route| route.path().to_owned())
            .collect();
        for page in Page::ALL {
            assert!(paths.iter().any(|p| p == page.path()), "no route for {}", page.path());
        }
        assert!(paths.iter().any(|p| p == "/events/{slug}"));
    }
}
