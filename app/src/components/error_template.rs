//! Error pages: the "page not found" view for unmatched routes and the
//! fallback shown by the top-level error boundary.
//!
//! On the server both set the HTTP status of the response from the first
//! [`AppError`] they find; anything else is reported as a 500.

use http::status::StatusCode;
use leptos::{
    ev,
    html::{button, div, h1, li, p, ul},
    logging,
    prelude::*,
    svg::{path, svg},
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("No event called `{0}`")]
    EventNotFound(String),
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::EventNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Splits captured errors into the ones the app knows and a message per error.
fn summarize(errors: &Errors) -> (Vec<AppError>, Vec<String>) {
    let mut known = Vec::new();
    let mut messages = Vec::new();
    for (_id, err) in errors.clone() {
        if let Some(app_error) = err.downcast_ref::<AppError>() {
            known.push(app_error.clone());
        }
        messages.push(err.to_string());
    }
    (known, messages)
}

fn set_status(known: &[AppError]) {
    let status = known
        .first()
        .map_or(StatusCode::INTERNAL_SERVER_ERROR, AppError::status_code);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            tracing::debug!(%status, "rendering error page");
            response.set_status(status);
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = status;
    }
}

fn home_link() -> impl IntoView {
    div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-accent").child(
        A(AProps::builder()
            .href("/")
            .children(ToChildren::to_children(move || {
                vec![
                    svg().attr("width", "1.1em").attr("height", "1.1em").attr("viewBox", "0 0 24 24").attr("fill", "currentColor").attr("role", "graphics-symbol").child(
                        path().attr("d", "M21 11H6.414l5.293-5.293-1.414-1.414L2.586 12l7.707 7.707 1.414-1.414L6.414 13H21z"),
                    ).into_any(),
                    "Go back home".into_any(),
                ]
            }))
            .build()),
    )
}

/// Renders the error page for errors raised outside any boundary, such as
/// an unmatched route.
pub fn component(outside_errors: Option<Errors>, errors: Option<RwSignal<Errors>>) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .unwrap_or_default();
    let (known, _) = summarize(&errors);
    let known = if known.is_empty() { vec![AppError::NotFound] } else { known };
    set_status(&known);

    div().class("grid place-content-center px-4 min-h-[60vh] antialiased").child((
        h1().class("mb-6 text-center text-3xl font-bold").child(if known.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || known.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    let error_code = error.status_code();
                    h1().class("text-xl tracking-widest uppercase text-muted").child(format!("{error_code}| {error}"))
                })
                .build(),
        ),
        home_link(),
    ))
}

/// Fallback for the top-level `ErrorBoundary`.
///
/// Logs every captured error to the console. "Try again" clears the error
/// set, which makes the boundary render its children again.
pub fn boundary_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let (known, messages) = summarize(&errors.get_untracked());
    for message in &messages {
        logging::error!("render error: {message}");
    }
    set_status(&known);

    let reset = {
        let errors = errors.clone();
        move |_| errors.set(Errors::default())
    };

    div().class("grid place-content-center px-4 min-h-[60vh] text-center antialiased").child((
        h1().class("mb-4 text-3xl font-bold").child("Something went wrong"),
        p().class("mb-4 text-muted").child("This part of the page could not be shown."),
        ul().class("mb-6 text-sm text-muted").child(
            messages.into_iter().map(|message| li().child(message)).collect_view(),
        ),
        button()
            .on(ev::click, reset)
            .class("py-2 px-6 mx-auto font-semibold rounded-full transition-colors bg-accent text-on-accent hover:opacity-90")
            .child("Try again"),
        home_link(),
    ))
}
