//! Site-wide color theme.
//!
//! The active [`Theme`] lives in a [`ThemeContext`] provided at the root of
//! the app. In the browser the choice is persisted in `localStorage` and
//! mirrored into the `data-theme` attribute of `<html>`, which the
//! stylesheet keys off. Server rendering always uses the default theme and
//! never touches browser APIs.

use core::{fmt, str::FromStr};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "creators_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Sunset,
    Ocean,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// The switcher cycles through this list in order.
    pub const ALL: [Self; 4] = [Self::Light, Self::Dark, Self::Sunset, Self::Ocean];

    /// Value written to the `data-theme` attribute and to storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Sunset => "Sunset",
            Self::Ocean => "Ocean",
        }
    }

    /// The theme after this one, wrapping back to the first.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub const fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

/// Handle to the active theme, shared through Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(RwSignal<Theme>);

impl ThemeContext {
    pub fn get(self) -> Theme {
        self.0.get()
    }

    pub fn set(self, theme: Theme) {
        self.0.set(theme);
    }

    /// Switches to the next theme in [`Theme::ALL`].
    pub fn cycle(self) {
        self.0.update(|theme| *theme = theme.next());
    }
}

/// Installs the theme context and, in the browser, wires persistence.
pub fn provide_theme() -> ThemeContext {
    let context = ThemeContext(RwSignal::new(Theme::default()));
    provide_context(context);

    // Effects never run during SSR, so storage is only read after hydration.
    Effect::new(move |previous: Option<Theme>| {
        if previous.is_none()
            && let Some(initial) = read_preference()
        {
            context.0.set(initial);
        }
        let theme = context.0.get();
        apply(theme);
        if should_save(previous, theme) {
            save_preference(theme);
        }
        theme
    });

    context
}

/// Only a change after the first run is a user choice worth persisting; the
/// initial value may just be the system preference.
fn should_save(previous: Option<Theme>, current: Theme) -> bool {
    previous.is_some_and(|previous| previous != current)
}

/// Reads the theme context installed by [`provide_theme`].
///
/// Falls back to a detached default so components still render in isolation.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext(RwSignal::new(Theme::default())))
}

/// Stored preference first, then the system dark-mode preference.
fn read_preference() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage()
            && let Ok(Some(raw)) = storage.get_item(STORAGE_KEY)
        {
            match raw.parse() {
                Ok(theme) => return Some(theme),
                Err(err) => leptos::logging::warn!("ignoring stored theme: {err}"),
            }
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Some(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn save_preference(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
