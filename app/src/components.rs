//! Reusable UI pieces shared by the pages.
//!
//! Each sub-module exposes a `component` function (plus helpers where a
//! page needs them), following the same shape as the page modules.

pub mod card;
pub mod error_template;
pub mod header;
pub mod icons;
pub mod loader;
pub mod modal;
pub mod particles;
pub mod theme_switcher;
pub mod typewriter;
