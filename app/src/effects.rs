//! Engines behind the decorative animations.
//!
//! These hold no browser state: the components in `components::particles`
//! and `components::typewriter` own the canvas and timers and only call into
//! the engines to advance a frame.

pub mod particles;
pub mod typewriter;
