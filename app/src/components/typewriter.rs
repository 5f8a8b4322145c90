//! Text that types itself out, driven by [`crate::effects::typewriter`].

use leptos::{html::span, prelude::*};

pub fn component(phrases: &'static [&'static str]) -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| start(phrases, text));
    #[cfg(not(feature = "hydrate"))]
    let _ = phrases;

    span().child((
        span().child(move || text.get()),
        span().class("ml-0.5 animate-pulse text-accent").attr("aria-hidden", "true").child("|"),
    ))
}

#[cfg(feature = "hydrate")]
fn start(phrases: &'static [&'static str], text: RwSignal<String>) {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    use crate::effects::typewriter::Typewriter;

    fn schedule(typewriter: Rc<RefCell<Typewriter>>, text: RwSignal<String>, running: Arc<AtomicBool>) {
        let delay = typewriter.borrow().delay();
        set_timeout(
            move || {
                if !running.load(Ordering::Relaxed) {
                    return;
                }
                let next = typewriter.borrow_mut().tick();
                text.set(next.to_owned());
                schedule(typewriter, text, running);
            },
            delay,
        );
    }

    let running = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let running = Arc::clone(&running);
        move || running.store(false, Ordering::Relaxed)
    });
    schedule(Rc::new(RefCell::new(Typewriter::new(phrases))), text, running);
}
