//! Full-bleed canvas background animated by [`crate::effects::particles`].
//!
//! The canvas is rendered empty on the server. After hydration an effect
//! sizes it to its parent, seeds a [`ParticleField`] and draws one frame per
//! `requestAnimationFrame` until the component is unmounted.

use leptos::{html::canvas, prelude::*};

#[cfg(feature = "hydrate")]
use crate::effects::particles::{ParticleConfig, ParticleField};

pub fn component() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(element) = canvas_ref.get() {
            start(element);
        }
    });

    canvas()
        .node_ref(canvas_ref)
        .class("absolute inset-0 w-full h-full pointer-events-none -z-10")
        .attr("aria-hidden", "true")
}

#[cfg(feature = "hydrate")]
fn start(element: web_sys::HtmlCanvasElement) {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    use rand::{SeedableRng, rngs::SmallRng};
    use wasm_bindgen::JsCast;
    use web_sys::CanvasRenderingContext2d;

    struct Scene {
        element: web_sys::HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        field: ParticleField,
    }

    fn schedule(scene: Rc<RefCell<Scene>>, running: Arc<AtomicBool>) {
        request_animation_frame(move || {
            if !running.load(Ordering::Relaxed) {
                return;
            }
            {
                let mut scene = scene.borrow_mut();
                let (width, height) = canvas_size(&scene.element);
                if (width, height) != scene.field.size() {
                    resize_backing(&scene.element, width, height);
                    scene.field.resize(width, height);
                }
                scene.field.step();
                draw(&scene.ctx, &scene.field);
            }
            schedule(scene, running);
        });
    }

    let Some(ctx) = element
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        leptos::logging::warn!("particle background disabled: no 2d canvas context");
        return;
    };

    let (width, height) = canvas_size(&element);
    resize_backing(&element, width, height);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = chrono::Utc::now().timestamp_millis() as u64;
    let field = ParticleField::new(
        width,
        height,
        ParticleConfig::for_area(width, height),
        &mut SmallRng::seed_from_u64(seed),
    );

    let running = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let running = Arc::clone(&running);
        move || running.store(false, Ordering::Relaxed)
    });
    schedule(Rc::new(RefCell::new(Scene { element, ctx, field })), running);
}

#[cfg(feature = "hydrate")]
fn canvas_size(element: &web_sys::HtmlCanvasElement) -> (f64, f64) {
    (
        f64::from(element.client_width().max(1)),
        f64::from(element.client_height().max(1)),
    )
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resize_backing(element: &web_sys::HtmlCanvasElement, width: f64, height: f64) {
    element.set_width(width as u32);
    element.set_height(height as u32);
}

#[cfg(feature = "hydrate")]
fn draw(ctx: &web_sys::CanvasRenderingContext2d, field: &ParticleField) {
    use core::f64::consts::TAU;

    let (width, height) = field.size();
    let radius = field.config().radius;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Matches the `--accent` color of each theme in the stylesheet.
    let color = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute("data-theme"))
        .map_or("255, 207, 74", |theme| match theme.as_str() {
            "light" => "108, 60, 224",
            "ocean" => "56, 208, 200",
            "sunset" => "255, 122, 89",
            _ => "255, 207, 74",
        });

    ctx.set_line_width(1.0);
    for link in field.links() {
        ctx.set_stroke_style_str(&format!("rgba({color}, {:.3})", link.alpha * 0.35));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }

    ctx.set_fill_style_str(&format!("rgba({color}, 0.8)"));
    for particle in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(particle.x, particle.y, radius, 0.0, TAU);
        ctx.fill();
    }
}
