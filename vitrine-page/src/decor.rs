//! Decorative flourishes: click ripples and the floating particle layer.

use gloo::events::EventListener;
use js_sys::wasm_bindgen::JsCast;
use vitrine_motion::{Channels, Ease, PARTICLE_COUNT, StylePoint, Tween, scatter};
use web_sys::{Element, Event, MouseEvent};

use crate::{config::PageConfig, context::AppContext, js, stage};

/// Expanding, fading circle centered on the click point of any
/// ripple-marked element. The span removes itself once the tween finishes.
pub(crate) fn wire_ripples(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for button in js::query_all(&config.ripples) {
        let ctx = ctx.clone();
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            spawn_ripple(&ctx, &target, event);
        }));
    }
    listeners
}

fn spawn_ripple(ctx: &AppContext, button: &Element, event: &MouseEvent) {
    let Ok(document) = js::document() else { return };
    let Ok(span) = document.create_element("span") else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    let css = format!(
        "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
         background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
         pointer-events: none; z-index: 1;"
    );
    let _ = span.set_attribute("style", &css);
    if button.append_child(&span).is_err() {
        return;
    }

    let remove = {
        let span = span.clone();
        Box::new(move || span.remove())
    };
    ctx.timeline.borrow_mut().spawn_then(
        Tween::fromto(
            StylePoint::resting().scale(0.0),
            StylePoint::resting().scale(1.0).opacity(0.0),
            Channels::SCALE | Channels::OPACITY,
            0.6,
        )
        .ease(Ease::CubicOut),
        stage::element_applier(&span),
        remove,
    );
}

/// Fills the particle layer with its one-time set of floating particles.
/// They animate via the page stylesheet and are never removed or recycled.
pub(crate) fn spawn_particles(ctx: &AppContext, config: &PageConfig) {
    let Some(layer) = js::try_query(&config.particle_layer) else {
        return;
    };
    let Ok(document) = js::document() else { return };

    let specs = scatter(&mut ctx.rng.borrow_mut(), PARTICLE_COUNT);
    for spec in specs {
        let Ok(particle) = document.create_element("div") else {
            continue;
        };
        particle.set_class_name("particle");
        stage::set_style(&particle, "left", &format!("{}%", spec.left_pct));
        stage::set_style(&particle, "animation-delay", &format!("{}s", spec.delay_s));
        stage::set_style(&particle, "animation-duration", &format!("{}s", spec.duration_s));
        stage::set_style(&particle, "background", &format!("#{:06X}", spec.color));
        let _ = layer.append_child(&particle);
    }
}
