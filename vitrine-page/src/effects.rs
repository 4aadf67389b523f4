//! Entrance choreography and ambient feedback: the hero copy reveal, the
//! scroll-gated section entrances, the about-paragraph typewriter, parallax
//! backdrops, collection card hovers, and the avatar control buttons.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo::{events::EventListener, timers::callback::Interval};
use vitrine_motion::{
    Channels, Ease, GateEvent, ScrollGate, StylePoint, Tween, TweenId, Typewriter,
};
use web_sys::Element;

use crate::{config::PageConfig, context::AppContext, js, stage};

/// Avatar glyphs the outfit button cycles through.
const WARDROBE: [&str; 5] = ["🧑\u{200D}💼", "🧑\u{200D}🎨", "🧑\u{200D}🔬", "🧑\u{200D}🚀", "🧑\u{200D}🎤"];

const ENTRANCE_FRACTION: f64 = 0.8;
const FOOTER_FRACTION: f64 = 0.9;
const TYPEWRITER_FRACTION: f64 = 0.7;

/// Plays the hero copy entrances: heading, paragraph, then the button row.
/// Called once, after the loading overlay has finished fading out.
pub(crate) fn play_hero_entrances(ctx: &AppContext, config: &PageConfig) {
    let entries = [
        (config.hero_heading.as_str(), 100.0, 1.5, 0.0),
        (config.hero_paragraph.as_str(), 50.0, 1.2, 0.3),
        (config.hero_button_row.as_str(), 30.0, 1.0, 0.6),
    ];

    let mut timeline = ctx.timeline.borrow_mut();
    for (selector, rise, duration, delay) in entries {
        let Some(target) = js::try_query(selector) else {
            continue;
        };
        timeline.spawn(
            rise_in(rise, duration).delay(delay).ease(Ease::QuartOut),
            stage::element_applier(&target),
        );
    }
}

/// One scroll-gated section entrance: a trigger element whose viewport
/// position drives the gate, and the targets the entrance tween plays on.
struct Entrance {
    trigger: Element,
    gate: ScrollGate,
    targets: Vec<Element>,
    tween: Tween,
    stagger: f32,
    // in-flight tween handles, cancelled on replay or reset
    active: Vec<TweenId>,
}

impl Entrance {
    fn evaluate(&mut self, ctx: &AppContext, viewport_height: f64) {
        let top = self.trigger.get_bounding_client_rect().top();
        match self.gate.evaluate(top, viewport_height) {
            Some(GateEvent::Enter) => {
                let mut timeline = ctx.timeline.borrow_mut();
                for id in self.active.drain(..) {
                    timeline.cancel(id);
                }
                let appliers: Vec<_> = self.targets.iter().map(stage::element_applier).collect();
                self.active = timeline.spawn_batch(&self.tween, self.stagger, appliers);
            },
            Some(GateEvent::Reset) => {
                let mut timeline = ctx.timeline.borrow_mut();
                for id in self.active.drain(..) {
                    timeline.cancel(id);
                }
                drop(timeline);

                // snap back to the off pose so the next entry replays
                let off = self.tween.sample(0.0).point;
                for target in &self.targets {
                    stage::apply_style(target, off, self.tween.channels());
                }
            },
            None => {},
        }
    }
}

fn push_entrance(
    list: &mut Vec<Entrance>,
    trigger: Option<Element>,
    targets: Vec<Element>,
    tween: Tween,
    stagger: f32,
    fraction: f64,
) {
    let Some(trigger) = trigger else { return };
    if targets.is_empty() {
        return;
    }
    list.push(Entrance {
        trigger,
        gate: ScrollGate::replaying(fraction),
        targets,
        tween,
        stagger,
        active: Vec::new(),
    });
}

fn build_entrances(config: &PageConfig) -> Vec<Entrance> {
    let one = |selector: &str| js::try_query(selector).into_iter().collect::<Vec<_>>();

    let mut list = Vec::new();
    let about = js::by_id("about");

    push_entrance(
        &mut list,
        about.clone(),
        one(&config.about_panel),
        slide_in(-100.0, 1.0),
        0.0,
        ENTRANCE_FRACTION,
    );
    push_entrance(
        &mut list,
        about,
        one(&config.about_text),
        slide_in(100.0, 1.0).delay(0.3),
        0.0,
        ENTRANCE_FRACTION,
    );
    push_entrance(
        &mut list,
        js::by_id("collections"),
        js::query_all(&config.grid_cards),
        rise_in(100.0, 0.8),
        0.2,
        ENTRANCE_FRACTION,
    );
    push_entrance(
        &mut list,
        js::by_id("tryon"),
        one(&config.avatar_container),
        grow_in(0.8, 1.0),
        0.0,
        ENTRANCE_FRACTION,
    );
    push_entrance(
        &mut list,
        js::by_id("contact"),
        one(&config.newsletter_form),
        rise_in(50.0, 1.0),
        0.0,
        ENTRANCE_FRACTION,
    );
    push_entrance(
        &mut list,
        js::try_query(&config.footer),
        one(&config.footer),
        rise_in(100.0, 1.0),
        0.0,
        FOOTER_FRACTION,
    );

    list
}

/// One-shot typewriter reveal of the about paragraph. The full text is
/// captured and blanked at wiring time; the first gate entry re-emits it
/// one grapheme per interval tick.
struct Typist {
    trigger: Element,
    paragraph: Element,
    gate: ScrollGate,
    typewriter: Rc<RefCell<Typewriter>>,
    ticker: Rc<RefCell<Option<Interval>>>,
    interval_ms: u32,
}

impl Typist {
    fn evaluate(&mut self, viewport_height: f64) {
        let top = self.trigger.get_bounding_client_rect().top();
        if self.gate.evaluate(top, viewport_height) != Some(GateEvent::Enter) {
            return;
        }

        let paragraph = self.paragraph.clone();
        let typewriter = self.typewriter.clone();
        // the callback only holds a weak handle to its own interval, so
        // dropping the Typist still cancels a reveal in progress
        let ticker = Rc::downgrade(&self.ticker);
        let handle = Interval::new(self.interval_ms, move || {
            match typewriter.borrow_mut().tick() {
                Some(prefix) => paragraph.set_text_content(Some(prefix)),
                None => {
                    if let Some(ticker) = ticker.upgrade() {
                        ticker.borrow_mut().take();
                    }
                },
            }
        });
        *self.ticker.borrow_mut() = Some(handle);
    }
}

fn build_typist(config: &PageConfig) -> Option<Typist> {
    let trigger = js::by_id("about")?;
    let paragraph = js::try_query(&config.about_paragraph)?;
    let text = paragraph.text_content().unwrap_or_default();
    // blank from capture until the reveal starts typing
    paragraph.set_text_content(Some(""));
    Some(Typist {
        trigger,
        paragraph,
        gate: ScrollGate::once(TYPEWRITER_FRACTION),
        typewriter: Rc::new(RefCell::new(Typewriter::new(&text))),
        ticker: Rc::new(RefCell::new(None)),
        interval_ms: config.typewriter_interval_ms,
    })
}

/// Wires the scroll-gated entrances and the typewriter. Gates are settled
/// once for the initial scroll position, then re-evaluated per scroll event.
pub(crate) fn wire_scroll_entrances(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let Ok(window) = js::window() else {
        return Vec::new();
    };

    let mut entrances = build_entrances(config);
    let mut typist = build_typist(config);

    let viewport = js::viewport_height();
    for entrance in &mut entrances {
        entrance.evaluate(ctx, viewport);
    }
    if let Some(typist) = &mut typist {
        typist.evaluate(viewport);
    }

    let ctx = ctx.clone();
    let listener = EventListener::new(&window, "scroll", move |_| {
        let viewport = js::viewport_height();
        for entrance in &mut entrances {
            entrance.evaluate(&ctx, viewport);
        }
        if let Some(typist) = &mut typist {
            typist.evaluate(viewport);
        }
    });
    vec![listener]
}

/// Parallax-marked elements track the scroll offset at their own speed,
/// written directly rather than tweened.
pub(crate) fn wire_parallax(config: &PageConfig) -> Vec<EventListener> {
    let Ok(window) = js::window() else {
        return Vec::new();
    };

    let targets: Vec<(Element, f64)> = js::query_all(&config.parallax)
        .into_iter()
        .map(|element| {
            let speed = element
                .get_attribute("data-speed")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0.5);
            (element, speed)
        })
        .collect();
    if targets.is_empty() {
        return Vec::new();
    }

    let listener = EventListener::new(&window, "scroll", move |_| {
        let scrolled = js::scroll_y();
        for (element, speed) in &targets {
            stage::apply_style(
                element,
                StylePoint::resting().y((scrolled * speed) as f32),
                Channels::Y,
            );
        }
    });
    vec![listener]
}

/// Collection cards grow slightly under the pointer.
pub(crate) fn wire_card_hovers(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for card in js::query_all(&config.cards) {
        {
            let ctx = ctx.clone();
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mouseenter", move |_| {
                ctx.timeline.borrow_mut().spawn(
                    scale_shift(1.0, 1.05, 0.3).ease(Ease::CubicOut),
                    stage::element_applier(&target),
                );
            }));
        }
        {
            let ctx = ctx.clone();
            let target = card.clone();
            listeners.push(EventListener::new(&card, "mouseleave", move |_| {
                ctx.timeline.borrow_mut().spawn(
                    scale_shift(1.05, 1.0, 0.3).ease(Ease::CubicOut),
                    stage::element_applier(&target),
                );
            }));
        }
    }
    listeners
}

/// Try-on avatar controls: outfit swap, full-turn rotate, zoom toggle.
pub(crate) fn wire_avatar_controls(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let glyph = js::try_query(&config.avatar_glyph);

    // outfit swap: shrink away, swap the glyph, grow back
    if let (Some(button), Some(glyph)) = (js::try_query(&config.outfit_button), glyph.clone()) {
        let ctx = ctx.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let outfit = ctx
                .rng
                .borrow_mut()
                .pick(&WARDROBE)
                .copied()
                .unwrap_or(WARDROBE[0]);

            let grow_back = {
                let ctx = ctx.clone();
                let glyph = glyph.clone();
                Box::new(move || {
                    glyph.set_text_content(Some(outfit));
                    ctx.timeline
                        .borrow_mut()
                        .spawn(scale_shift(0.0, 1.0, 0.2), stage::element_applier(&glyph));
                })
            };
            ctx.timeline.borrow_mut().spawn_then(
                scale_shift(1.0, 0.0, 0.2),
                stage::element_applier(&glyph),
                grow_back,
            );
        }));
    }

    // rotate accumulates full turns so repeated clicks keep spinning forward
    if let (Some(button), Some(glyph)) = (js::try_query(&config.rotate_button), glyph) {
        let ctx = ctx.clone();
        let heading = Cell::new(0.0f32);
        listeners.push(EventListener::new(&button, "click", move |_| {
            let from = heading.get();
            let to = from + 360.0;
            heading.set(to);
            ctx.timeline.borrow_mut().spawn(
                Tween::fromto(
                    StylePoint::resting().rotation(from),
                    StylePoint::resting().rotation(to),
                    Channels::ROTATION,
                    1.0,
                )
                .ease(Ease::CubicOut),
                stage::element_applier(&glyph),
            );
        }));
    }

    if let (Some(button), Some(container)) = (
        js::try_query(&config.zoom_button),
        js::try_query(&config.avatar_container),
    ) {
        let ctx = ctx.clone();
        let zoomed = Cell::new(false);
        listeners.push(EventListener::new(&button, "click", move |_| {
            let (from, to) = if zoomed.get() { (1.2, 1.0) } else { (1.0, 1.2) };
            zoomed.set(!zoomed.get());
            ctx.timeline.borrow_mut().spawn(
                scale_shift(from, to, 0.5).ease(Ease::CubicOut),
                stage::element_applier(&container),
            );
        }));
    }

    listeners
}

// entrance tweens ride the default ease
fn rise_in(y: f32, duration: f32) -> Tween {
    Tween::fromto(
        StylePoint::resting().y(y).opacity(0.0),
        StylePoint::resting(),
        Channels::Y | Channels::OPACITY,
        duration,
    )
}

fn slide_in(x: f32, duration: f32) -> Tween {
    Tween::fromto(
        StylePoint::resting().x(x).opacity(0.0),
        StylePoint::resting(),
        Channels::X | Channels::OPACITY,
        duration,
    )
}

fn grow_in(scale: f32, duration: f32) -> Tween {
    Tween::fromto(
        StylePoint::resting().scale(scale).opacity(0.0),
        StylePoint::resting(),
        Channels::SCALE | Channels::OPACITY,
        duration,
    )
}

fn scale_shift(from: f32, to: f32, duration: f32) -> Tween {
    Tween::fromto(
        StylePoint::resting().scale(from),
        StylePoint::resting().scale(to),
        Channels::SCALE,
        duration,
    )
}
