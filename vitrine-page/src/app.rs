//! Page controller: builds the app context, mounts every subsystem, owns
//! the event listeners and the frame loop, and tears it all down again.

use std::{cell::RefCell, rc::Rc};

use gloo::{events::EventListener, timers::callback::Timeout};
use vitrine_motion::{Channels, CompleteFn, Ease, StylePoint, Tween};
use web_sys::console;

use crate::{
    config::PageConfig, context::AppContext, decor, effects, error::Error, form, hero::HeroStage,
    js, nav, raf::RenderLoop, selectors, stage,
};

/// The mounted page.
///
/// Owns everything the wiring created: dropping the handle (or calling
/// [`FashionPage::unmount`]) stops the frame loop, unregisters every
/// listener and cancels pending timers. `unmount` additionally releases
/// the hero scene's GL resources.
pub struct FashionPage {
    ctx: AppContext,
    hero: Rc<RefCell<Option<HeroStage>>>,
    listeners: Vec<EventListener>,
    render_loop: RenderLoop,
    loading_timer: Option<Timeout>,
}

impl FashionPage {
    /// Mounts every subsystem against the current document and starts the
    /// frame loop.
    ///
    /// Only a missing window or document is an error; individually missing
    /// page elements silently disable their feature, and a hero scene that
    /// fails to initialize degrades to a console warning.
    pub fn mount(config: PageConfig) -> Result<Self, Error> {
        let window = js::window()?;
        let document = js::document()?;

        let ctx = AppContext::new(js_sys::Date::now() as u32);
        let mut listeners = Vec::new();

        listeners.extend(nav::wire_menu(&ctx, &config));
        listeners.extend(nav::wire_scroll(&config));
        listeners.extend(nav::wire_anchor_scrolling(&ctx, &config));

        let hero = match HeroStage::mount(&config.hero_container, config.max_hero_size_px) {
            Ok(stage) => stage,
            Err(e) => {
                console::warn_1(&format!("hero scene disabled: {e}").into());
                None
            },
        };
        let hero = Rc::new(RefCell::new(hero));

        listeners.extend(effects::wire_scroll_entrances(&ctx, &config));
        listeners.extend(effects::wire_card_hovers(&ctx, &config));
        listeners.extend(effects::wire_avatar_controls(&ctx, &config));
        listeners.extend(effects::wire_parallax(&config));
        listeners.extend(decor::wire_ripples(&ctx, &config));
        listeners.extend(selectors::wire_selector_groups(&config));
        listeners.extend(form::wire_newsletter(&ctx, &config));
        decor::spawn_particles(&ctx, &config);

        {
            let hero = hero.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Some(stage) = hero.borrow_mut().as_mut() {
                    stage.resize();
                }
            }));
        }

        // backgrounded tabs freeze the scheduler; the frame loop itself
        // keeps running and re-renders the frozen pose
        {
            let scheduler = ctx.scheduler();
            let doc = document.clone();
            listeners.push(EventListener::new(&document, "visibilitychange", move |_| {
                let mut scheduler = scheduler.borrow_mut();
                if doc.hidden() {
                    scheduler.pause();
                } else {
                    scheduler.resume();
                }
            }));
        }

        let render_loop = {
            let ctx = ctx.clone();
            let hero = hero.clone();
            RenderLoop::start(move |dt| {
                let completions = ctx.timeline.borrow_mut().advance(dt);
                for complete in completions {
                    complete();
                }
                if let Some(stage) = hero.borrow_mut().as_mut() {
                    stage.frame(dt, !ctx.loading.get());
                }
            })
        };

        let loading_timer = Some(schedule_loading_fade(&ctx, &config));

        console::log_1(&"🌟 AI Virtual Fashion Hub initialized".into());
        console::log_1(&"🚀 Powered by Rust, WebAssembly and WebGL2".into());

        Ok(Self {
            ctx,
            hero,
            listeners,
            render_loop,
            loading_timer,
        })
    }

    /// Pauses the animation scheduler. The hero scene keeps rendering its
    /// frozen pose.
    pub fn pause(&self) {
        self.ctx.scheduler().borrow_mut().pause();
    }

    /// Resumes a paused scheduler.
    pub fn resume(&self) {
        self.ctx.scheduler().borrow_mut().resume();
    }

    /// Stops the frame loop, drops every listener and pending timer, and
    /// deletes the hero scene's GL resources.
    pub fn unmount(mut self) {
        self.render_loop.stop();
        self.listeners.clear();
        self.loading_timer.take();
        if let Some(stage) = self.hero.borrow_mut().take() {
            stage.unmount();
        }
    }
}

/// Schedules the loading-overlay fade. Once the fade completes the overlay
/// goes `display: none`, the loading flag flips, and the hero entrances
/// play. A missing overlay skips the fade but still unlocks the page.
fn schedule_loading_fade(ctx: &AppContext, config: &PageConfig) -> Timeout {
    let ctx = ctx.clone();
    let config = config.clone();
    let delay = config.loading_delay_ms;

    Timeout::new(delay, move || {
        let overlay = js::try_query(&config.loading_overlay);

        let finish: CompleteFn = {
            let ctx = ctx.clone();
            let config = config.clone();
            let overlay = overlay.clone();
            Box::new(move || {
                if let Some(overlay) = &overlay {
                    stage::set_style(overlay, "display", "none");
                }
                ctx.loading.set(false);
                effects::play_hero_entrances(&ctx, &config);
            })
        };

        match overlay {
            Some(overlay) => {
                ctx.timeline.borrow_mut().spawn_then(
                    overlay_fade(),
                    stage::element_applier(&overlay),
                    finish,
                );
            },
            None => finish(),
        }
    })
}

fn overlay_fade() -> Tween {
    Tween::fromto(
        StylePoint::resting(),
        StylePoint::resting().opacity(0.0),
        Channels::OPACITY,
        1.0,
    )
    .ease(Ease::CubicOut)
}
