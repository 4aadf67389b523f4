use std::{cell::RefCell, rc::Rc};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::wasm_bindgen::JsCast;
use vitrine_motion::{
    Channels, Ease, SectionRect, StylePoint, Tween, TweenId, active_index, navbar_solid,
};
use web_sys::{Element, Event, KeyboardEvent};

use crate::{config::PageConfig, context::AppContext, js, stage};

const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";
const HIGHLIGHT_CLASS: &str = "text-golden";
const BASE_CLASS: &str = "text-white";

const NAVBAR_SOLID_BG: &str = "rgba(10, 10, 10, 0.95)";
const NAVBAR_CLEAR_BG: &str = "rgba(255, 255, 255, 0.1)";

const LINK_GOLD: &str = "#FFD700";
const LINK_WHITE: &str = "#ffffff";
const LINK_GLOW: &str = "0 0 10px rgba(255, 215, 0, 0.6)";

const BACK_OVERSHOOT: f32 = 1.7;

/// Result of a menu-button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChange {
    Opened,
    Closed,
}

/// Open/closed latch for the mobile menu overlay.
///
/// Every trigger funnels through here, so the latch stays the single
/// source of truth independent of tween timing: button activation toggles,
/// everything else only closes.
#[derive(Debug, Default)]
pub(crate) struct MenuFsm {
    open: bool,
}

impl MenuFsm {
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Menu-button activation, by pointer or by Enter/Space.
    pub(crate) fn button_activated(&mut self) -> MenuChange {
        self.open = !self.open;
        if self.open {
            MenuChange::Opened
        } else {
            MenuChange::Closed
        }
    }

    /// Escape, a pointer interaction outside the menu, or an in-menu link
    /// activation. No-op when already closed.
    pub(crate) fn close_requested(&mut self) -> Option<MenuChange> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(MenuChange::Closed)
    }
}

#[derive(Default)]
struct MenuShared {
    fsm: MenuFsm,
    // pending panel-exit tween; reopening cancels it so a stale completion
    // cannot hide a menu that was just reopened
    close_panel: Option<TweenId>,
}

/// Wires the mobile menu: the toggle button (pointer and keyboard), the
/// Escape and outside-pointer closers, per-link close-and-feedback, and the
/// button's hover/press tweens. Missing button or menu disables the lot.
pub(crate) fn wire_menu(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let button = js::try_query(&config.menu_button);
    let menu = js::try_query(&config.menu);
    let (Some(button), Some(menu)) = (button, menu) else {
        return Vec::new();
    };

    let shared = Rc::new(RefCell::new(MenuShared::default()));
    let mut listeners = Vec::new();

    wire_button_feedback(ctx, &button, &mut listeners);

    // toggle by pointer
    {
        let ctx = ctx.clone();
        let shared = shared.clone();
        let btn = button.clone();
        let panel = menu.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            toggle_menu(&ctx, &shared, &btn, &panel);
        }));
    }

    // toggle by keyboard
    {
        let ctx = ctx.clone();
        let shared = shared.clone();
        let btn = button.clone();
        let panel = menu.clone();
        listeners.push(EventListener::new_with_options(
            &button,
            "keydown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                if key == "Enter" || key == " " {
                    event.prevent_default();
                    toggle_menu(&ctx, &shared, &btn, &panel);
                }
            },
        ));
    }

    if let Ok(document) = js::document() {
        // Escape closes an open menu
        {
            let ctx = ctx.clone();
            let shared = shared.clone();
            let btn = button.clone();
            let panel = menu.clone();
            listeners.push(EventListener::new(&document, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() == "Escape" {
                    request_close(&ctx, &shared, &btn, &panel);
                }
            }));
        }

        // so does any pointer interaction outside both the button and menu
        {
            let ctx = ctx.clone();
            let shared = shared.clone();
            let btn = button.clone();
            let panel = menu.clone();
            listeners.push(EventListener::new(&document, "click", move |event: &Event| {
                if !shared.borrow().fsm.is_open() {
                    return;
                }
                let target = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                let inside =
                    |el: &Element| target.as_ref().is_some_and(|node| el.contains(Some(node)));
                if inside(&panel) || inside(&btn) {
                    return;
                }
                request_close(&ctx, &shared, &btn, &panel);
            }));
        }
    }

    for link in js::query_all_in(&menu, "a") {
        // activating a link dismisses the menu
        {
            let ctx = ctx.clone();
            let shared = shared.clone();
            let btn = button.clone();
            let panel = menu.clone();
            listeners.push(EventListener::new(&link, "click", move |_| {
                request_close(&ctx, &shared, &btn, &panel);
            }));
        }
        wire_link_feedback(ctx, &link, &mut listeners);
    }

    listeners
}

fn toggle_menu(
    ctx: &AppContext,
    shared: &Rc<RefCell<MenuShared>>,
    button: &Element,
    menu: &Element,
) {
    let change = shared.borrow_mut().fsm.button_activated();
    match change {
        MenuChange::Opened => open_menu(ctx, shared, button, menu),
        MenuChange::Closed => close_menu(ctx, shared, button, menu),
    }
}

fn request_close(
    ctx: &AppContext,
    shared: &Rc<RefCell<MenuShared>>,
    button: &Element,
    menu: &Element,
) {
    if shared.borrow_mut().fsm.close_requested().is_some() {
        close_menu(ctx, shared, button, menu);
    }
}

/// Reveals the panel, marks the button active, quarter-turns its icon, and
/// plays the panel plus staggered item entrances.
fn open_menu(
    ctx: &AppContext,
    shared: &Rc<RefCell<MenuShared>>,
    button: &Element,
    menu: &Element,
) {
    if let Some(id) = shared.borrow_mut().close_panel.take() {
        ctx.timeline.borrow_mut().cancel(id);
    }

    let _ = menu.class_list().remove_1(HIDDEN_CLASS);
    let _ = button.class_list().add_1(ACTIVE_CLASS);

    let mut timeline = ctx.timeline.borrow_mut();

    if let Some(icon) = button.query_selector("span").ok().flatten() {
        timeline.spawn(
            spin_tween(0.0, 90.0, 1.0, 0.9, 0.3, Ease::CubicOut),
            stage::element_applier(&icon),
        );
    }

    timeline.spawn(panel_enter(), stage::element_applier(menu));

    let items = js::query_all_in(menu, "a");
    let appliers: Vec<_> = items.iter().map(stage::element_applier).collect();
    timeline.spawn_batch(&item_enter(), 0.1, appliers);
}

/// Unmarks the button, reverses its icon, plays the panel exit, and hides
/// the container only once the exit completes.
fn close_menu(
    ctx: &AppContext,
    shared: &Rc<RefCell<MenuShared>>,
    button: &Element,
    menu: &Element,
) {
    let _ = button.class_list().remove_1(ACTIVE_CLASS);

    let mut timeline = ctx.timeline.borrow_mut();

    if let Some(icon) = button.query_selector("span").ok().flatten() {
        timeline.spawn(
            spin_tween(90.0, 0.0, 0.9, 1.0, 0.3, Ease::CubicOut),
            stage::element_applier(&icon),
        );
    }

    let hide = {
        let menu = menu.clone();
        Box::new(move || {
            let _ = menu.class_list().add_1(HIDDEN_CLASS);
        })
    };
    let id = timeline.spawn_then(panel_exit(), stage::element_applier(menu), hide);
    shared.borrow_mut().close_panel = Some(id);
}

/// Hover and press feedback on the menu button and its icon glyph.
fn wire_button_feedback(ctx: &AppContext, button: &Element, listeners: &mut Vec<EventListener>) {
    let icon = button.query_selector("span").ok().flatten();

    {
        let ctx = ctx.clone();
        let btn = button.clone();
        let icon = icon.clone();
        listeners.push(EventListener::new(&button, "mouseenter", move |_| {
            let mut timeline = ctx.timeline.borrow_mut();
            timeline.spawn(
                scale_tween(1.0, 1.1, 0.3, Ease::BackOut(BACK_OVERSHOOT)),
                stage::element_applier(&btn),
            );
            if let Some(icon) = &icon {
                timeline.spawn(
                    spin_tween(0.0, 180.0, 1.0, 1.2, 0.4, Ease::BackOut(BACK_OVERSHOOT)),
                    stage::element_applier(icon),
                );
            }
        }));
    }

    // leaving only rests the button while the menu is closed; an open
    // menu keeps the button in its raised pose
    {
        let ctx = ctx.clone();
        let btn = button.clone();
        let icon = icon.clone();
        listeners.push(EventListener::new(&button, "mouseleave", move |_| {
            if btn.class_list().contains(ACTIVE_CLASS) {
                return;
            }
            let mut timeline = ctx.timeline.borrow_mut();
            timeline.spawn(
                scale_tween(1.1, 1.0, 0.3, Ease::CubicOut),
                stage::element_applier(&btn),
            );
            if let Some(icon) = &icon {
                timeline.spawn(
                    spin_tween(180.0, 0.0, 1.2, 1.0, 0.4, Ease::CubicOut),
                    stage::element_applier(icon),
                );
            }
        }));
    }

    {
        let ctx = ctx.clone();
        let btn = button.clone();
        listeners.push(EventListener::new(&button, "mousedown", move |_| {
            ctx.timeline.borrow_mut().spawn(
                scale_tween(1.1, 0.95, 0.1, Ease::CubicOut),
                stage::element_applier(&btn),
            );
        }));
    }

    {
        let ctx = ctx.clone();
        let btn = button.clone();
        listeners.push(EventListener::new(&button, "mouseup", move |_| {
            ctx.timeline.borrow_mut().spawn(
                scale_tween(0.95, 1.1, 0.2, Ease::BackOut(BACK_OVERSHOOT)),
                stage::element_applier(&btn),
            );
        }));
    }
}

/// Nudge-and-glow feedback on each menu link.
fn wire_link_feedback(ctx: &AppContext, link: &Element, listeners: &mut Vec<EventListener>) {
    {
        let ctx = ctx.clone();
        let target = link.clone();
        listeners.push(EventListener::new(link, "mouseenter", move |_| {
            stage::set_style(&target, "color", LINK_GOLD);
            stage::set_style(&target, "text-shadow", LINK_GLOW);
            ctx.timeline.borrow_mut().spawn(
                slide_x(0.0, 10.0, 0.3),
                stage::element_applier(&target),
            );
        }));
    }

    {
        let ctx = ctx.clone();
        let target = link.clone();
        listeners.push(EventListener::new(link, "mouseleave", move |_| {
            stage::set_style(&target, "color", LINK_WHITE);
            stage::set_style(&target, "text-shadow", "none");
            ctx.timeline.borrow_mut().spawn(
                slide_x(10.0, 0.0, 0.3),
                stage::element_applier(&target),
            );
        }));
    }
}

/// Window scroll wiring: navbar backdrop switch plus the active-section
/// highlight pass.
pub(crate) fn wire_scroll(config: &PageConfig) -> Vec<EventListener> {
    let Ok(window) = js::window() else {
        return Vec::new();
    };

    let navbar = js::try_query(&config.navbar);
    let config = config.clone();
    let listener = EventListener::new(&window, "scroll", move |_| {
        if let Some(navbar) = &navbar {
            let bg = if navbar_solid(js::scroll_y(), config.navbar_threshold_px) {
                NAVBAR_SOLID_BG
            } else {
                NAVBAR_CLEAR_BG
            };
            stage::set_style(navbar, "background-color", bg);
        }
        highlight_active_section(&config);
    });
    vec![listener]
}

/// Recomputes the active section and restyles every navigation link, both
/// desktop and mobile. Idempotent for a fixed scroll position.
pub(crate) fn highlight_active_section(config: &PageConfig) {
    if config.sections.is_empty() {
        return;
    }

    let rects: Vec<Option<SectionRect>> = config
        .sections
        .iter()
        .map(|id| {
            js::by_id(id).map(|section| {
                let rect = section.get_bounding_client_rect();
                SectionRect::new(rect.top(), rect.bottom())
            })
        })
        .collect();

    let active = active_index(&rects, config.probe_offset_px).unwrap_or(0);
    let active_href = PageConfig::section_href(&config.sections[active]);

    let links = js::query_all(&config.nav_links)
        .into_iter()
        .chain(js::query_all(&config.menu_links));
    for link in links {
        let classes = link.class_list();
        if link.get_attribute("href").as_deref() == Some(active_href.as_str()) {
            let _ = classes.add_1(HIGHLIGHT_CLASS);
            let _ = classes.remove_1(BASE_CLASS);
        } else {
            let _ = classes.remove_1(HIGHLIGHT_CLASS);
            let _ = classes.add_1(BASE_CLASS);
        }
    }
}

/// Smooth scrolling for in-page anchors plus the hero call-to-action pair.
pub(crate) fn wire_anchor_scrolling(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for anchor in js::query_all(&config.anchors) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let ctx = ctx.clone();
        let offset = config.anchor_offset_px;
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                scroll_to_target(&ctx, &href, offset, 1.2);
            },
        ));
    }

    let ctas = [
        (config.explore_button.as_str(), "#collections"),
        (config.tryon_button.as_str(), "#tryon"),
    ];
    for (selector, target) in ctas {
        let Some(button) = js::try_query(selector) else {
            continue;
        };
        let ctx = ctx.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            scroll_to_target(&ctx, target, 0.0, 1.5);
        }));
    }

    listeners
}

/// Starts a scroll tween from the current position to `href`'s target,
/// allowing for the fixed navbar except on the top-of-page hero.
fn scroll_to_target(ctx: &AppContext, href: &str, navbar_offset: f64, duration: f32) {
    let Some(target) = js::try_query(href) else {
        return;
    };
    let offset = if href == "#hero" { 0.0 } else { navbar_offset };
    let from = js::scroll_y();
    let to = (target.get_bounding_client_rect().top() + from - offset).max(0.0);

    ctx.timeline.borrow_mut().spawn(
        Tween::fromto(
            StylePoint::resting().scroll(from as f32),
            StylePoint::resting().scroll(to as f32),
            Channels::SCROLL,
            duration,
        )
        .ease(Ease::CubicInOut),
        stage::window_scroll_applier(),
    );
}

fn scale_tween(from: f32, to: f32, duration: f32, ease: Ease) -> Tween {
    Tween::fromto(
        StylePoint::resting().scale(from),
        StylePoint::resting().scale(to),
        Channels::SCALE,
        duration,
    )
    .ease(ease)
}

fn spin_tween(
    from_deg: f32,
    to_deg: f32,
    from_scale: f32,
    to_scale: f32,
    duration: f32,
    ease: Ease,
) -> Tween {
    Tween::fromto(
        StylePoint::resting().rotation(from_deg).scale(from_scale),
        StylePoint::resting().rotation(to_deg).scale(to_scale),
        Channels::ROTATION | Channels::SCALE,
        duration,
    )
    .ease(ease)
}

fn slide_x(from: f32, to: f32, duration: f32) -> Tween {
    Tween::fromto(
        StylePoint::resting().x(from),
        StylePoint::resting().x(to),
        Channels::X,
        duration,
    )
    .ease(Ease::CubicOut)
}

fn panel_enter() -> Tween {
    Tween::fromto(
        StylePoint::resting().y(-50.0).opacity(0.0),
        StylePoint::resting().blur(20.0),
        Channels::Y | Channels::OPACITY | Channels::BLUR,
        0.4,
    )
    .ease(Ease::QuartOut)
}

fn panel_exit() -> Tween {
    Tween::fromto(
        StylePoint::resting().blur(20.0),
        StylePoint::resting().y(-50.0).opacity(0.0),
        Channels::Y | Channels::OPACITY | Channels::BLUR,
        0.3,
    )
    .ease(Ease::CubicIn)
}

fn item_enter() -> Tween {
    Tween::fromto(
        StylePoint::resting().x(-30.0).scale(0.9).opacity(0.0),
        StylePoint::resting(),
        Channels::X | Channels::SCALE | Channels::OPACITY,
        0.3,
    )
    .delay(0.2)
    .ease(Ease::BackOut(BACK_OVERSHOOT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_toggles_open_and_closed() {
        let mut fsm = MenuFsm::default();
        assert!(!fsm.is_open());
        assert_eq!(fsm.button_activated(), MenuChange::Opened);
        assert!(fsm.is_open());
        assert_eq!(fsm.button_activated(), MenuChange::Closed);
        assert!(!fsm.is_open());
    }

    #[test]
    fn test_every_close_trigger_lands_closed() {
        // escape, outside pointer, and link activation all route through
        // close_requested; the button path closes via its own toggle
        let mut fsm = MenuFsm::default();
        for _ in 0..3 {
            assert_eq!(fsm.button_activated(), MenuChange::Opened);
            assert_eq!(fsm.close_requested(), Some(MenuChange::Closed));
            assert!(!fsm.is_open());
        }

        assert_eq!(fsm.button_activated(), MenuChange::Opened);
        assert_eq!(fsm.button_activated(), MenuChange::Closed);
        assert!(!fsm.is_open());
    }

    #[test]
    fn test_close_on_closed_menu_is_noop() {
        let mut fsm = MenuFsm::default();
        assert_eq!(fsm.close_requested(), None);
        assert!(!fsm.is_open());

        // repeated closes stay settled
        assert_eq!(fsm.close_requested(), None);
    }
}
