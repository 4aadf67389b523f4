use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo::{
    events::{EventListener, EventListenerOptions, EventListenerPhase},
    timers::callback::Timeout,
};
use js_sys::wasm_bindgen::JsCast;
use vitrine_motion::{Channels, StylePoint, SubmitSequence, Tween};
use web_sys::{Event, HtmlButtonElement, HtmlFormElement};

use crate::{config::PageConfig, context::AppContext, js, stage};

const SUBMITTING_LABEL: &str = "Joining...";
const CONFIRMED_LABEL: &str = "✓ Welcome to the Future!";
const GRADIENT_FROM: &str = "from-neon-blue";
const GRADIENT_TO: &str = "to-neon-pink";
const CONFIRMED_CLASS: &str = "bg-green-500";

#[derive(Default)]
struct SubmitState {
    sequence: SubmitSequence,
    confirm: Option<Timeout>,
    restore: Option<Timeout>,
}

/// Wires the simulated newsletter submission: press feedback, a staged
/// label/style swap on the submit button, then a full restore and form
/// reset. No request is ever sent. A submit that arrives while a sequence
/// is already running is ignored.
pub(crate) fn wire_newsletter(ctx: &AppContext, config: &PageConfig) -> Vec<EventListener> {
    let Some(form) = js::try_query(&config.newsletter_form) else {
        return Vec::new();
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return Vec::new();
    };
    let Some(button) = form
        .query_selector(r#"button[type="submit"]"#)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return Vec::new();
    };

    let shared = Rc::new(RefCell::new(SubmitState::default()));
    let ctx = ctx.clone();
    let confirm_ms = config.confirm_delay_ms;
    let restore_ms = config.restore_delay_ms;

    let target = form.clone();
    let listener = EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| {
            event.prevent_default();
            if !shared.borrow_mut().sequence.begin() {
                return;
            }

            let original = button.text_content().unwrap_or_default();

            ctx.timeline.borrow_mut().spawn(
                press_tween(),
                stage::element_applier(&button),
            );
            button.set_text_content(Some(SUBMITTING_LABEL));
            button.set_disabled(true);

            let confirm = confirm_stage(
                Rc::downgrade(&shared),
                button.clone(),
                form.clone(),
                original,
                restore_ms,
            );
            shared.borrow_mut().confirm = Some(Timeout::new(confirm_ms, confirm));
        },
    );
    vec![listener]
}

/// Builds the first timed stage: confirmation label plus the green style.
fn confirm_stage(
    shared: Weak<RefCell<SubmitState>>,
    button: HtmlButtonElement,
    form: HtmlFormElement,
    original: String,
    restore_ms: u32,
) -> impl FnOnce() + 'static {
    move || {
        let Some(state) = shared.upgrade() else { return };
        if !state.borrow_mut().sequence.confirm() {
            return;
        }

        button.set_text_content(Some(CONFIRMED_LABEL));
        let classes = button.class_list();
        let _ = classes.remove_2(GRADIENT_FROM, GRADIENT_TO);
        let _ = classes.add_1(CONFIRMED_CLASS);

        let restore = restore_stage(Rc::downgrade(&state), button, form, original);
        state.borrow_mut().restore = Some(Timeout::new(restore_ms, restore));
    }
}

/// Builds the final timed stage: original label and style back, control
/// re-enabled, input fields cleared.
fn restore_stage(
    shared: Weak<RefCell<SubmitState>>,
    button: HtmlButtonElement,
    form: HtmlFormElement,
    original: String,
) -> impl FnOnce() + 'static {
    move || {
        let Some(state) = shared.upgrade() else { return };
        if !state.borrow_mut().sequence.finish() {
            return;
        }

        button.set_text_content(Some(&original));
        button.set_disabled(false);
        let classes = button.class_list();
        let _ = classes.add_2(GRADIENT_FROM, GRADIENT_TO);
        let _ = classes.remove_1(CONFIRMED_CLASS);
        form.reset();
    }
}

fn press_tween() -> Tween {
    Tween::fromto(
        StylePoint::resting(),
        StylePoint::resting().scale(0.95),
        Channels::SCALE,
        0.1,
    )
    .yoyo()
    .repeat(1)
}
