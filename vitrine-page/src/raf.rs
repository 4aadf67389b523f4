use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo::render::{AnimationFrame, request_animation_frame};

/// Longest frame delta fed to the animation clock, in milliseconds.
/// Browsers stop firing frames for background tabs, so the first delta
/// after a return can span minutes; clamping keeps tweens from teleporting.
const MAX_FRAME_DELTA_MS: f64 = 100.0;

struct LoopState {
    frame: RefCell<Option<AnimationFrame>>,
    last_ts: Cell<Option<f64>>,
    on_frame: RefCell<Box<dyn FnMut(f32)>>,
}

/// Self-rearming requestAnimationFrame loop with an explicit stop.
///
/// Each tick takes the spent frame handle, computes the delta in seconds,
/// runs the callback, and schedules the next frame. `stop` (or dropping the
/// loop) cancels the pending frame, which bounds the loop's lifetime to its
/// owner.
pub(crate) struct RenderLoop {
    state: Rc<LoopState>,
}

impl RenderLoop {
    pub(crate) fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        let state = Rc::new(LoopState {
            frame: RefCell::new(None),
            last_ts: Cell::new(None),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        Self::arm(&state);
        Self { state }
    }

    fn arm(state: &Rc<LoopState>) {
        let tick = Rc::clone(state);
        let handle = request_animation_frame(move |timestamp| {
            tick.frame.borrow_mut().take();

            let dt_ms = match tick.last_ts.get() {
                Some(prev) => (timestamp - prev).max(0.0),
                None => 0.0,
            };
            tick.last_ts.set(Some(timestamp));

            let dt = (dt_ms.min(MAX_FRAME_DELTA_MS) / 1000.0) as f32;
            (tick.on_frame.borrow_mut())(dt);

            Self::arm(&tick);
        });
        *state.frame.borrow_mut() = Some(handle);
    }

    /// Cancels the pending frame; the callback never runs again.
    pub(crate) fn stop(&self) {
        self.state.frame.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    // the pending frame's closure keeps the state alive, so only an
    // explicit cancel bounds the loop to its owner
    fn drop(&mut self) {
        self.stop();
    }
}
