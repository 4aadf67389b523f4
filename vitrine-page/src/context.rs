use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use vitrine_motion::{Rng32, Scheduler, Timeline};

/// Shared page state threaded through the wired subsystems.
///
/// One context is built per mount; clones are cheap handles onto the same
/// underlying cells, which is what event listener closures capture.
#[derive(Clone)]
pub(crate) struct AppContext {
    /// True from startup until the loading overlay finishes fading out.
    /// Gates hero motion, never hero rendering.
    pub(crate) loading: Rc<Cell<bool>>,
    /// The animation scheduler, advanced once per displayed frame.
    pub(crate) timeline: Rc<RefCell<Timeline>>,
    /// Decorative randomness for particle placement and the outfit wardrobe.
    pub(crate) rng: Rc<RefCell<Rng32>>,
}

impl AppContext {
    pub(crate) fn new(seed: u32) -> Self {
        Self {
            loading: Rc::new(Cell::new(true)),
            timeline: Rc::new(RefCell::new(Timeline::new())),
            rng: Rc::new(RefCell::new(Rng32::new(seed))),
        }
    }

    /// Pause/resume view of the timeline for the visibility wiring.
    pub(crate) fn scheduler(&self) -> Rc<RefCell<dyn Scheduler>> {
        self.timeline.clone()
    }
}
