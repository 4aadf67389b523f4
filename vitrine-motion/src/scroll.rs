/// Viewport-relative vertical extent of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the rect straddles the horizontal probe line.
    pub fn straddles(&self, probe_y: f64) -> bool {
        self.top <= probe_y && self.bottom >= probe_y
    }
}

/// Picks the active section from the fixed priority list.
///
/// Sections are tested in list order against a probe line `probe_y` px below
/// the viewport top; the last straddling section wins, so later-listed
/// sections take precedence when several overlap. Missing sections are
/// `None` and skipped. Returns `None` when nothing straddles the line,
/// leaving the caller's default in place.
pub fn active_index(rects: &[Option<SectionRect>], probe_y: f64) -> Option<usize> {
    let mut active = None;
    for (i, rect) in rects.iter().enumerate() {
        if let Some(rect) = rect
            && rect.straddles(probe_y)
        {
            active = Some(i);
        }
    }
    active
}

/// Navbar background switch: solid once the page has scrolled past the
/// threshold, translucent at the top.
pub fn navbar_solid(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// What a [`ScrollGate`] asks its owner to do after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// The trigger crossed into view: play the entrance.
    Enter,
    /// The trigger left back above the start line: snap to the off pose.
    Reset,
}

/// Scroll-position latch for entrance animations.
///
/// Fires [`GateEvent::Enter`] when the trigger's top crosses the start
/// fraction of the viewport height, and, for replaying gates,
/// [`GateEvent::Reset`] when it leaves back upward so the entrance replays
/// on the next pass. Scrolling past below keeps the gate entered.
#[derive(Debug, Clone, Copy)]
pub struct ScrollGate {
    start_fraction: f64,
    replay: bool,
    entered: bool,
    spent: bool,
}

impl ScrollGate {
    /// Gate that replays each time its trigger re-enters.
    pub fn replaying(start_fraction: f64) -> Self {
        Self {
            start_fraction,
            replay: true,
            entered: false,
            spent: false,
        }
    }

    /// Gate that fires a single time, ever.
    pub fn once(start_fraction: f64) -> Self {
        Self {
            start_fraction,
            replay: false,
            entered: false,
            spent: false,
        }
    }

    /// Feeds the gate the trigger's current viewport-relative top.
    pub fn evaluate(&mut self, trigger_top: f64, viewport_height: f64) -> Option<GateEvent> {
        let in_view = trigger_top <= viewport_height * self.start_fraction;
        match (self.entered, in_view) {
            (false, true) => {
                self.entered = true;
                if self.spent {
                    None
                } else {
                    self.spent = !self.replay;
                    Some(GateEvent::Enter)
                }
            },
            (true, false) => {
                self.entered = false;
                if self.replay { Some(GateEvent::Reset) } else { None }
            },
            _ => None,
        }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> Option<SectionRect> {
        Some(SectionRect::new(top, top + height))
    }

    #[test]
    fn test_probe_requires_straddle() {
        let rects = [rect(120.0, 600.0), rect(720.0, 600.0)];
        // both sections below the probe line
        assert_eq!(active_index(&rects, 100.0), None);

        let rects = [rect(-200.0, 600.0), rect(400.0, 600.0)];
        assert_eq!(active_index(&rects, 100.0), Some(0));
    }

    #[test]
    fn test_last_straddling_section_wins() {
        // nested/overlapping rects that all straddle the probe line
        let rects = [rect(-500.0, 2000.0), rect(-100.0, 600.0), rect(50.0, 400.0)];
        assert_eq!(active_index(&rects, 100.0), Some(2));

        // order decides, not rect geometry
        let rects = [rect(50.0, 400.0), rect(-500.0, 2000.0)];
        assert_eq!(active_index(&rects, 100.0), Some(1));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let rects = [rect(-10.0, 300.0), rect(290.0, 300.0), None];
        let first = active_index(&rects, 100.0);
        let second = active_index(&rects, 100.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let rects = [None, rect(0.0, 300.0), None];
        assert_eq!(active_index(&rects, 100.0), Some(1));
        assert_eq!(active_index(&[None, None], 100.0), None);
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_solid(0.0, 100.0));
        assert!(!navbar_solid(100.0, 100.0));
        assert!(navbar_solid(101.0, 100.0));
    }

    #[test]
    fn test_replaying_gate_enters_resets_and_replays() {
        let mut gate = ScrollGate::replaying(0.8);
        let vh = 1000.0;

        // approaching from below the fold; no event until the 80% line
        assert_eq!(gate.evaluate(1200.0, vh), None);
        assert_eq!(gate.evaluate(900.0, vh), None);
        assert_eq!(gate.evaluate(790.0, vh), Some(GateEvent::Enter));

        // deeper scrolling, including past the section, stays entered
        assert_eq!(gate.evaluate(300.0, vh), None);
        assert_eq!(gate.evaluate(-2000.0, vh), None);
        assert!(gate.is_entered());

        // back above the start line: reset, then replay on re-entry
        assert_eq!(gate.evaluate(900.0, vh), Some(GateEvent::Reset));
        assert_eq!(gate.evaluate(700.0, vh), Some(GateEvent::Enter));
    }

    #[test]
    fn test_once_gate_never_replays() {
        let mut gate = ScrollGate::once(0.7);
        let vh = 1000.0;

        assert_eq!(gate.evaluate(650.0, vh), Some(GateEvent::Enter));
        assert_eq!(gate.evaluate(900.0, vh), None); // leaves: no reset
        assert_eq!(gate.evaluate(650.0, vh), None); // re-enters: spent
    }
}
