/// Easing curve applied to a tween's normalized progress.
///
/// The set mirrors what the page choreography actually uses: polynomial
/// in/out ramps plus the overshooting "back" ease for springy UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    /// Constant-rate ramp.
    Linear,
    /// Quadratic ease-out; the scheduler default.
    #[default]
    QuadOut,
    /// Cubic ease-in. Accelerates from rest, used for exits.
    CubicIn,
    /// Cubic ease-out. Decelerates into the target.
    CubicOut,
    /// Cubic ease-in-out. Smooth on both ends, used for page scrolls.
    CubicInOut,
    /// Quartic ease-out. Sharper arrival than [`Ease::CubicOut`].
    QuartOut,
    /// Overshoots the target before settling; the parameter controls the
    /// overshoot amplitude (1.70158 is the customary default).
    BackOut(f32),
}

impl Ease {
    /// Evaluates the curve at progress `t`, clamped to `0.0..=1.0`.
    ///
    /// Every curve maps 0 to 0 and 1 to 1; [`Ease::BackOut`] exceeds 1
    /// in between.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t).powi(2),
            Ease::CubicIn => t.powi(3),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            },
            Ease::QuartOut => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::QuadOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::QuartOut,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        for ease in ALL {
            assert_eq!(ease.apply(-2.0), ease.apply(0.0), "{ease:?}");
            assert_eq!(ease.apply(3.0), ease.apply(1.0), "{ease:?}");
        }
    }

    #[test]
    fn test_power_eases_are_monotonic() {
        let monotonic = [
            Ease::Linear,
            Ease::QuadOut,
            Ease::CubicIn,
            Ease::CubicOut,
            Ease::CubicInOut,
            Ease::QuartOut,
        ];
        for ease in monotonic {
            let mut prev = ease.apply(0.0);
            for i in 1..=100 {
                let next = ease.apply(i as f32 / 100.0);
                assert!(next >= prev, "{ease:?} dipped at step {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (0..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }
}
