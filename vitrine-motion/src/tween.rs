use bitflags::bitflags;

use crate::ease::Ease;

bitflags! {
    /// Style channels a tween drives. Channels outside the mask keep
    /// whatever value the target already has.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels: u16 {
        const X        = 1 << 0;
        const Y        = 1 << 1;
        const SCALE    = 1 << 2;
        const ROTATION = 1 << 3;
        const OPACITY  = 1 << 4;
        const BLUR     = 1 << 5;
        const SCROLL   = 1 << 6;

        const TRANSFORM = Self::X.bits() | Self::Y.bits()
            | Self::SCALE.bits() | Self::ROTATION.bits();
    }
}

/// A point in style space: translation in px, uniform scale, rotation in
/// degrees, opacity, backdrop blur in px and document scroll offset in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePoint {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
    pub opacity: f32,
    pub blur: f32,
    pub scroll: f32,
}

impl Default for StylePoint {
    fn default() -> Self {
        Self::resting()
    }
}

impl StylePoint {
    /// The neutral pose: untranslated, unrotated, fully opaque, no blur.
    pub fn resting() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            blur: 0.0,
            scroll: 0.0,
        }
    }

    pub fn x(mut self, v: f32) -> Self {
        self.x = v;
        self
    }

    pub fn y(mut self, v: f32) -> Self {
        self.y = v;
        self
    }

    pub fn scale(mut self, v: f32) -> Self {
        self.scale = v;
        self
    }

    pub fn rotation(mut self, v: f32) -> Self {
        self.rotation = v;
        self
    }

    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = v;
        self
    }

    pub fn blur(mut self, v: f32) -> Self {
        self.blur = v;
        self
    }

    pub fn scroll(mut self, v: f32) -> Self {
        self.scroll = v;
        self
    }

    /// Linear blend of the masked channels; unmasked channels come from
    /// `self`.
    pub fn lerp(&self, to: &StylePoint, channels: Channels, t: f32) -> StylePoint {
        let mut out = *self;
        let mix = |a: f32, b: f32| a + (b - a) * t;
        if channels.contains(Channels::X) {
            out.x = mix(self.x, to.x);
        }
        if channels.contains(Channels::Y) {
            out.y = mix(self.y, to.y);
        }
        if channels.contains(Channels::SCALE) {
            out.scale = mix(self.scale, to.scale);
        }
        if channels.contains(Channels::ROTATION) {
            out.rotation = mix(self.rotation, to.rotation);
        }
        if channels.contains(Channels::OPACITY) {
            out.opacity = mix(self.opacity, to.opacity);
        }
        if channels.contains(Channels::BLUR) {
            out.blur = mix(self.blur, to.blur);
        }
        if channels.contains(Channels::SCROLL) {
            out.scroll = mix(self.scroll, to.scroll);
        }
        out
    }
}

/// A from/to interpolation over a fixed duration, optionally delayed,
/// repeated and mirrored ("yoyo") on alternating passes.
///
/// A tween is pure data; the [`Timeline`](crate::Timeline) owns the clock
/// and hands sampled [`StylePoint`]s to an apply callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub(crate) channels: Channels,
    pub(crate) from: StylePoint,
    pub(crate) to: StylePoint,
    pub(crate) duration: f32,
    pub(crate) delay: f32,
    pub(crate) ease: Ease,
    pub(crate) yoyo: bool,
    pub(crate) repeat: u32,
}

impl Tween {
    /// Tween the masked `channels` from `from` to `to` over `duration`
    /// seconds.
    pub fn fromto(from: StylePoint, to: StylePoint, channels: Channels, duration: f32) -> Self {
        Self {
            channels,
            from,
            to,
            duration: duration.max(f32::EPSILON),
            delay: 0.0,
            ease: Ease::default(),
            yoyo: false,
            repeat: 0,
        }
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Mirrors every other pass back towards `from`.
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Extra passes after the first; `repeat(1)` plays twice.
    pub fn repeat(mut self, extra_passes: u32) -> Self {
        self.repeat = extra_passes;
        self
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Total wall time from spawn to completion.
    pub fn total_duration(&self) -> f32 {
        self.delay + self.duration * (self.repeat + 1) as f32
    }

    /// Samples the tween `elapsed` seconds after it was spawned.
    ///
    /// Before the delay has passed the sample sits on `from`; once the
    /// last pass ends it sits on the final pose and reports completion.
    pub fn sample(&self, elapsed: f32) -> TweenSample {
        let active = elapsed - self.delay;
        if active <= 0.0 {
            return TweenSample { point: self.from, done: false };
        }

        let passes = self.repeat + 1;
        let total = self.duration * passes as f32;
        if active >= total {
            let end = if self.yoyo && passes.is_multiple_of(2) {
                self.from
            } else {
                self.to
            };
            return TweenSample { point: end, done: true };
        }

        let pass = (active / self.duration) as u32;
        let local = (active - pass as f32 * self.duration) / self.duration;
        let eased = self.ease.apply(local);
        let mirrored = self.yoyo && pass % 2 == 1;
        let t = if mirrored { 1.0 - eased } else { eased };

        TweenSample {
            point: self.from.lerp(&self.to, self.channels, t),
            done: false,
        }
    }
}

/// One sampled instant of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub point: StylePoint,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Tween {
        Tween::fromto(
            StylePoint::resting().y(-50.0).opacity(0.0),
            StylePoint::resting(),
            Channels::Y | Channels::OPACITY,
            0.4,
        )
        .ease(Ease::Linear)
    }

    #[test]
    fn test_sample_endpoints() {
        let tween = slide();
        let start = tween.sample(0.0);
        assert_eq!(start.point.y, -50.0);
        assert_eq!(start.point.opacity, 0.0);
        assert!(!start.done);

        let end = tween.sample(0.4);
        assert_eq!(end.point.y, 0.0);
        assert_eq!(end.point.opacity, 1.0);
        assert!(end.done);
    }

    #[test]
    fn test_sample_midpoint_linear() {
        let mid = slide().sample(0.2);
        assert!((mid.point.y - -25.0).abs() < 1e-4);
        assert!((mid.point.opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_unmasked_channels_pass_through() {
        let tween = Tween::fromto(
            StylePoint::resting().scale(0.9),
            StylePoint::resting().scale(1.0).opacity(0.0),
            Channels::SCALE,
            1.0,
        )
        .ease(Ease::Linear);
        let mid = tween.sample(0.5);
        // opacity is outside the mask and stays at the `from` value
        assert_eq!(mid.point.opacity, 1.0);
        assert!((mid.point.scale - 0.95).abs() < 1e-4);
    }

    #[test]
    fn test_delay_holds_initial_pose() {
        let tween = slide().delay(0.3);
        let held = tween.sample(0.29);
        assert_eq!(held.point.y, -50.0);
        assert!(!held.done);
        assert!(tween.sample(0.7).done);
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        // button press feedback: scale 1 -> 0.95 -> 1
        let press = Tween::fromto(
            StylePoint::resting(),
            StylePoint::resting().scale(0.95),
            Channels::SCALE,
            0.1,
        )
        .ease(Ease::Linear)
        .yoyo()
        .repeat(1);

        assert!((press.sample(0.05).point.scale - 0.975).abs() < 1e-4);
        assert!((press.sample(0.1).point.scale - 0.95).abs() < 1e-4);
        assert!((press.sample(0.15).point.scale - 0.975).abs() < 1e-4);

        let done = press.sample(0.2);
        assert!(done.done);
        assert_eq!(done.point.scale, 1.0);
    }

    #[test]
    fn test_total_duration_counts_delay_and_repeats() {
        let tween = slide().delay(0.2).repeat(2);
        assert!((tween.total_duration() - (0.2 + 3.0 * 0.4)).abs() < 1e-6);
    }
}
