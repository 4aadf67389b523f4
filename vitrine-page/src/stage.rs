use vitrine_motion::{ApplyFn, Channels, StylePoint};
use web_sys::Element;

use crate::js;

/// Formats the CSS transform for a sampled pose.
pub(crate) fn transform_css(point: &StylePoint) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg) scale({})",
        point.x, point.y, point.rotation, point.scale
    )
}

pub(crate) fn blur_css(blur: f32) -> String {
    format!("blur({blur}px)")
}

/// Writes one style property, swallowing the write error the same way the
/// canvas sizing path does. Non-HTML elements are skipped.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = js::as_html(element) {
        let _ = html.style().set_property(property, value);
    }
}

/// Applies the masked channels of a sampled pose to an element's style.
///
/// A tween owns the whole `transform` property while it runs: the sampled
/// pose carries resting values for transform channels outside the mask.
pub(crate) fn apply_style(element: &Element, point: StylePoint, channels: Channels) {
    if channels.intersects(Channels::TRANSFORM) {
        set_style(element, "transform", &transform_css(&point));
    }
    if channels.contains(Channels::OPACITY) {
        set_style(element, "opacity", &point.opacity.to_string());
    }
    if channels.contains(Channels::BLUR) {
        set_style(element, "backdrop-filter", &blur_css(point.blur));
    }
    if channels.contains(Channels::SCROLL) {
        js::scroll_to(point.scroll as f64);
    }
}

/// Boxed applier driving one element, for timeline spawns.
pub(crate) fn element_applier(element: &Element) -> ApplyFn {
    let element = element.clone();
    Box::new(move |point, channels| apply_style(&element, point, channels))
}

/// Applier that drives the document scroll position instead of an element.
pub(crate) fn window_scroll_applier() -> ApplyFn {
    Box::new(|point, channels| {
        if channels.contains(Channels::SCROLL) {
            js::scroll_to(point.scroll as f64);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_css_resting() {
        let css = transform_css(&StylePoint::resting());
        assert_eq!(css, "translate(0px, 0px) rotate(0deg) scale(1)");
    }

    #[test]
    fn test_transform_css_offsets() {
        let point = StylePoint::resting()
            .x(10.0)
            .y(-50.0)
            .rotation(90.0)
            .scale(0.9);
        assert_eq!(
            transform_css(&point),
            "translate(10px, -50px) rotate(90deg) scale(0.9)"
        );
    }

    #[test]
    fn test_blur_css() {
        assert_eq!(blur_css(20.0), "blur(20px)");
        assert_eq!(blur_css(0.0), "blur(0px)");
    }
}
