//! Try-on selector groups. Each group enforces exactly one selected
//! member; color swatches derive their highlight border from their own
//! fill class.

use gloo::events::EventListener;

use crate::{config::PageConfig, js};

const BASE_BORDER: &str = "border-gray-600";
const CATEGORY_HIGHLIGHT: [&str; 2] = ["bg-neon-blue/20", "border-neon-blue"];
const SIZE_HIGHLIGHT: [&str; 2] = ["bg-neon-pink/20", "border-neon-pink"];
const SWATCH_BORDERS: [&str; 4] = [
    "border-neon-blue",
    "border-neon-pink",
    "border-neon-green",
    "border-white",
];

/// Highlight border for a color swatch, chosen from the swatch's own fill
/// class. Unknown fills fall back to a white border.
fn swatch_border(has_class: impl Fn(&str) -> bool) -> &'static str {
    if has_class("bg-blue-500") {
        "border-neon-blue"
    } else if has_class("bg-pink-500") {
        "border-neon-pink"
    } else if has_class("bg-green-500") {
        "border-neon-green"
    } else {
        "border-white"
    }
}

/// Wires the three selector groups: clothing category, size, and color.
pub(crate) fn wire_selector_groups(config: &PageConfig) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    listeners.extend(wire_group(&config.category_buttons, CATEGORY_HIGHLIGHT));
    listeners.extend(wire_group(&config.size_buttons, SIZE_HIGHLIGHT));
    listeners.extend(wire_swatches(&config.color_buttons));
    listeners
}

fn wire_group(selector: &str, highlight: [&'static str; 2]) -> Vec<EventListener> {
    let buttons = js::query_all(selector);
    let mut listeners = Vec::new();
    for button in &buttons {
        let group = buttons.clone();
        let target = button.clone();
        listeners.push(EventListener::new(button, "click", move |_| {
            for other in &group {
                let classes = other.class_list();
                let _ = classes.remove_2(highlight[0], highlight[1]);
                let _ = classes.add_1(BASE_BORDER);
            }
            let classes = target.class_list();
            let _ = classes.add_2(highlight[0], highlight[1]);
            let _ = classes.remove_1(BASE_BORDER);
        }));
    }
    listeners
}

fn wire_swatches(selector: &str) -> Vec<EventListener> {
    let buttons = js::query_all(selector);
    let mut listeners = Vec::new();
    for button in &buttons {
        let group = buttons.clone();
        let target = button.clone();
        listeners.push(EventListener::new(button, "click", move |_| {
            for other in &group {
                let _ = other.class_list().remove_4(
                    SWATCH_BORDERS[0],
                    SWATCH_BORDERS[1],
                    SWATCH_BORDERS[2],
                    SWATCH_BORDERS[3],
                );
            }
            let classes = target.class_list();
            let border = swatch_border(|class| classes.contains(class));
            let _ = classes.add_1(border);
        }));
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_border_follows_fill() {
        let border_of = |fill: &'static str| swatch_border(move |class| class == fill);
        assert_eq!(border_of("bg-blue-500"), "border-neon-blue");
        assert_eq!(border_of("bg-pink-500"), "border-neon-pink");
        assert_eq!(border_of("bg-green-500"), "border-neon-green");
        assert_eq!(border_of("bg-purple-500"), "border-white");
    }

    #[test]
    fn test_unknown_fill_falls_back_to_white() {
        assert_eq!(swatch_border(|_| false), "border-white");
    }

    #[test]
    fn test_category_and_size_highlights_do_not_overlap() {
        // the two grid groups must not strip each other's highlight
        for class in CATEGORY_HIGHLIGHT {
            assert!(!SIZE_HIGHLIGHT.contains(&class));
        }
    }
}
