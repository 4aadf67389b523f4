use compact_str::CompactString;

/// DOM contract and tuning constants for the page wiring.
///
/// The defaults match the shipped markup. With the `js-api` feature the
/// whole struct deserializes from a plain JS object (missing fields fall
/// back to the defaults), so a host page can remap selectors without
/// recompiling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "js-api", derive(serde::Deserialize))]
#[cfg_attr(feature = "js-api", serde(default, rename_all = "camelCase"))]
pub struct PageConfig {
    // navigation
    pub navbar: CompactString,
    pub menu_button: CompactString,
    pub menu: CompactString,
    pub nav_links: CompactString,
    pub menu_links: CompactString,
    /// Section ids in priority order; the last section straddling the probe
    /// line wins the highlight.
    pub sections: Vec<CompactString>,

    // hero
    pub hero_container: CompactString,
    pub hero_heading: CompactString,
    pub hero_paragraph: CompactString,
    pub hero_button_row: CompactString,
    pub explore_button: CompactString,
    pub tryon_button: CompactString,

    // entrances and decorations
    pub loading_overlay: CompactString,
    pub about_panel: CompactString,
    pub about_text: CompactString,
    pub about_paragraph: CompactString,
    pub grid_cards: CompactString,
    pub cards: CompactString,
    pub footer: CompactString,
    pub anchors: CompactString,
    pub ripples: CompactString,
    pub parallax: CompactString,
    pub particle_layer: CompactString,

    // try-on panel
    pub avatar_container: CompactString,
    pub avatar_glyph: CompactString,
    pub outfit_button: CompactString,
    pub rotate_button: CompactString,
    pub zoom_button: CompactString,
    pub category_buttons: CompactString,
    pub size_buttons: CompactString,
    pub color_buttons: CompactString,

    // newsletter
    pub newsletter_form: CompactString,

    // tuning
    /// Upper bound for the hero canvas edge, in CSS pixels.
    pub max_hero_size_px: i32,
    /// Probe line below the viewport top used for section highlighting.
    pub probe_offset_px: f64,
    /// Scroll offset past which the navbar turns solid.
    pub navbar_threshold_px: f64,
    /// Fixed-navbar allowance subtracted from anchor scroll targets.
    pub anchor_offset_px: f64,
    /// Dwell before the loading overlay starts fading.
    pub loading_delay_ms: u32,
    /// Dwell between "Joining..." and the submit confirmation.
    pub confirm_delay_ms: u32,
    /// Dwell before the submit control is restored.
    pub restore_delay_ms: u32,
    /// Per-character cadence of the about-section text reveal.
    pub typewriter_interval_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar: "#navbar".into(),
            menu_button: "#mobileMenuBtn".into(),
            menu: "#mobileMenu".into(),
            nav_links: r##"nav a[href^="#"]"##.into(),
            menu_links: r##"#mobileMenu a[href^="#"]"##.into(),
            sections: ["hero", "about", "collections", "tryon", "contact"]
                .into_iter()
                .map(CompactString::from)
                .collect(),

            hero_container: "#hero3DModel".into(),
            hero_heading: "#hero h1".into(),
            hero_paragraph: "#hero p".into(),
            hero_button_row: "#hero .flex".into(),
            explore_button: "#hero .bg-gradient-to-r".into(),
            tryon_button: "#hero .glass".into(),

            loading_overlay: "#loadingScreen".into(),
            about_panel: "#about .aspect-video".into(),
            about_text: "#about .space-y-6".into(),
            about_paragraph: "#about .space-y-4 p".into(),
            grid_cards: "#collectionsGrid .card-3d".into(),
            cards: ".card-3d".into(),
            footer: "footer".into(),
            anchors: r##"a[href^="#"]"##.into(),
            ripples: ".ripple".into(),
            parallax: ".parallax".into(),
            particle_layer: "#particleBg".into(),

            avatar_container: "#avatarContainer".into(),
            avatar_glyph: "#avatarContainer .text-6xl".into(),
            outfit_button: "#changeOutfitBtn".into(),
            rotate_button: "#rotateAvatarBtn".into(),
            zoom_button: "#zoomBtn".into(),
            category_buttons: "#tryon .grid.grid-cols-3 button".into(),
            size_buttons: "#tryon .grid.grid-cols-5 button".into(),
            color_buttons: "#tryon .flex.space-x-3 button".into(),

            newsletter_form: "#newsletterForm".into(),

            max_hero_size_px: 384,
            probe_offset_px: 100.0,
            navbar_threshold_px: 100.0,
            anchor_offset_px: 80.0,
            loading_delay_ms: 2000,
            confirm_delay_ms: 2000,
            restore_delay_ms: 3000,
            typewriter_interval_ms: 30,
        }
    }
}

impl PageConfig {
    /// Resolves a section id to the anchor href pointing at it.
    pub(crate) fn section_href(section: &str) -> CompactString {
        let mut href = CompactString::const_new("#");
        href.push_str(section);
        href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.sections.len(), 5);
        assert_eq!(config.sections[0], "hero");
        assert_eq!(config.sections[4], "contact");
        assert_eq!(config.max_hero_size_px, 384);
        assert_eq!(config.probe_offset_px, 100.0);
        assert_eq!(config.anchor_offset_px, 80.0);
    }

    #[test]
    fn test_section_href() {
        assert_eq!(PageConfig::section_href("tryon"), "#tryon");
    }

    #[cfg(feature = "js-api")]
    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: PageConfig = serde_json::from_str(
            r##"{ "navbar": "#topbar", "maxHeroSizePx": 512 }"##,
        )
        .unwrap();
        assert_eq!(config.navbar, "#topbar");
        assert_eq!(config.max_hero_size_px, 512);
        // untouched fields keep the shipped defaults
        assert_eq!(config.menu, "#mobileMenu");
        assert_eq!(config.loading_delay_ms, 2000);
    }
}
