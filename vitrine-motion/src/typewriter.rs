use unicode_segmentation::UnicodeSegmentation;

/// Incremental text reveal for the about-section paragraph.
///
/// Captures the full text once, then hands back ever-longer prefixes one
/// grapheme cluster at a time, so multi-codepoint symbols are never split
/// mid-sequence.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    // byte offset just past each grapheme cluster
    boundaries: Vec<usize>,
    emitted: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let mut end = 0;
        let boundaries = text
            .graphemes(true)
            .map(|g| {
                end += g.len();
                end
            })
            .collect();
        Self {
            text: text.to_owned(),
            boundaries,
            emitted: 0,
        }
    }

    /// Reveals one more grapheme and returns the new prefix, or `None`
    /// once the full text has been emitted.
    pub fn tick(&mut self) -> Option<&str> {
        if self.emitted == self.boundaries.len() {
            return None;
        }
        self.emitted += 1;
        Some(&self.text[..self.boundaries[self.emitted - 1]])
    }

    pub fn is_done(&self) -> bool {
        self.emitted == self.boundaries.len()
    }

    /// Rewinds to an empty prefix without re-capturing the text.
    pub fn rewind(&mut self) {
        self.emitted = 0;
    }

    /// The full captured text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_one_char_at_a_time() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.tick(), Some("a"));
        assert_eq!(tw.tick(), Some("ab"));
        assert_eq!(tw.tick(), Some("abc"));
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_grapheme_clusters_stay_whole() {
        // family emoji is a single ZWJ sequence and must arrive in one tick
        let mut tw = Typewriter::new("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}b");
        assert_eq!(tw.tick(), Some("a"));
        assert_eq!(
            tw.tick(),
            Some("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}")
        );
        assert_eq!(
            tw.tick(),
            Some("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}b")
        );
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_empty_text_is_immediately_done() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_rewind_replays_from_start() {
        let mut tw = Typewriter::new("hi");
        while tw.tick().is_some() {}
        tw.rewind();
        assert!(!tw.is_done());
        assert_eq!(tw.tick(), Some("h"));
    }
}
