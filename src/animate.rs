//! Pure state machines behind the page animations.
//!
//! The browser wiring (IntersectionObserver registration, interval timers)
//! lives in `app::hooks`; everything here is synchronous and testable on the
//! host.

/// Configuration for a scroll-reveal watch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible to count as intersecting.
    pub threshold: f64,
    /// Viewport-relative offset passed through to the observer.
    pub root_margin: &'static str,
    /// When true, the watch is retired after the first reveal and the
    /// section never hides again.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px",
            trigger_once: true,
        }
    }
}

impl RevealOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn repeat(mut self) -> Self {
        self.trigger_once = false;
        self
    }
}

/// Visibility of one page section, driven by intersection samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_entered_viewport: bool,
    pub is_revealed: bool,
}

impl RevealState {
    /// Applies one intersection sample. Returns `true` when the watch should
    /// be retired (first reveal of a trigger-once watch).
    pub fn apply(&mut self, intersecting: bool, trigger_once: bool) -> bool {
        if intersecting {
            self.has_entered_viewport = true;
            self.is_revealed = true;
            trigger_once
        } else {
            if !trigger_once {
                self.is_revealed = false;
            }
            false
        }
    }
}

/// Character-by-character reveal of a fixed string.
///
/// The cursor is a byte offset that always sits on a char boundary, so the
/// visible prefix is a valid `&str` even for multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    source: String,
    cursor: usize,
}

impl TypingState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
        }
    }

    /// The prefix typed out so far.
    pub fn visible(&self) -> &str {
        &self.source[..self.cursor]
    }

    /// Number of characters emitted so far.
    pub fn emitted(&self) -> usize {
        self.visible().chars().count()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Advances by one character. Returns `false` once the full string has
    /// been emitted; further ticks are no-ops.
    pub fn tick(&mut self) -> bool {
        match self.source[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_starts_hidden() {
        let state = RevealState::default();
        assert!(!state.has_entered_viewport);
        assert!(!state.is_revealed);
    }

    #[test]
    fn reveal_trigger_once_is_monotone() {
        let mut state = RevealState::default();
        assert!(!state.apply(false, true));
        assert!(!state.is_revealed);

        // First crossing reveals and retires the watch.
        assert!(state.apply(true, true));
        assert!(state.is_revealed);
        assert!(state.has_entered_viewport);

        // Scrolling back out must not hide the section again.
        assert!(!state.apply(false, true));
        assert!(state.is_revealed);
    }

    #[test]
    fn reveal_repeatable_tracks_intersection() {
        let mut state = RevealState::default();
        for &(sample, expected) in &[(true, true), (false, false), (true, true), (false, false)] {
            assert!(!state.apply(sample, false), "repeatable watch never retires");
            assert_eq!(state.is_revealed, expected);
        }
        assert!(state.has_entered_viewport);
    }

    #[test]
    fn typing_advances_one_char_per_tick() {
        let mut state = TypingState::new("hey");
        assert_eq!(state.visible(), "");
        assert!(!state.is_complete());

        assert!(state.tick());
        assert_eq!(state.visible(), "h");
        assert!(state.tick());
        assert!(state.tick());
        assert_eq!(state.visible(), "hey");
        assert!(state.is_complete());
    }

    #[test]
    fn typing_never_exceeds_source() {
        let text = "Developer, Problem Solver";
        let mut state = TypingState::new(text);
        for _ in 0..text.len() * 2 {
            state.tick();
            assert!(state.emitted() <= text.chars().count());
        }
        assert!(state.is_complete());
        assert_eq!(state.visible(), text);
        assert!(!state.tick());
    }

    #[test]
    fn typing_empty_source_is_immediately_complete() {
        let mut state = TypingState::new("");
        assert!(state.is_complete());
        assert!(!state.tick());
        assert_eq!(state.visible(), "");
    }

    #[test]
    fn typing_handles_multibyte_text() {
        let mut state = TypingState::new("héllo ☕");
        let mut steps = 0;
        while state.tick() {
            steps += 1;
            // Every intermediate prefix must be valid UTF-8 (slicing would
            // panic otherwise) and strictly growing.
            assert_eq!(state.emitted(), steps);
        }
        assert_eq!(steps, 7);
        assert_eq!(state.visible(), "héllo ☕");
    }
}
