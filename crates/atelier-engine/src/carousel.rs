/// Cyclic index into an ordered, possibly-empty sequence. Wraps at both
/// ends; every movement is a no-op when the sequence is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, treated as 0 for an empty sequence.
    pub fn index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.index % len
        }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index(len) + 1) % len;
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index(len) + len - 1) % len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Jump to a known-valid position (e.g. after resolving a route).
    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    /// The 3-slot carousel window `{prev, center, next}`. Adjacent slides
    /// are always defined via wraparound, so for `len == 1` all three
    /// slots reference the same element. `None` for an empty sequence.
    pub fn window3(&self, len: usize) -> Option<[usize; 3]> {
        if len == 0 {
            return None;
        }
        let center = self.index(len);
        Some([(center + len - 1) % len, center, (center + 1) % len])
    }
}

/// Pick the image for a carousel slide: the slide's own image when present,
/// otherwise the placeholder keyed by the owning category. The placeholder
/// is also what a slide falls back to when its own image cannot be shown.
pub fn slide_image<'a>(own: Option<&'a str>, placeholder: Option<&'a str>) -> Option<&'a str> {
    own.or(placeholder)
}
