//! Project card image source with a one-shot fallback.

/// Current `src` of one card image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    src: String,
    fell_back: bool,
}

impl ImageSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fell_back: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Handles a load error. Swaps to `fallback` on the first failure only,
    /// so a broken fallback cannot loop. Returns whether `src` changed.
    pub fn fail(&mut self, fallback: &str) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        self.src = fallback.to_owned();
        true
    }
}
