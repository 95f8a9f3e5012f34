/// Nesting limit used by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Upper bound for [`ParseOptions::with_max_depth`].
///
/// The parser recurses once per nesting level, so larger limits are clamped to keep deep input
/// from exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Parser configuration.
///
/// ```
/// use jsonette::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(1);
/// assert!(parse_with_options("[1]", &options).is_ok());
/// assert!(parse_with_options("[[1]]", &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
}

impl ParseOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how many arrays and objects may be nested inside each other.
    ///
    /// `0` rejects any array or object. Values above [`MAX_DEPTH`] are clamped to it.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > MAX_DEPTH {
            MAX_DEPTH
        } else {
            max_depth
        };
        self
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
