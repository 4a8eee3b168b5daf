//! The shared capability interface over the two expansion strategies.

use std::borrow::Cow;

/// Construction options shared by both expanders.
///
/// # Examples
///
/// ```
/// use fileseq::{EagerSequence, PathSequence, SequenceOptions};
///
/// let options = SequenceOptions::default()
///     .with_delimiters("_")
///     .with_pad_char(' ');
/// let sequence = EagerSequence::with_options("a_9-10@@_b", &options);
/// assert_eq!(sequence.full_paths(), ["a_ 9_b", "a_10_b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Delimiter characters to tokenize on; empty selects the default set
    /// (`\`, `/` and `.`).
    pub delimiters: String,
    /// Fill character for padded formatting.
    pub pad_char: char,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            delimiters: String::new(),
            pad_char: '0',
        }
    }
}

impl SequenceOptions {
    /// Replace the delimiter set.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Replace the padding fill character.
    #[must_use]
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }
}

/// Read-only view over an expanded file sequence.
///
/// Implemented by exactly two variants, chosen at construction time:
/// [`EagerSequence`](crate::EagerSequence) materializes every path up front,
/// [`LazySequence`](crate::LazySequence) synthesizes them on demand. Both
/// enumerate in the same order, so `path(i)` agrees between the variants for
/// every `i < len()`.
pub trait PathSequence {
    /// The original pattern string.
    fn pattern(&self) -> &str;

    /// Whether the pattern expands to more than one path.
    ///
    /// A grammar failure and a pattern that resolves to zero or one path are
    /// indistinguishable here; both report `false`. That single signal is the
    /// whole error surface.
    fn is_ok(&self) -> bool;

    /// Number of expandable paths; 0 whenever [`Self::is_ok`] is false.
    fn len(&self) -> usize;

    /// Whether [`Self::len`] is zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The path at `index` in enumeration order, `None` past the end.
    fn path(&self, index: usize) -> Option<Cow<'_, str>>;

    /// All paths in enumeration order. O(1) amortised per path for the eager
    /// variant, a full synthesis for the lazy one.
    fn full_paths(&self) -> Vec<String> {
        (0..self.len())
            .filter_map(|index| self.path(index).map(Cow::into_owned))
            .collect()
    }
}
