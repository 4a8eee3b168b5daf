//! Eager expansion: the full path list is materialized at construction.

use std::borrow::Cow;
use std::ops::Index;
use std::slice;

use crate::format::write_padded;
use crate::pattern::{Pattern, Token};
use crate::sequence::{PathSequence, SequenceOptions};

/// Sentinel returned by the [`Index`] impl for out-of-range access.
const INVALID_PATH: &str = "";

/// File sequence with every concrete path materialized up front.
///
/// Construction cost is proportional to the number of expanded paths; after
/// that every access is a borrow into the stored list. The value is immutable
/// once built, so sharing it across threads needs no synchronisation.
///
/// # Examples
///
/// ```
/// use fileseq::{EagerSequence, PathSequence};
///
/// let sequence = EagerSequence::new("1-10x2@.exr");
/// assert!(sequence.is_ok());
/// assert_eq!(sequence.len(), 5);
/// assert_eq!(&sequence[0], "1.exr");
/// assert_eq!(&sequence[4], "9.exr");
/// assert_eq!(&sequence[99], ""); // out of range yields the sentinel
/// ```
#[derive(Debug, Clone)]
pub struct EagerSequence {
    pattern: Pattern,
    paths: Vec<String>,
}

impl EagerSequence {
    /// Expand `pattern` with the default delimiters and `'0'` padding.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, &SequenceOptions::default())
    }

    /// Expand `pattern` with explicit options.
    #[must_use]
    pub fn with_options(pattern: &str, options: &SequenceOptions) -> Self {
        let pattern = Pattern::parse(pattern, &options.delimiters, options.pad_char);
        let paths = generate_paths(&pattern);
        Self { pattern, paths }
    }

    /// The materialized path list. Unlike [`PathSequence::full_paths`], this
    /// includes the single path of a degenerate expansion.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The path at `index` in the materialized list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    /// Iterate over the materialized paths in enumeration order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.paths.iter()
    }
}

impl PathSequence for EagerSequence {
    fn pattern(&self) -> &str {
        self.pattern.original()
    }

    fn is_ok(&self) -> bool {
        self.paths.len() > 1
    }

    fn len(&self) -> usize {
        if self.is_ok() { self.paths.len() } else { 0 }
    }

    fn path(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(Cow::Borrowed)
    }
}

impl Index<usize> for EagerSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.get(index).unwrap_or(INVALID_PATH)
    }
}

impl<'a> IntoIterator for &'a EagerSequence {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every textual expansion a token contributes, in enumeration order.
fn expansions(token: &Token, pad_char: char) -> Vec<String> {
    match token {
        Token::Literal(text) => vec![text.clone()],
        Token::Sequence { slices, .. } => {
            let mut values = Vec::new();
            for slice in slices {
                for offset in 0..slice.cardinality() {
                    values.push(write_padded(slice.value_at(offset), slice.pad, pad_char));
                }
            }
            values
        }
    }
}

/// Cartesian product of all token expansions, row-major with the last token
/// varying fastest.
fn generate_paths(pattern: &Pattern) -> Vec<String> {
    let mut paths = vec![String::new()];
    for token in pattern.tokens() {
        let parts = expansions(token, pattern.pad_char());
        let mut extended = Vec::with_capacity(paths.len().saturating_mul(parts.len()));
        for path in &paths {
            for part in &parts {
                let mut combined = String::with_capacity(path.len() + part.len());
                combined.push_str(path);
                combined.push_str(part);
                extended.push(combined);
            }
        }
        paths = extended;
    }
    paths
}
