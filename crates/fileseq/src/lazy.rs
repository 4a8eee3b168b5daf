//! Lazy expansion: paths are synthesized on demand by index.

use std::borrow::Cow;

use crate::format::write_padded;
use crate::pattern::{Pattern, Slice, Token};
use crate::sequence::{PathSequence, SequenceOptions};

/// File sequence that stores only the parsed pattern and the total path
/// count.
///
/// Construction is proportional to the pattern length, not the number of
/// paths; any single path is synthesized from its index by mixed-radix
/// decomposition across the tokens, with no caching. The trade is memory for
/// recomputation, which pays off for sequences with millions of members.
///
/// # Examples
///
/// ```
/// use fileseq::{LazySequence, PathSequence};
///
/// let sequence = LazySequence::new("beauty.1-10000#.exr");
/// assert_eq!(sequence.len(), 10_000);
/// assert_eq!(sequence.get(9_999).as_deref(), Some("beauty.10000.exr"));
/// ```
#[derive(Debug, Clone)]
pub struct LazySequence {
    pattern: Pattern,
    total: usize,
}

impl LazySequence {
    /// Parse `pattern` with the default delimiters and `'0'` padding.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, &SequenceOptions::default())
    }

    /// Parse `pattern` with explicit options.
    #[must_use]
    pub fn with_options(pattern: &str, options: &SequenceOptions) -> Self {
        let pattern = Pattern::parse(pattern, &options.delimiters, options.pad_char);
        let total = pattern.total_paths();
        Self { pattern, total }
    }

    /// Synthesize the path at `index`, `None` at or past `len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        if index >= self.len() {
            return None;
        }
        Some(self.synthesize(index))
    }

    /// Iterate over the paths in enumeration order, synthesizing each one.
    #[must_use]
    pub fn iter(&self) -> LazyIter<'_> {
        LazyIter {
            sequence: self,
            position: 0,
        }
    }

    /// Walk the tokens with a shrinking radix space, mapping `index` to one
    /// combination of per-token choices. The first token varies slowest, the
    /// last fastest, matching the eager enumeration order exactly.
    fn synthesize(&self, index: usize) -> String {
        let mut path = String::new();
        let mut branch_id = index;
        let mut branches_left = self.total;

        for token in self.pattern.tokens() {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Sequence { slices, .. } => {
                    let cardinality = token.cardinality();
                    let branch = (branch_id % branches_left) / (branches_left / cardinality);
                    path.push_str(&unpack_slices(slices, branch, self.pattern.pad_char()));
                    branch_id %= branches_left;
                    branches_left /= cardinality;
                }
            }
        }

        path
    }
}

/// Slices are concatenated ranges within one token: peel off each slice's
/// cardinality until `branch` lands inside one, then format that value.
fn unpack_slices(slices: &[Slice], mut branch: usize, pad_char: char) -> String {
    for slice in slices {
        let cardinality = slice.cardinality();
        if branch < cardinality {
            return write_padded(slice.value_at(branch), slice.pad, pad_char);
        }
        branch -= cardinality;
    }
    String::new()
}

impl PathSequence for LazySequence {
    fn pattern(&self) -> &str {
        self.pattern.original()
    }

    fn is_ok(&self) -> bool {
        self.total > 1
    }

    fn len(&self) -> usize {
        if self.is_ok() { self.total } else { 0 }
    }

    fn path(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(Cow::Owned)
    }
}

impl<'a> IntoIterator for &'a LazySequence {
    type Item = String;
    type IntoIter = LazyIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator synthesizing one path per step, in enumeration order.
#[derive(Debug, Clone)]
pub struct LazyIter<'a> {
    sequence: &'a LazySequence,
    position: usize,
}

impl Iterator for LazyIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let path = self.sequence.get(self.position)?;
        self.position += 1;
        Some(path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.sequence.len().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl ExactSizeIterator for LazyIter<'_> {}
