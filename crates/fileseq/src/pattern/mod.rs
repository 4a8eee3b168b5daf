//! Parsed pattern representation shared by both expanders.

mod lexer;
mod slice;

pub use lexer::{DEFAULT_DELIMITERS, split_tokens};
pub use slice::{Slice, is_sequence_token, parse_slices};

/// One tokenized segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Verbatim text, including delimiter characters.
    Literal(String),
    /// A segment recognised as one or more comma-separated ranges.
    Sequence {
        /// Textual form of the segment as it appeared in the pattern.
        text: String,
        /// Parsed alternatives, in order.
        slices: Vec<Slice>,
    },
}

impl Token {
    /// Textual form as it appeared in the pattern.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Sequence { text, .. } => text,
        }
    }

    /// How many paths this token can contribute: 1 for a literal, the sum of
    /// slice cardinalities for a sequence (commas append alternatives, they
    /// do not multiply).
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Sequence { slices, .. } => {
                slices.iter().map(Slice::cardinality).fold(0, usize::saturating_add)
            }
        }
    }
}

/// A pattern parsed once from an immutable input string and delimiter set.
///
/// Parsing never fails: a token whose characters fit the sequence charset but
/// whose content fails the grammar silently degrades to a literal, and the
/// degenerate expansion surfaces later through `is_ok()`.
#[derive(Debug, Clone)]
pub struct Pattern {
    original: String,
    tokens: Vec<Token>,
    pad_char: char,
}

impl Pattern {
    /// Tokenize `pattern` on `delimiters` (empty selects the default set)
    /// and classify each token, remembering `pad_char` for formatting.
    #[must_use]
    pub fn parse(pattern: &str, delimiters: &str, pad_char: char) -> Self {
        let mut tokens = Vec::new();
        for text in split_tokens(pattern, delimiters) {
            if is_sequence_token(&text) {
                match parse_slices(&text) {
                    Ok(slices) => {
                        tokens.push(Token::Sequence { text, slices });
                        continue;
                    }
                    Err(error) => {
                        log::debug!("token `{text}` kept as a literal: {error}");
                    }
                }
            }
            tokens.push(Token::Literal(text));
        }

        Self {
            original: pattern.to_owned(),
            tokens,
            pad_char,
        }
    }

    /// The pattern string the parse started from.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Parsed tokens in pattern order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Fill character used when formatting padded values.
    #[must_use]
    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Product of token cardinalities, saturating at `usize::MAX`.
    #[must_use]
    pub fn total_paths(&self) -> usize {
        self.tokens
            .iter()
            .fold(1, |total, token| total.saturating_mul(token.cardinality()))
    }

    /// Concatenate all token texts, reproducing the original pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileseq::Pattern;
    ///
    /// let pattern = Pattern::parse("shot/beauty.1-5#.exr", "", '0');
    /// assert_eq!(pattern.reconstruct(), "shot/beauty.1-5#.exr");
    /// ```
    #[must_use]
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }
}
