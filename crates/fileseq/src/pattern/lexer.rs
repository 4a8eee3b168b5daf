//! Pattern tokenizer splitting on a configurable delimiter set.

/// Delimiters used when the caller supplies an empty set.
pub const DEFAULT_DELIMITERS: &str = "\\/.";

/// Split `pattern` into an ordered token list on the `delimiters` set.
///
/// Each delimiter character becomes its own one-character token; the spans
/// between delimiters become candidate sequence tokens. An empty `delimiters`
/// set selects [`DEFAULT_DELIMITERS`]. The split is lossless: concatenating
/// the tokens reproduces `pattern` exactly.
///
/// # Examples
///
/// ```
/// use fileseq::split_tokens;
///
/// let tokens = split_tokens("a/b.exr", "");
/// assert_eq!(tokens, ["a", "/", "b", ".", "exr"]);
/// assert_eq!(tokens.concat(), "a/b.exr");
/// ```
#[must_use]
pub fn split_tokens(pattern: &str, delimiters: &str) -> Vec<String> {
    let delimiters = if delimiters.is_empty() {
        DEFAULT_DELIMITERS
    } else {
        delimiters
    };

    let mut tokens = Vec::new();
    let mut pending = String::new();

    let flush_pending = |pending: &mut String, tokens: &mut Vec<String>| {
        if !pending.is_empty() {
            tokens.push(std::mem::take(pending));
        }
    };

    for ch in pattern.chars() {
        if delimiters.contains(ch) {
            flush_pending(&mut pending, &mut tokens);
            tokens.push(ch.to_string());
        } else {
            pending.push(ch);
        }
    }
    flush_pending(&mut pending, &mut tokens);

    tokens
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn emits_delimiters_as_single_character_tokens() {
        let tokens = split_tokens("render\\beauty.1-5#.exr", "");
        assert_eq!(
            tokens,
            ["render", "\\", "beauty", ".", "1-5#", ".", "exr"]
        );
    }

    #[test]
    fn honours_a_custom_delimiter_set() {
        let tokens = split_tokens("a_1-2@_b", "_");
        assert_eq!(tokens, ["a", "_", "1-2@", "_", "b"]);
    }

    #[test]
    fn collapses_nothing_between_adjacent_delimiters() {
        let tokens = split_tokens("..", "");
        assert_eq!(tokens, [".", "."]);
    }

    #[test]
    fn empty_pattern_yields_no_tokens() {
        assert!(split_tokens("", "").is_empty());
    }

    #[rstest]
    #[case("shot/beauty.1-5#.exr")]
    #[case("/leading/and/trailing/")]
    #[case("no-delimiters-here")]
    #[case("...")]
    fn concatenation_round_trips(#[case] pattern: &str) {
        assert_eq!(split_tokens(pattern, "").concat(), pattern);
    }
}
