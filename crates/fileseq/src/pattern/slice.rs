//! The slice grammar: `( INT | PADRUN ) [ '-' INT ] [ 'x' INT ] [ PADRUN ]`.
//!
//! A sequence token is a comma-separated list of slices. Each alternative is
//! parsed in fixed stage order (start, end, step, padding) by a cursor over
//! an immutable string; every stage either consumes what it recognises or
//! fails the whole token.

use crate::errors::SliceError;

/// One parsed range descriptor: begin, end, step, and padding width.
///
/// The step is never zero in a parsed slice; its sign gives the iteration
/// direction, and the range end is inclusive subject to that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// First value of the range.
    pub begin: i32,
    /// Last value of the range (inclusive).
    pub end: i32,
    /// Iteration stride; negative when `begin > end`.
    pub step: i32,
    /// Digit width for padded formatting (`@` adds 1, `#` adds 4).
    pub pad: u8,
}

impl Slice {
    /// Number of values the slice produces.
    ///
    /// Computed as `(end - begin) / step + 1` with truncating integer
    /// division, exactly as the validity check below; a slice with a
    /// negative quotient (or a zero step) produces nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileseq::Slice;
    ///
    /// let slice = Slice { begin: 1, end: 10, step: 4, pad: 0 };
    /// assert_eq!(slice.cardinality(), 3); // 1, 5, 9
    /// ```
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self.quotient() {
            Some(quotient) if quotient >= 0 => usize::try_from(quotient + 1).unwrap_or(usize::MAX),
            _ => 0,
        }
    }

    /// Whether the begin/end/step combination describes a non-empty range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.quotient(), Some(quotient) if quotient >= 0)
    }

    /// `(end - begin) / step` in i64, `None` for a zero step.
    fn quotient(&self) -> Option<i64> {
        if self.step == 0 {
            return None;
        }
        let span = i64::from(self.end) - i64::from(self.begin);
        Some(span / i64::from(self.step))
    }

    /// Value at `offset` steps from `begin`. Callers keep `offset` below
    /// [`Self::cardinality`], so the result stays within the range bounds.
    pub(crate) fn value_at(&self, offset: usize) -> i64 {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        i64::from(self.begin) + i64::from(self.step) * offset
    }
}

/// Whether every character of `token` belongs to the sequence grammar
/// charset `# , - 0-9 @ x`.
///
/// Tokens containing anything else are literals; this is a classification,
/// not an error.
#[must_use]
pub fn is_sequence_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| matches!(b, b'#' | b',' | b'-' | b'0'..=b'9' | b'@' | b'x'))
}

/// Parse a full sequence token into its comma-separated slices, in order.
///
/// # Errors
///
/// Returns a [`SliceError`] when any alternative is empty, fails one of the
/// parse stages, uses a zero step, or describes a range with no elements.
/// One failed alternative aborts the whole token.
///
/// # Examples
///
/// ```
/// use fileseq::{Slice, parse_slices};
///
/// let slices = parse_slices("1-8x2@@").expect("token matches the grammar");
/// assert_eq!(slices, [Slice { begin: 1, end: 8, step: 2, pad: 2 }]);
/// assert!(parse_slices("1-").is_err());
/// ```
pub fn parse_slices(token: &str) -> Result<Vec<Slice>, SliceError> {
    let mut slices = Vec::new();
    let mut offset = 0;

    for alternative in token.split(',') {
        if alternative.is_empty() {
            return Err(SliceError::EmptyAlternative { position: offset });
        }

        let mut slice = Slice {
            begin: 0,
            end: 0,
            step: 1,
            pad: 0,
        };
        let mut cursor = Cursor::new(alternative);
        parse_start(&mut cursor, &mut slice)
            .and_then(|()| parse_end(&mut cursor, &mut slice))
            .and_then(|()| parse_step(&mut cursor, &mut slice))
            .and_then(|()| parse_pad_run(&mut cursor, &mut slice))
            .map_err(|error| error.offset_by(offset))?;

        if !slice.is_valid() {
            return Err(SliceError::EmptyRange {
                begin: slice.begin,
                end: slice.end,
                step: slice.step,
            });
        }

        slices.push(slice);
        offset += alternative.len() + 1;
    }

    Ok(slices)
}

/// Position-index cursor over an immutable alternative string.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Parse a signed decimal integer at the cursor, saturating at the i32
    /// bounds. The cursor is left untouched when no digits are found.
    fn parse_integer(&mut self) -> Result<i32, SliceError> {
        let start = self.pos;
        let negative = match self.peek() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        };

        let digits_start = self.pos;
        let mut value = 0_i64;
        while let Some(digit @ b'0'..=b'9') = self.peek() {
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'));
            self.bump();
        }
        if self.pos == digits_start {
            self.pos = start;
            return Err(SliceError::ExpectedInteger { position: start });
        }

        if negative {
            value = -value;
        }
        Ok(i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX }))
    }
}

/// Start stage: a leading pad run is the padding-only shorthand
/// (`begin = 0`, `end = 10^pad - 1`); otherwise a signed integer sets both
/// `begin` and `end`.
fn parse_start(cursor: &mut Cursor<'_>, slice: &mut Slice) -> Result<(), SliceError> {
    if matches!(cursor.peek(), Some(b'#' | b'@')) {
        if parse_pad_run(cursor, slice).is_ok() {
            slice.end = pad_limit(slice.pad);
            return Ok(());
        }
        // An interrupted pad run keeps its accumulated width and cursor
        // position; the integer path continues from there.
    }

    slice.begin = cursor.parse_integer()?;
    slice.end = slice.begin;
    Ok(())
}

/// End stage: `-` introduces an explicit range end; pad characters are left
/// for the padding stage. A descending range flips the step to -1.
fn parse_end(cursor: &mut Cursor<'_>, slice: &mut Slice) -> Result<(), SliceError> {
    match cursor.peek() {
        None | Some(b'#' | b'@') => {}
        Some(b'-') => {
            cursor.bump();
            slice.end = cursor.parse_integer()?;
        }
        Some(other) => {
            return Err(SliceError::UnexpectedCharacter {
                found: char::from(other),
                position: cursor.pos,
            });
        }
    }

    if slice.begin > slice.end {
        slice.step = -1;
    }
    Ok(())
}

/// Step stage: `x` introduces an explicit non-zero step.
fn parse_step(cursor: &mut Cursor<'_>, slice: &mut Slice) -> Result<(), SliceError> {
    match cursor.peek() {
        None | Some(b'#' | b'@') => {}
        Some(b'x') => {
            cursor.bump();
            let position = cursor.pos;
            let step = cursor.parse_integer()?;
            if step == 0 {
                return Err(SliceError::ZeroStep { position });
            }
            slice.step = step;
        }
        Some(other) => {
            return Err(SliceError::UnexpectedCharacter {
                found: char::from(other),
                position: cursor.pos,
            });
        }
    }
    Ok(())
}

/// Padding stage: consume `@` (1 digit) and `#` (4 digits) to the end of the
/// alternative.
fn parse_pad_run(cursor: &mut Cursor<'_>, slice: &mut Slice) -> Result<(), SliceError> {
    while let Some(byte) = cursor.peek() {
        match byte {
            b'@' => slice.pad = slice.pad.saturating_add(1),
            b'#' => slice.pad = slice.pad.saturating_add(4),
            other => {
                return Err(SliceError::UnexpectedCharacter {
                    found: char::from(other),
                    position: cursor.pos,
                });
            }
        }
        cursor.bump();
    }
    Ok(())
}

/// Largest value expressible in `pad` digits, clamped to the i32 range.
fn pad_limit(pad: u8) -> i32 {
    let limit = 10_i64.saturating_pow(u32::from(pad)) - 1;
    i32::try_from(limit).unwrap_or(i32::MAX)
}
