//! Fixed-width decimal formatting shared by both expanders.

/// Format `value` in decimal, padded to at least `pad` characters with
/// `pad_char`.
///
/// Justification is internal: the fill sits between a leading minus sign and
/// the digits, so the sign stays adjacent to the number's magnitude. Values
/// already wider than `pad` are emitted unpadded.
///
/// # Examples
///
/// ```
/// use fileseq::write_padded;
///
/// assert_eq!(write_padded(7, 4, '0'), "0007");
/// assert_eq!(write_padded(-1, 4, '0'), "-001");
/// assert_eq!(write_padded(-1, 4, ' '), "-  1");
/// assert_eq!(write_padded(12345, 4, '0'), "12345");
/// ```
#[must_use]
pub fn write_padded(value: i64, pad: u8, pad_char: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    let width = usize::from(pad);
    let used = sign.len() + digits.len();
    let mut out = String::with_capacity(width.max(used));
    out.push_str(sign);
    for _ in used..width {
        out.push(pad_char);
    }
    out.push_str(&digits);
    out
}
