//! Numeric scanning with `scanf` conventions
//!
//! Conversions skip leading whitespace, consume the longest numeric prefix
//! and leave the rest of the input alone.

fn skip_whitespace(text: &[u8]) -> &[u8] {
    let skip = text
        .iter()
        .take_while(|byte| byte.is_ascii_whitespace())
        .count();
    &text[skip..]
}

fn count_digits(text: &[u8]) -> usize {
    text.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Scan a decimal float, returning it with the unread remainder
///
/// Accepts an optional sign, digits with an optional fraction and an
/// optional exponent. Non-finite results are rejected.
pub(crate) fn float_prefix(text: &[u8]) -> Option<(f32, &[u8])> {
    let text = skip_whitespace(text);

    let mut len = 0;
    if matches!(text.first(), Some(b'+' | b'-')) {
        len += 1;
    }
    let int_digits = count_digits(&text[len..]);
    len += int_digits;

    let mut frac_digits = 0;
    if text.get(len) == Some(&b'.') {
        frac_digits = count_digits(&text[len + 1..]);
        len += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(text.get(len), Some(b'e' | b'E')) {
        let mut exp_len = 1;
        if matches!(text.get(len + 1), Some(b'+' | b'-')) {
            exp_len += 1;
        }
        let exp_digits = count_digits(&text[len + exp_len..]);
        if exp_digits > 0 {
            len += exp_len + exp_digits;
        }
    }

    let value: f32 = core::str::from_utf8(&text[..len]).ok()?.parse().ok()?;
    value.is_finite().then_some((value, &text[len..]))
}

/// Scan an unsigned decimal integer, saturating at `u32::MAX`
pub(crate) fn uint_prefix(text: &[u8]) -> Option<(u32, &[u8])> {
    let text = skip_whitespace(text);
    let text = text.strip_prefix(b"+").unwrap_or(text);

    let digits = count_digits(text);
    if digits == 0 {
        return None;
    }
    let value = text[..digits].iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    });
    Some((value, &text[digits..]))
}

/// Match `<keyword><float>`
pub(crate) fn keyword_float(text: &[u8], keyword: &[u8]) -> Option<f32> {
    let rest = text.strip_prefix(keyword)?;
    float_prefix(rest).map(|(value, _)| value)
}

/// Match `<keyword><uint>`
pub(crate) fn keyword_uint(text: &[u8], keyword: &[u8]) -> Option<u32> {
    let rest = text.strip_prefix(keyword)?;
    uint_prefix(rest).map(|(value, _)| value)
}

/// Match `<float>,<float>,<float>`
pub(crate) fn float_triplet(text: &[u8]) -> Option<(f32, f32, f32)> {
    let (first, rest) = float_prefix(text)?;
    let (second, rest) = float_prefix(rest.strip_prefix(b",")?)?;
    let (third, _) = float_prefix(rest.strip_prefix(b",")?)?;
    Some((first, second, third))
}
