//! Textual cleanup of floating-point literals for the code generators.

/// Remove trailing zeros after the decimal point of a formatted
/// floating-point literal, keeping the decimal point itself and any
/// exponent part intact.
///
/// `"1.500"` becomes `"1.5"`, `"1.2300e+10"` becomes `"1.23e+10"`,
/// `"2."` is unchanged.
pub fn trim_trailing_zeros(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end += 1;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    // end now marks the first character after the mantissa
    if end == 0 || bytes[end - 1] == b'.' {
        return s.to_owned();
    }
    let mut keep = end;
    while keep > 0 && bytes[keep - 1] == b'0' {
        keep -= 1;
    }
    if keep == end {
        return s.to_owned();
    }
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..keep]);
    out.push_str(&s[end..]);
    out
}

/// Rewrite the exponent marker of a double-precision literal from `e` to
/// `d`, as generated Fortran requires. Literals without an exponent are
/// unchanged.
pub fn exponent_to_fortran(s: &str) -> String {
    match s.rfind('e') {
        Some(pos) => {
            let mut out = s.to_owned();
            out.replace_range(pos..=pos, "d");
            out
        }
        None => s.to_owned(),
    }
}
