// CSS value formatting for element placement. Kept free of web-sys so the
// host tests can include it directly.

#[inline]
pub fn px(v: f32) -> String {
    if v.is_finite() {
        format!("{v}px")
    } else {
        "0px".to_string()
    }
}

#[inline]
pub fn opacity(v: f32) -> String {
    let v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
    format!("{v}")
}

/// Trimmed selector from the override attribute, if it names anything.
#[inline]
pub fn selector_or_default<'a>(attr: Option<&'a str>, default: &'a str) -> &'a str {
    match attr.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}
