//! String templating and rounding helpers.

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so `"wi-fi"` becomes
/// `"Wi-Fi"`.
///
/// ```
/// use craft_advisor::utils::format::title_case;
///
/// assert_eq!(title_case("sMART home"), "Smart Home");
/// assert_eq!(title_case("wi-fi"), "Wi-Fi");
/// ```
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Replace every `{key}` placeholder in `template` with its value.
///
/// Unknown placeholders are left untouched. Substituted values are never
/// re-scanned, so caller text containing braces is copied verbatim.
#[must_use]
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Round to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a whole percentage, rounded half away from zero.
///
/// Returns `None` when `whole` is not positive.
#[must_use]
pub fn whole_percent(part: f64, whole: f64) -> Option<u32> {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return None;
    }
    let percent = (part / whole * 100.0).round().max(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to >= 0
    Some(percent as u32)
}
