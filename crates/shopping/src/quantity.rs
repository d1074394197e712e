/// Unicode vulgar fractions accepted in ingredient quantities.
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

fn vulgar_value(c: char) -> Option<f64> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(v, _)| *v == c)
        .map(|(_, value)| *value)
}

/// Parse one numeric token into a quantity.
///
/// Accepted forms: whole numbers ("2"), decimals ("1.5"), simple fractions
/// ("1/2"), unicode vulgar fractions ("½"), and a digit glued to a vulgar
/// fraction ("1½"). Negative and non-finite values are rejected. Returns
/// None when the token is not a quantity; parsing is best-effort and never
/// fails hard.
pub fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    // "½" or "1½"
    if let Some(last) = trimmed.chars().last() {
        if let Some(fraction) = vulgar_value(last) {
            let prefix: String = trimmed.chars().take(trimmed.chars().count() - 1).collect();
            if prefix.is_empty() {
                return Some(fraction);
            }
            let whole: u32 = prefix.parse().ok()?;
            return Some(whole as f64 + fraction);
        }
    }

    // "1/2"
    if let Some((numer, denom)) = trimmed.split_once('/') {
        let numer: u32 = numer.trim().parse().ok()?;
        let denom: u32 = denom.trim().parse().ok()?;
        if denom == 0 {
            return None;
        }
        return Some(numer as f64 / denom as f64);
    }

    // "2" or "1.5"
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value)
}

/// True when the token is a bare fraction ("1/2", "½") usable as the
/// fractional part of a mixed number.
pub fn is_fraction_token(token: &str) -> bool {
    let trimmed = token.trim();
    if trimmed.contains('/') {
        return parse_number(trimmed).is_some();
    }
    let mut chars = trimmed.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if vulgar_value(c).is_some())
}

/// True when the token is a plain integer (the whole part of a mixed number).
pub fn is_integer_token(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Render a quantity for display: whole numbers without a trailing ".0",
/// everything else with at most two decimal places and no trailing zeros.
pub fn format_quantity(quantity: f64) -> String {
    let rounded = (quantity * 100.0).round() / 100.0;

    if rounded.fract().abs() < 1e-9 {
        return format!("{}", rounded as i64);
    }

    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
