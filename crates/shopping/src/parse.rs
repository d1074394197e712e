use crate::quantity::{is_fraction_token, is_integer_token, parse_number};
use crate::unit::Unit;

/// One free-text ingredient line after best-effort parsing.
///
/// `item` is the lowercased, descriptor-stripped, singular-folded merge key;
/// `display` is the lowercased item phrase as written (plural kept); `raw`
/// preserves the original line for fallback rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedIngredient {
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub item: String,
    pub display: String,
    pub raw: String,
}

/// Descriptor words stripped from the front of the merge key so "fresh
/// basil" and "basil" land on the same grocery row. Best-effort only.
const DESCRIPTOR_WORDS: &[&str] = &[
    "fresh", "freshly", "chopped", "diced", "minced", "sliced", "grated", "shredded", "melted",
    "softened", "large", "small", "medium", "finely", "coarsely", "roughly", "ripe",
];

/// Parse one ingredient line. Never fails: a line that yields no quantity or
/// unit comes back as a bare item with count semantics, and a line with no
/// item text at all degrades to the whole line as the item.
pub fn parse_line(raw: &str) -> ParsedIngredient {
    let trimmed = raw.trim();
    let stripped = strip_markers(trimmed);
    let tokens: Vec<&str> = stripped.split_whitespace().collect();

    let mut idx = 0;
    let mut quantity: Option<f64> = None;

    match tokens.first() {
        Some(tok) if tok.eq_ignore_ascii_case("a") || tok.eq_ignore_ascii_case("an") => {
            // "a cup of sugar", "a pinch of salt": article counts as 1 only
            // when a unit word follows, so "an apple" stays unitless.
            let followed_by_unit = tokens
                .get(1)
                .map(|t| Unit::parse_token(t).is_some() || Unit::is_count_word(t))
                .unwrap_or(false);
            if followed_by_unit {
                quantity = Some(1.0);
                idx = 1;
            }
        }
        Some(tok) => {
            if let Some(value) = parse_number(tok) {
                quantity = Some(value);
                idx = 1;

                // Mixed number: integer followed by a bare fraction.
                if is_integer_token(tok) {
                    if let Some(next) = tokens.get(1) {
                        if is_fraction_token(next) {
                            quantity = Some(value + parse_number(next).unwrap_or(0.0));
                            idx = 2;
                        }
                    }
                }
            }
        }
        None => {}
    }

    let mut unit: Option<Unit> = None;
    if quantity.is_some() && idx < tokens.len() {
        // Two-word units first ("fl oz", "fluid ounces").
        if idx + 1 < tokens.len() {
            let joined = format!("{} {}", tokens[idx], tokens[idx + 1]);
            if let Some(parsed) = Unit::parse_token(&joined) {
                unit = Some(parsed);
                idx += 2;
            }
        }

        if unit.is_none() {
            if let Some(parsed) = Unit::parse_token(tokens[idx]) {
                unit = Some(parsed);
                idx += 1;
            } else if Unit::is_count_word(tokens[idx]) {
                // "2 whole onions": count semantics, no unit token kept.
                idx += 1;
            }
        }
    }

    if idx < tokens.len() && tokens[idx].eq_ignore_ascii_case("of") {
        idx += 1;
    }

    let rest = tokens[idx..].join(" ");
    if rest.is_empty() {
        // No item text left ("2 cups" alone, or an empty line): keep the
        // whole line as the item with null quantity/unit.
        tracing::debug!(line = %trimmed, "ingredient line has no item text, keeping raw");
        return ParsedIngredient {
            quantity: None,
            unit: None,
            item: normalize_item(trimmed),
            display: trimmed.to_lowercase(),
            raw: trimmed.to_string(),
        };
    }

    let display = rest
        .split(',')
        .next()
        .unwrap_or(&rest)
        .trim()
        .to_lowercase();

    ParsedIngredient {
        quantity,
        unit,
        item: normalize_item(&rest),
        display,
        raw: trimmed.to_string(),
    }
}

/// Strip leading bullet characters and "1)" / "1." list markers (the dotted
/// form only when a real quantity follows, so "1. 2 cups flour" loses the
/// marker but "1.5 cups" keeps its number).
fn strip_markers(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', '•', '·', '–']).trim_start();

    let mut tokens = line.splitn(2, char::is_whitespace);
    let (first, rest) = match (tokens.next(), tokens.next()) {
        (Some(first), Some(rest)) => (first, rest),
        _ => return line,
    };

    // Last char is checked before slicing so the byte index stays on an
    // ASCII boundary even for tokens like "½".
    let is_marker = match first.chars().last() {
        Some(last @ (')' | '.')) => {
            first.len() > 1
                && first[..first.len() - 1].chars().all(|c| c.is_ascii_digit())
                && (last == ')'
                    || rest
                        .split_whitespace()
                        .next()
                        .and_then(parse_number)
                        .is_some())
        }
        _ => false,
    };

    if is_marker {
        rest.trim_start()
    } else {
        line
    }
}

/// Build the merge key: lowercase, cut at the first comma, drop a leading
/// "of" and descriptor words, fold the last word to singular.
fn normalize_item(text: &str) -> String {
    let lowered = text.to_lowercase();
    let head = lowered.split(',').next().unwrap_or(&lowered).trim();

    let mut words: Vec<&str> = head.split_whitespace().collect();
    if words.first() == Some(&"of") {
        words.remove(0);
    }
    while words.len() > 1 && DESCRIPTOR_WORDS.contains(&words[0]) {
        words.remove(0);
    }

    let mut key = words.join(" ");
    if let Some(last) = words.last() {
        let singular = singularize(last);
        if singular != *last {
            let cut = key.len() - last.len();
            key.truncate(cut);
            key.push_str(&singular);
        }
    }

    if key.is_empty() {
        lowered.trim().to_string()
    } else {
        key
    }
}

/// Naive singular fold for the merge key. Deliberately conservative: words
/// ending in "ss"/"us"/"is" are left alone.
fn singularize(word: &str) -> String {
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    if word.len() > 3
        && (word.ends_with("oes")
            || word.ends_with("ches")
            || word.ends_with("shes")
            || word.ends_with("xes")
            || word.ends_with("zes"))
    {
        return word[..word.len() - 2].to_string();
    }

    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}
