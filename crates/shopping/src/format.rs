use crate::aggregation::AggregatedEntry;
use crate::quantity::format_quantity;

/// Render one aggregated entry as a grocery-list line.
///
/// Summed entries come out as "<quantity> <unit> <item>" (unit pluralized
/// for quantities above one, omitted for count items). Entries that could
/// not be summed keep every raw line: the single-line case prints the raw
/// line as written, otherwise the item is followed by all raw lines in
/// parentheses.
pub fn format_entry(entry: &AggregatedEntry) -> String {
    match entry.total_quantity {
        Some(quantity) => {
            let amount = format_quantity(quantity);
            match &entry.unit {
                Some(unit) => {
                    format!("{} {} {}", amount, unit.label(quantity > 1.0), entry.display)
                }
                None => format!("{} {}", amount, entry.display),
            }
        }
        None => {
            let only_raw = entry.raw_fallbacks.first().map(|raw| raw.trim());
            match only_raw {
                Some(raw)
                    if entry.raw_fallbacks.len() == 1
                        && raw.eq_ignore_ascii_case(&entry.display) =>
                {
                    raw.to_string()
                }
                _ => format!("{} ({})", entry.display, entry.raw_fallbacks.join(", ")),
            }
        }
    }
}
