pub mod aggregation;
pub mod format;
pub mod parse;
pub mod quantity;
pub mod unit;

// Re-export commonly used types
pub use aggregation::{aggregate, AggregatedEntry};
pub use format::format_entry;
pub use parse::{parse_line, ParsedIngredient};
pub use quantity::{format_quantity, parse_number};
pub use unit::{NormalizedUnit, Unit, UnitClass};
