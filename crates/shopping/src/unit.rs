use std::fmt;
use std::str::FromStr;

use strum::EnumString;

/// Measurement unit attached to an ingredient quantity.
///
/// Convertible units carry a conversion factor into the canonical unit of
/// their class (cup for volume, gram for weight). Container words like
/// "clove" or "bag" become `Other` units: they sum with themselves but are
/// never converted into anything else.
#[derive(EnumString, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    #[strum(serialize = "cup", serialize = "cups", serialize = "c")]
    Cup,
    #[strum(
        serialize = "tbsp",
        serialize = "tbsps",
        serialize = "tbs",
        serialize = "tablespoon",
        serialize = "tablespoons"
    )]
    Tablespoon,
    #[strum(
        serialize = "tsp",
        serialize = "tsps",
        serialize = "teaspoon",
        serialize = "teaspoons"
    )]
    Teaspoon,
    #[strum(
        serialize = "fl oz",
        serialize = "fluid ounce",
        serialize = "fluid ounces"
    )]
    FluidOunce,
    #[strum(
        serialize = "ml",
        serialize = "milliliter",
        serialize = "milliliters",
        serialize = "millilitre",
        serialize = "millilitres"
    )]
    Milliliter,
    #[strum(
        serialize = "l",
        serialize = "liter",
        serialize = "liters",
        serialize = "litre",
        serialize = "litres"
    )]
    Liter,
    #[strum(serialize = "pint", serialize = "pints", serialize = "pt")]
    Pint,
    #[strum(serialize = "quart", serialize = "quarts", serialize = "qt")]
    Quart,
    #[strum(serialize = "gallon", serialize = "gallons", serialize = "gal")]
    Gallon,
    #[strum(serialize = "g", serialize = "gram", serialize = "grams")]
    Gram,
    #[strum(serialize = "kg", serialize = "kilogram", serialize = "kilograms")]
    Kilogram,
    #[strum(serialize = "oz", serialize = "ounce", serialize = "ounces")]
    Ounce,
    #[strum(
        serialize = "lb",
        serialize = "lbs",
        serialize = "pound",
        serialize = "pounds"
    )]
    Pound,
    /// Known but non-convertible unit (container/count words), stored in
    /// singular form.
    #[strum(disabled)]
    Other(String),
}

/// Grouping of mutually convertible units. Two quantities are summable only
/// when their classes are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Volume,
    Weight,
    /// Unitless items ("3 onions").
    Count,
    /// One class per unknown/container unit so unrelated units never merge.
    Other(String),
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitClass::Volume => write!(f, "volume"),
            UnitClass::Weight => write!(f, "weight"),
            UnitClass::Count => write!(f, "count"),
            UnitClass::Other(tag) => write!(f, "other:{}", tag),
        }
    }
}

/// Outcome of unit normalization: the canonical unit of the class, the class
/// itself, and the factor converting 1 of the input unit into the canonical
/// unit.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedUnit {
    pub canonical: Unit,
    pub class: UnitClass,
    pub factor: f64,
}

/// Container/count words recognized as units, mapped to their singular form.
const CONTAINER_UNITS: &[(&str, &str)] = &[
    ("clove", "clove"),
    ("cloves", "clove"),
    ("bag", "bag"),
    ("bags", "bag"),
    ("can", "can"),
    ("cans", "can"),
    ("jar", "jar"),
    ("jars", "jar"),
    ("box", "box"),
    ("boxes", "box"),
    ("package", "package"),
    ("packages", "package"),
    ("pkg", "package"),
    ("bunch", "bunch"),
    ("bunches", "bunch"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("stick", "stick"),
    ("sticks", "stick"),
    ("head", "head"),
    ("heads", "head"),
    ("stalk", "stalk"),
    ("stalks", "stalk"),
    ("sprig", "sprig"),
    ("sprigs", "sprig"),
    ("pinch", "pinch"),
    ("pinches", "pinch"),
    ("dash", "dash"),
    ("dashes", "dash"),
];

/// Words that mean "one of the item itself"; they fold into count semantics
/// (no unit at all).
const COUNT_WORDS: &[&str] = &["whole", "item", "items", "piece", "pieces"];

impl Unit {
    /// Match one token (or a pre-joined two-word token like "fl oz") against
    /// the unit vocabulary. Case-insensitive, plural and trailing-dot
    /// tolerant. Returns None for words that are not units.
    pub fn parse_token(token: &str) -> Option<Unit> {
        let folded = token.trim().trim_end_matches('.').to_lowercase();
        if folded.is_empty() {
            return None;
        }

        if let Ok(unit) = Unit::from_str(&folded) {
            return Some(unit);
        }

        CONTAINER_UNITS
            .iter()
            .find(|(word, _)| *word == folded)
            .map(|(_, singular)| Unit::Other((*singular).to_string()))
    }

    /// True for "whole"/"piece" style words that carry no unit information.
    pub fn is_count_word(token: &str) -> bool {
        let folded = token.trim().trim_end_matches('.').to_lowercase();
        COUNT_WORDS.contains(&folded.as_str())
    }

    pub fn class(&self) -> UnitClass {
        match self {
            Unit::Cup
            | Unit::Tablespoon
            | Unit::Teaspoon
            | Unit::FluidOunce
            | Unit::Milliliter
            | Unit::Liter
            | Unit::Pint
            | Unit::Quart
            | Unit::Gallon => UnitClass::Volume,
            Unit::Gram | Unit::Kilogram | Unit::Ounce | Unit::Pound => UnitClass::Weight,
            Unit::Other(tag) => UnitClass::Other(tag.clone()),
        }
    }

    /// Factor converting 1 of this unit into the canonical unit of its class.
    ///
    /// Canonical units: cup (volume), gram (weight). `Other` units are their
    /// own canonical, factor 1.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Cup => 1.0,
            Unit::Tablespoon => 1.0 / 16.0,
            Unit::Teaspoon => 1.0 / 48.0,
            Unit::FluidOunce => 1.0 / 8.0,
            Unit::Milliliter => 1.0 / 240.0,
            Unit::Liter => 1000.0 / 240.0,
            Unit::Pint => 2.0,
            Unit::Quart => 4.0,
            Unit::Gallon => 16.0,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Ounce => 28.35,
            Unit::Pound => 453.59,
            Unit::Other(_) => 1.0,
        }
    }

    /// Canonical unit of this unit's class.
    pub fn canonical(&self) -> Unit {
        match self.class() {
            UnitClass::Volume => Unit::Cup,
            UnitClass::Weight => Unit::Gram,
            UnitClass::Count | UnitClass::Other(_) => self.clone(),
        }
    }

    pub fn normalized(&self) -> NormalizedUnit {
        NormalizedUnit {
            canonical: self.canonical(),
            class: self.class(),
            factor: self.factor(),
        }
    }

    /// Display form, pluralized via the parsing vocabulary's inverse.
    /// Abbreviated metric units do not pluralize.
    pub fn label(&self, plural: bool) -> String {
        let singular = match self {
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::FluidOunce => "fl oz",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Other(tag) => tag.as_str(),
        };

        if !plural {
            return singular.to_string();
        }

        match self {
            Unit::Cup | Unit::Pint | Unit::Quart | Unit::Gallon => format!("{}s", singular),
            Unit::Pound => "lbs".to_string(),
            Unit::Other(tag) => pluralize(tag),
            // tbsp, tsp, fl oz and metric abbreviations stay invariant
            _ => singular.to_string(),
        }
    }
}

/// Naive English pluralization for container words.
fn pluralize(word: &str) -> String {
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}
