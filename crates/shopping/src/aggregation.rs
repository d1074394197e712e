use indexmap::IndexMap;

use crate::parse::ParsedIngredient;
use crate::unit::{Unit, UnitClass};

/// One consolidated grocery-list row for an (item, unit class) pair.
///
/// `total_quantity` is in the canonical unit of the class. When any line in
/// the partition had no parseable quantity, no sum is attempted:
/// `total_quantity` is None and every raw line is kept in `raw_fallbacks`.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedEntry {
    pub item: String,
    pub display: String,
    pub total_quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub sources: Vec<String>,
    pub raw_fallbacks: Vec<String>,
}

struct Bucket {
    display: String,
    canonical_unit: Option<Unit>,
    total: f64,
    missing_quantity: bool,
    raws: Vec<String>,
    sources: Vec<String>,
}

/// Merge parsed ingredients across recipes.
///
/// Grouping is by exact normalized item key, partitioned by unit class;
/// incompatible unit classes for the same item stay separate rows rather
/// than being silently conflated. Output order is first-seen order, so for
/// a fixed input order the result is fully deterministic.
pub fn aggregate<I>(entries: I) -> Vec<AggregatedEntry>
where
    I: IntoIterator<Item = (String, ParsedIngredient)>,
{
    let mut buckets: IndexMap<(String, UnitClass), Bucket> = IndexMap::new();

    for (recipe, parsed) in entries {
        let class = match &parsed.unit {
            Some(unit) => unit.class(),
            None => UnitClass::Count,
        };

        let bucket = buckets
            .entry((parsed.item.clone(), class))
            .or_insert_with(|| Bucket {
                display: parsed.display.clone(),
                canonical_unit: parsed.unit.as_ref().map(Unit::canonical),
                total: 0.0,
                missing_quantity: false,
                raws: Vec::new(),
                sources: Vec::new(),
            });

        match parsed.quantity {
            Some(quantity) => {
                let factor = parsed.unit.as_ref().map(Unit::factor).unwrap_or(1.0);
                bucket.total += quantity * factor;
            }
            None => bucket.missing_quantity = true,
        }

        bucket.raws.push(parsed.raw);
        if !bucket.sources.contains(&recipe) {
            bucket.sources.push(recipe);
        }
    }

    buckets
        .into_iter()
        .map(|((item, _class), bucket)| {
            if bucket.missing_quantity {
                AggregatedEntry {
                    item,
                    display: bucket.display,
                    total_quantity: None,
                    unit: None,
                    sources: bucket.sources,
                    raw_fallbacks: bucket.raws,
                }
            } else {
                AggregatedEntry {
                    item,
                    display: bucket.display,
                    total_quantity: Some(bucket.total),
                    unit: bucket.canonical_unit,
                    sources: bucket.sources,
                    raw_fallbacks: Vec::new(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, ParsedIngredient)> {
        input
            .iter()
            .map(|(recipe, line)| (recipe.to_string(), parse_line(line)))
            .collect()
    }

    #[test]
    fn test_same_item_same_unit_sums() {
        let result = aggregate(pairs(&[("A", "1 cup flour"), ("B", "1 cup flour")]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item, "flour");
        assert_eq!(result[0].total_quantity, Some(2.0));
        assert_eq!(result[0].unit, Some(Unit::Cup));
        assert_eq!(result[0].sources, vec!["A", "B"]);
    }

    #[test]
    fn test_compatible_units_convert_to_canonical() {
        // 1 cup + 8 tbsp = 1.5 cups
        let result = aggregate(pairs(&[("A", "1 cup milk"), ("B", "8 tbsp milk")]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_quantity, Some(1.5));
        assert_eq!(result[0].unit, Some(Unit::Cup));
    }

    #[test]
    fn test_weight_units_convert_to_grams() {
        let result = aggregate(pairs(&[("A", "1 kg beef"), ("B", "500 g beef")]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_quantity, Some(1500.0));
        assert_eq!(result[0].unit, Some(Unit::Gram));
    }

    #[test]
    fn test_incompatible_classes_stay_separate() {
        let result = aggregate(pairs(&[("A", "1 cup flour"), ("B", "1 bag flour")]));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].unit, Some(Unit::Cup));
        assert_eq!(result[1].unit, Some(Unit::Other("bag".to_string())));
        assert_eq!(result[0].total_quantity, Some(1.0));
        assert_eq!(result[1].total_quantity, Some(1.0));
    }

    #[test]
    fn test_count_class_sums_unitless() {
        let result = aggregate(pairs(&[("A", "1 onion"), ("B", "2 onions")]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item, "onion");
        assert_eq!(result[0].total_quantity, Some(3.0));
        assert_eq!(result[0].unit, None);
    }

    #[test]
    fn test_missing_quantity_disables_summing() {
        let result = aggregate(pairs(&[
            ("A", "Salt to taste"),
            ("B", "Salt to taste"),
        ]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_quantity, None);
        assert_eq!(
            result[0].raw_fallbacks,
            vec!["Salt to taste", "Salt to taste"]
        );
    }

    #[test]
    fn test_first_seen_order_is_stable() {
        let result = aggregate(pairs(&[
            ("A", "2 cups flour"),
            ("A", "1 onion"),
            ("B", "1 cup flour"),
            ("B", "3 eggs"),
        ]));

        let items: Vec<&str> = result.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["flour", "onion", "egg"]);
    }

    #[test]
    fn test_sources_deduplicated_in_order() {
        let result = aggregate(pairs(&[
            ("A", "1 cup flour"),
            ("B", "1 cup flour"),
            ("A", "2 cups flour"),
        ]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sources, vec!["A", "B"]);
        assert_eq!(result[0].total_quantity, Some(4.0));
    }

    #[test]
    fn test_container_units_sum_within_their_class() {
        let result = aggregate(pairs(&[("A", "2 cloves garlic"), ("B", "1 clove garlic")]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_quantity, Some(3.0));
        assert_eq!(result[0].unit, Some(Unit::Other("clove".to_string())));
    }
}
