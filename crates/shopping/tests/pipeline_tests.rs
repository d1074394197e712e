use mealmate_shopping::{aggregate, format_entry, parse_line, Unit};

fn run(recipes: &[(&str, &[&str])]) -> Vec<String> {
    let pairs = recipes.iter().flat_map(|(name, lines)| {
        lines
            .iter()
            .map(move |line| (name.to_string(), parse_line(line)))
    });
    aggregate(pairs).iter().map(format_entry).collect()
}

/// Full parse → normalize → aggregate → format flow over three overlapping
/// recipes.
#[test]
fn test_full_pipeline_over_three_recipes() {
    let list = run(&[
        (
            "Chicken Tikka Masala",
            &[
                "2 lbs chicken breast",
                "1 onion",
                "2 tbsp olive oil",
                "3 cloves garlic",
            ],
        ),
        (
            "Chicken Stir Fry",
            &[
                "1 lb Chicken Breast",
                "1/2 cup onions",
                "1 tablespoon olive oil",
                "1 1/2 tbsp ginger",
            ],
        ),
        (
            "Rice Pilaf",
            &["1 cup milk", "240 ml milk", "Salt to taste", "2 cups rice"],
        ),
    ]);

    // Chicken merges case-insensitively across recipes: 3 lbs in grams.
    assert!(list.contains(&"1360.77 g chicken breast".to_string()));

    // Whole onion and cup of onions are incompatible classes, two rows.
    assert!(list.contains(&"1 onion".to_string()));
    assert!(list.contains(&"0.5 cup onions".to_string()));

    // 2 tbsp + 1 tbsp = 3 tbsp = 3/16 cup.
    assert!(list.contains(&"0.19 cup olive oil".to_string()));

    // 1 cup + 240 ml = 2 cups.
    assert!(list.contains(&"2 cups milk".to_string()));

    // Unparseable quantity survives verbatim.
    assert!(list.contains(&"Salt to taste".to_string()));

    assert!(list.contains(&"3 cloves garlic".to_string()));
    assert!(list.contains(&"2 cups rice".to_string()));
}

#[test]
fn test_output_order_is_first_seen_and_deterministic() {
    let recipes: &[(&str, &[&str])] = &[
        ("A", &["2 cups flour", "1 cup sugar"]),
        ("B", &["1 cup flour", "3 eggs", "1 cup sugar"]),
    ];

    let first = run(recipes);
    let second = run(recipes);

    assert_eq!(first, second);
    assert_eq!(first, vec!["3 cups flour", "2 cups sugar", "3 eggs"]);
}

#[test]
fn test_row_count_bounded_by_distinct_item_class_pairs() {
    let list = run(&[
        ("A", &["1 cup flour", "1 bag flour", "1 cup flour"]),
        ("B", &["2 cups flour"]),
    ]);

    // Three distinct (item, class) partitions collapse to two rows.
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], "4 cups flour");
    assert_eq!(list[1], "1 bag flour");
}

#[test]
fn test_unit_vocabulary_round_trip() {
    // The formatter pluralizes with the same vocabulary the parser folds.
    let parsed = parse_line("2 cups flour");
    assert_eq!(parsed.unit, Some(Unit::Cup));
    assert_eq!(Unit::Cup.label(true), "cups");
    assert_eq!(Unit::Cup.label(false), "cup");
}
