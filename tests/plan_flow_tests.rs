use mealmate::db;
use mealmate_mealplan::{generate_grocery_list, GenerateGroceryListCommand, SavedPlan};
use mealmate_recipe::{InMemoryRecipeStore, Recipe};
use time::macros::date;

fn catalog() -> InMemoryRecipeStore {
    [
        Recipe::new("Pancakes")
            .with_ingredients(["2 cups flour", "1 cup milk", "2 eggs", "Salt to taste"])
            .with_folder("Breakfast"),
        Recipe::new("Crepes").with_ingredients(["1 cup flour", "1 1/2 cups milk", "3 eggs"]),
    ]
    .into_iter()
    .collect()
}

/// Catalog on disk → generate → save → reload: the persisted plan is the
/// generated plan, byte for byte.
#[test]
fn test_generate_save_and_reload() {
    let dir = temp_dir::TempDir::new().unwrap();
    let recipes_path = dir.child("recipes.json");
    let plans_path = dir.child("lists.json");

    db::save_recipes(recipes_path.to_str().unwrap(), &catalog()).unwrap();
    let store = db::load_recipes(recipes_path.to_str().unwrap()).unwrap();

    let cmd = GenerateGroceryListCommand {
        recipe_names: vec!["Pancakes".to_string(), "Crepes".to_string()],
        start_date: date!(2025 - 06 - 02),
        end_date: date!(2025 - 06 - 08),
    };
    let plan = generate_grocery_list(&store, &cmd).unwrap();

    assert_eq!(
        plan.grocery_list,
        vec![
            "3 cups flour".to_string(),
            "2.5 cups milk".to_string(),
            "5 eggs".to_string(),
            "Salt to taste".to_string(),
        ]
    );

    db::save_plans(plans_path.to_str().unwrap(), &[SavedPlan::new(plan.clone())]).unwrap();
    let reloaded = db::load_plans(plans_path.to_str().unwrap()).unwrap();

    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].plan, plan);
}

#[test]
fn test_check_state_survives_reload() {
    let dir = temp_dir::TempDir::new().unwrap();
    let plans_path = dir.child("lists.json");
    let plans_path = plans_path.to_str().unwrap();

    let cmd = GenerateGroceryListCommand {
        recipe_names: vec!["Crepes".to_string()],
        start_date: date!(2025 - 06 - 02),
        end_date: date!(2025 - 06 - 02),
    };
    let plan = generate_grocery_list(&catalog(), &cmd).unwrap();

    let mut saved = SavedPlan::new(plan);
    saved.checks.check("1 cup flour");
    db::save_plans(plans_path, &[saved]).unwrap();

    let reloaded = db::load_plans(plans_path).unwrap();
    assert!(reloaded[0].checks.is_checked("1 cup flour"));
    assert!(!reloaded[0].checks.is_checked("3 eggs"));
}
