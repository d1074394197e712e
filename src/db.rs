use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use mealmate_mealplan::SavedPlan;
use mealmate_recipe::InMemoryRecipeStore;

/// Load the recipe catalog; a missing file is an empty catalog.
pub fn load_recipes(path: &str) -> Result<InMemoryRecipeStore> {
    if !Path::new(path).exists() {
        return Ok(InMemoryRecipeStore::new());
    }

    InMemoryRecipeStore::load_json(path)
        .with_context(|| format!("failed to load recipe catalog from {}", path))
}

pub fn save_recipes(path: &str, store: &InMemoryRecipeStore) -> Result<()> {
    store
        .save_json(path)
        .with_context(|| format!("failed to save recipe catalog to {}", path))
}

/// Load saved grocery lists; a missing file means none saved yet.
pub fn load_plans(path: &str) -> Result<Vec<SavedPlan>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read saved lists from {}", path))?;
    serde_json::from_str(&data).with_context(|| format!("malformed saved lists in {}", path))
}

pub fn save_plans(path: &str, plans: &[SavedPlan]) -> Result<()> {
    let data = serde_json::to_string_pretty(plans)?;
    fs::write(path, data).with_context(|| format!("failed to write saved lists to {}", path))?;
    tracing::debug!(count = plans.len(), path, "saved grocery lists");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealmate_mealplan::MealPlan;
    use mealmate_recipe::Recipe;
    use mealmate_shared::DateRange;
    use time::macros::date;

    #[test]
    fn test_missing_files_mean_empty_stores() {
        let dir = temp_dir::TempDir::new().unwrap();
        let recipes = dir.child("recipes.json");
        let plans = dir.child("lists.json");

        assert!(load_recipes(recipes.to_str().unwrap()).unwrap().is_empty());
        assert!(load_plans(plans.to_str().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_plans_round_trip() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("lists.json");
        let path = path.to_str().unwrap();

        let plan = MealPlan {
            recipe_names: vec!["Chili".to_string()],
            date_range: DateRange::new(date!(2025 - 06 - 02), date!(2025 - 06 - 08)).unwrap(),
            grocery_list: vec!["1 lb beef".to_string()],
        };
        save_plans(path, &[SavedPlan::new(plan.clone())]).unwrap();

        let loaded = load_plans(path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].plan, plan);
    }

    #[test]
    fn test_recipes_round_trip() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("recipes.json");
        let path = path.to_str().unwrap();

        let mut store = InMemoryRecipeStore::new();
        store
            .upsert(Recipe::new("Chili").with_ingredients(["1 lb beef"]))
            .unwrap();
        save_recipes(path, &store).unwrap();

        let loaded = load_recipes(path).unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
