use time::Date;

use mealmate_recipe::RecipeStore;
use mealmate_shared::DateRange;
use mealmate_shopping::{aggregate, format_entry, parse_line, ParsedIngredient};

use crate::{MealPlan, MealPlanError, MealPlanResult};

/// Command to generate a grocery list for a set of recipes and a date range.
#[derive(Debug, Clone)]
pub struct GenerateGroceryListCommand {
    pub recipe_names: Vec<String>,
    pub start_date: Date,
    pub end_date: Date,
}

/// Assemble a meal plan: resolve each recipe's ingredient lines through the
/// store, parse them, aggregate across recipes, and format the grocery list.
///
/// Validation fails fast before any aggregation work: the date range must be
/// ordered and at least one recipe must be selected. A recipe the store does
/// not know aborts the whole assembly; no partial list is ever returned.
/// The computation itself is pure and deterministic over its inputs.
pub fn generate_grocery_list(
    store: &impl RecipeStore,
    cmd: &GenerateGroceryListCommand,
) -> MealPlanResult<MealPlan> {
    let date_range = DateRange::new(cmd.start_date, cmd.end_date)?;

    if cmd.recipe_names.iter().all(|name| name.trim().is_empty()) {
        return Err(MealPlanError::NoRecipesSelected);
    }

    let recipe_names = dedup_names(&cmd.recipe_names);

    tracing::debug!(
        recipes = recipe_names.len(),
        days = date_range.days(),
        "generating grocery list"
    );

    let mut pairs: Vec<(String, ParsedIngredient)> = Vec::new();
    for name in &recipe_names {
        let lines = store.ingredients(name)?;

        let mut contributed = 0;
        for line in &lines {
            if line.trim().is_empty() {
                continue;
            }
            pairs.push((name.clone(), parse_line(line)));
            contributed += 1;
        }

        // Not fatal: an empty recipe simply contributes nothing.
        if contributed == 0 {
            tracing::warn!(recipe = %name, "recipe has no ingredient lines");
        }
    }

    let grocery_list = aggregate(pairs).iter().map(format_entry).collect();

    Ok(MealPlan {
        recipe_names,
        date_range,
        grocery_list,
    })
}

/// Input order preserved, duplicates (case-insensitive) and blank names
/// dropped.
fn dedup_names(names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }

        let key = trimmed.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(trimmed.to_string());
        }
    }

    out
}
