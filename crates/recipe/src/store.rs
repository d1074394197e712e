use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::{Recipe, RecipeError, RecipeResult};

/// Name → ingredient-lines lookup consumed by the meal plan assembler.
///
/// A missing recipe is a hard error: the assembler propagates it instead of
/// silently producing a partial grocery list.
pub trait RecipeStore {
    fn ingredients(&self, name: &str) -> RecipeResult<Vec<String>>;
}

/// In-memory recipe catalog keyed by case-insensitive name.
///
/// Iteration order is insertion order, so catalog listings and the grocery
/// pipeline downstream stay deterministic.
#[derive(Default, Clone, Debug)]
pub struct InMemoryRecipeStore {
    recipes: IndexMap<String, Recipe>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Insert or replace a recipe. Rejects blank names.
    pub fn upsert(&mut self, recipe: Recipe) -> RecipeResult<()> {
        let key = Self::key(&recipe.name);
        if key.is_empty() {
            return Err(RecipeError::ValidationError(
                "recipe name must not be empty".to_string(),
            ));
        }

        self.recipes.insert(key, recipe);
        Ok(())
    }

    pub fn get(&self, name: &str) -> RecipeResult<&Recipe> {
        self.recipes
            .get(&Self::key(name))
            .ok_or_else(|| RecipeError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> RecipeResult<Recipe> {
        self.recipes
            .shift_remove(&Self::key(name))
            .ok_or_else(|| RecipeError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.values().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Recipes filed under the given folder, in insertion order.
    pub fn in_folder<'a>(&'a self, folder: &'a str) -> impl Iterator<Item = &'a Recipe> {
        self.recipes
            .values()
            .filter(move |r| r.folder.as_deref() == Some(folder))
    }

    /// Distinct folder labels, first-seen order.
    pub fn folders(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for recipe in self.recipes.values() {
            if let Some(folder) = recipe.folder.as_deref() {
                if !out.contains(&folder) {
                    out.push(folder);
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Load a JSON catalog (array of recipes) from disk.
    pub fn load_json(path: impl AsRef<Path>) -> RecipeResult<Self> {
        let data = fs::read_to_string(path)?;
        let recipes: Vec<Recipe> = serde_json::from_str(&data)?;

        let mut store = Self::new();
        for recipe in recipes {
            store.upsert(recipe)?;
        }

        tracing::debug!(count = store.len(), "loaded recipe catalog");
        Ok(store)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> RecipeResult<()> {
        let recipes: Vec<&Recipe> = self.recipes.values().collect();
        let data = serde_json::to_string_pretty(&recipes)?;
        fs::write(path, data)?;
        Ok(())
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn ingredients(&self, name: &str) -> RecipeResult<Vec<String>> {
        self.get(name).map(|r| r.ingredients.clone())
    }
}

impl FromIterator<Recipe> for InMemoryRecipeStore {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        let mut store = Self::new();
        for recipe in iter {
            // Blank names are dropped here; use upsert for validation.
            let _ = store.upsert(recipe);
        }
        store
    }
}
