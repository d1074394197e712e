use mealmate_recipe::RecipeError;
use mealmate_shared::InvalidDateRange;
use thiserror::Error;

pub type MealPlanResult<T> = Result<T, MealPlanError>;

#[derive(Error, Debug)]
pub enum MealPlanError {
    #[error("{0}")]
    InvalidDateRange(#[from] InvalidDateRange),

    #[error("no recipes selected")]
    NoRecipesSelected,

    /// Recipe lookup failures abort the whole assembly: a silently partial
    /// grocery list would mislead the user about what is missing.
    #[error(transparent)]
    Recipe(#[from] RecipeError),
}
