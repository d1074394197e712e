mod list;
mod plan;
mod recipe;

pub use list::{list_command, ListCommand};
pub use plan::{plan_command, PlanArgs};
pub use recipe::{recipe_command, RecipeCommand};
