use anyhow::{bail, Result};
use clap::Subcommand;

use mealmate_mealplan::SavedPlan;

use crate::config::Config;
use crate::db;

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// List saved grocery lists
    List,
    /// Show a saved grocery list with its checked state
    Show { id: String },
    /// Mark an item as collected
    Check { id: String, item: String },
    /// Unmark a collected item
    Uncheck { id: String, item: String },
    /// Delete a saved grocery list
    Delete { id: String },
}

pub fn list_command(config: &Config, cmd: ListCommand) -> Result<()> {
    let path = &config.data.plans_path;
    let mut plans = db::load_plans(path)?;

    match cmd {
        ListCommand::List => {
            if plans.is_empty() {
                println!("No saved grocery lists");
                return Ok(());
            }
            for saved in &plans {
                println!(
                    "{}  {} to {}  {} recipes, {} items",
                    saved.id,
                    saved.plan.date_range.start(),
                    saved.plan.date_range.end(),
                    saved.plan.recipe_names.len(),
                    saved.plan.grocery_list.len()
                );
            }
            Ok(())
        }
        ListCommand::Show { id } => {
            let saved = find(&plans, &id)?;

            println!(
                "Meal plan {} to {}",
                saved.plan.date_range.start(),
                saved.plan.date_range.end()
            );
            for name in &saved.plan.recipe_names {
                println!("  - {}", name);
            }
            println!();
            for item in &saved.plan.grocery_list {
                let mark = if saved.checks.is_checked(item) { "x" } else { " " };
                println!("  [{}] {}", mark, item);
            }
            Ok(())
        }
        ListCommand::Check { id, item } => {
            let saved = find_mut(&mut plans, &id)?;
            saved.checks.check(&item);
            db::save_plans(path, &plans)?;
            Ok(())
        }
        ListCommand::Uncheck { id, item } => {
            let saved = find_mut(&mut plans, &id)?;
            saved.checks.uncheck(&item);
            db::save_plans(path, &plans)?;
            Ok(())
        }
        ListCommand::Delete { id } => {
            let index = position(&plans, &id)?;
            let removed = plans.remove(index);
            db::save_plans(path, &plans)?;
            println!("Deleted {}", removed.id);
            Ok(())
        }
    }
}

/// Match a saved plan by full id or unique prefix.
fn position(plans: &[SavedPlan], id: &str) -> Result<usize> {
    let matches: Vec<usize> = plans
        .iter()
        .enumerate()
        .filter(|(_, saved)| saved.id.to_string().starts_with(id))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => bail!("no saved list matches '{}'", id),
        _ => bail!("'{}' matches more than one saved list", id),
    }
}

fn find<'a>(plans: &'a [SavedPlan], id: &str) -> Result<&'a SavedPlan> {
    position(plans, id).map(|i| &plans[i])
}

fn find_mut<'a>(plans: &'a mut Vec<SavedPlan>, id: &str) -> Result<&'a mut SavedPlan> {
    let index = position(plans, id)?;
    Ok(&mut plans[index])
}
