use anyhow::{Context, Result};
use clap::Args;
use time::macros::format_description;
use time::Date;

use mealmate_mealplan::{generate_grocery_list, GenerateGroceryListCommand, SavedPlan};

use crate::config::Config;
use crate::db;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Recipe to include (repeat for each recipe)
    #[arg(short = 'r', long = "recipe")]
    pub recipes: Vec<String>,

    /// Plan start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Plan end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Save the generated list for later viewing
    #[arg(long)]
    pub save: bool,
}

pub fn plan_command(config: &Config, args: PlanArgs) -> Result<()> {
    let store = db::load_recipes(&config.data.recipes_path)?;

    let cmd = GenerateGroceryListCommand {
        recipe_names: args.recipes,
        start_date: parse_date(&args.start)?,
        end_date: parse_date(&args.end)?,
    };
    let plan = generate_grocery_list(&store, &cmd)?;

    println!(
        "Meal plan {} to {}",
        plan.date_range.start(),
        plan.date_range.end()
    );
    for name in &plan.recipe_names {
        println!("  - {}", name);
    }

    println!("\nGrocery list ({} items):", plan.grocery_list.len());
    for item in &plan.grocery_list {
        println!("  [ ] {}", item);
    }

    if args.save {
        let mut plans = db::load_plans(&config.data.plans_path)?;
        let saved = SavedPlan::new(plan);
        let id = saved.id;
        plans.push(saved);
        db::save_plans(&config.data.plans_path, &plans)?;
        println!("\nSaved as {}", id);
    }

    Ok(())
}

fn parse_date(input: &str) -> Result<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input, format)
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", input))
}
