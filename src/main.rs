use anyhow::Result;
use clap::{Parser, Subcommand};

use mealmate::cli::{list_command, plan_command, recipe_command, ListCommand, PlanArgs, RecipeCommand};
use mealmate::config::Config;
use mealmate::observability::init_observability;

/// mealmate - meal planning and grocery list generation
#[derive(Parser)]
#[command(name = "mealmate")]
#[command(about = "Plan meals and build a consolidated grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a grocery list for selected recipes and a date range
    Plan(PlanArgs),
    /// Manage the recipe catalog
    #[command(subcommand)]
    Recipe(RecipeCommand),
    /// Manage saved grocery lists
    #[command(subcommand)]
    List(ListCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Plan(args) => plan_command(&config, args),
        Commands::Recipe(cmd) => recipe_command(&config, cmd),
        Commands::List(cmd) => list_command(&config, cmd),
    }
}
