use anyhow::{Context, Result};
use clap::Subcommand;

use mealmate_recipe::Recipe;

use crate::config::Config;
use crate::db;

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// List recipes, optionally filtered by folder
    List {
        #[arg(long)]
        folder: Option<String>,
    },
    /// Show one recipe's ingredients and instructions
    Show { name: String },
    /// Add or replace a recipe
    Add {
        name: String,
        /// Ingredient line (repeat for each line)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
        /// Instruction line (repeat for each line)
        #[arg(long = "instruction")]
        instructions: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
        #[arg(long)]
        source_url: Option<String>,
    },
    /// Remove a recipe
    Remove { name: String },
    /// Merge a JSON catalog file into the store
    Import { path: String },
}

pub fn recipe_command(config: &Config, cmd: RecipeCommand) -> Result<()> {
    let path = &config.data.recipes_path;
    let mut store = db::load_recipes(path)?;

    match cmd {
        RecipeCommand::List { folder } => {
            match folder {
                Some(folder) => {
                    for recipe in store.in_folder(&folder) {
                        println!("{}", recipe.name);
                    }
                }
                None => {
                    for recipe in store.iter() {
                        match &recipe.folder {
                            Some(folder) => println!("{} [{}]", recipe.name, folder),
                            None => println!("{}", recipe.name),
                        }
                    }
                }
            }
            Ok(())
        }
        RecipeCommand::Show { name } => {
            let recipe = store.get(&name)?;

            println!("{}", recipe.name);
            if let Some(folder) = &recipe.folder {
                println!("Folder: {}", folder);
            }
            if let Some(url) = &recipe.source_url {
                println!("Source: {}", url);
            }

            println!("\nIngredients:");
            for line in &recipe.ingredients {
                println!("  - {}", line);
            }

            if !recipe.instructions.is_empty() {
                println!("\nInstructions:");
                for (i, line) in recipe.instructions.iter().enumerate() {
                    println!("  {}. {}", i + 1, line);
                }
            }
            Ok(())
        }
        RecipeCommand::Add {
            name,
            ingredients,
            instructions,
            folder,
            source_url,
        } => {
            let recipe = Recipe {
                name: name.clone(),
                folder,
                ingredients,
                instructions,
                source_url,
            };
            store.upsert(recipe)?;
            db::save_recipes(path, &store)?;
            println!("Saved recipe '{}'", name);
            Ok(())
        }
        RecipeCommand::Remove { name } => {
            store.remove(&name)?;
            db::save_recipes(path, &store)?;
            println!("Removed recipe '{}'", name);
            Ok(())
        }
        RecipeCommand::Import { path: import_path } => {
            let data = std::fs::read_to_string(&import_path)
                .with_context(|| format!("failed to read catalog {}", import_path))?;
            let recipes: Vec<Recipe> = serde_json::from_str(&data)
                .with_context(|| format!("malformed catalog {}", import_path))?;

            let count = recipes.len();
            for recipe in recipes {
                store.upsert(recipe)?;
            }
            db::save_recipes(path, &store)?;
            println!("Imported {} recipes", count);
            Ok(())
        }
    }
}
