use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,
    #[serde(default = "default_plans_path")]
    pub plans_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            recipes_path: default_recipes_path(),
            plans_path: default_plans_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_recipes_path() -> String {
    "recipes.json".to_string()
}

fn default_plans_path() -> String {
    "grocery-lists.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file, overridable through
    /// `MEALMATE_*` environment variables (e.g. `MEALMATE_DATA__RECIPES_PATH`).
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(&path));
        } else {
            builder = builder.add_source(File::with_name("mealmate").required(false));
        }

        builder = builder.add_source(Environment::with_prefix("MEALMATE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
