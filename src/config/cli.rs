use crate::config::{MapConfiguration, TomlConfiguration};
use crate::core::machine::{COLS_KEY, ROWS_KEY};
use crate::core::stocking::SEED_KEY;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "vending.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "vending-machine")]
#[command(about = "A vending machine you can inspect and buy from")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override machine.size.rows
    #[arg(long)]
    pub rows: Option<i64>,

    /// Override machine.size.cols
    #[arg(long)]
    pub cols: Option<i64>,

    /// Seed for reproducible stocking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the stocked machine as JSON and exit
    #[arg(long)]
    pub snapshot: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋值
    pub fn load_configuration(&self) -> Result<MapConfiguration> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfiguration::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_PATH);
                TomlConfiguration::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                tracing::warn!(
                    "{} not found, using built-in machine defaults",
                    DEFAULT_CONFIG_PATH
                );
                TomlConfiguration::default()
            }
        };

        let mut config = MapConfiguration::new().with_fallback(file);
        if let Some(rows) = self.rows {
            tracing::info!("🔧 Rows overridden to: {}", rows);
            config = config.with_integer(ROWS_KEY, rows);
        }
        if let Some(cols) = self.cols {
            tracing::info!("🔧 Cols overridden to: {}", cols);
            config = config.with_integer(COLS_KEY, cols);
        }
        if let Some(seed) = self.seed {
            config = config.with_string(SEED_KEY, seed.to_string());
        }
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
        }
        Ok(())
    }
}
