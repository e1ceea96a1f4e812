pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::CustomerSession;
pub use config::{MapConfiguration, TomlConfiguration};
pub use crate::core::{
    machine::{MachineDimensions, MachineSnapshot, Purchase, VendingMachine},
    stocking::{FixedStocking, RandomStocking},
};
pub use crate::domain::{
    model::{Cell, Product, Tray},
    ports::{Configuration, Stock, StockingPolicy},
    symbol::Symbol,
};
pub use utils::error::{Result, VendingError};
