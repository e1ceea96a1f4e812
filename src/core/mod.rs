pub mod display;
pub mod machine;
pub mod stocking;

pub use crate::domain::model::{Cell, Product, Tray};
pub use crate::domain::ports::{Configuration, Stock, StockingPolicy};
pub use crate::domain::symbol::Symbol;
pub use crate::utils::error::Result;
