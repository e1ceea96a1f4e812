use crate::domain::model::Product;
use crate::domain::symbol::Symbol;
use crate::utils::error::Result;

/// Read-only key/value configuration with caller supplied defaults.
pub trait Configuration {
    fn get_integer(&self, key: &str, default: i64) -> Result<i64>;
    fn get_string(&self, key: &str, default: &str) -> String;
}

/// 單一格位的進貨結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stock {
    NoTray,
    Tray { price: u64, products: Vec<Product> },
}

/// Decides, per grid position, whether a tray is installed and what it starts with.
pub trait StockingPolicy {
    fn stock(&mut self, symbol: &Symbol) -> Stock;
}
