use crate::domain::model::Product;
use crate::domain::ports::{Configuration, Stock, StockingPolicy};
use crate::domain::symbol::Symbol;
use crate::utils::error::{Result, VendingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

pub const SEED_KEY: &str = "machine.stocking.seed";

const EMPTY_CELL_PROBABILITY: f64 = 0.20;
const TWO_PRODUCTS_PROBABILITY: f64 = 0.10;
// 累積機率：0.10 ~ 0.50 之間為一件商品
const ONE_PRODUCT_CUMULATIVE_PROBABILITY: f64 = 0.50;
const MIN_PRICE: u64 = 100;
const MAX_PRICE: u64 = 500;

pub fn product_name_for(symbol: &Symbol) -> String {
    format!("Product {}", symbol)
}

/// Randomized stocking used by a freshly built machine.
pub struct RandomStocking<R: Rng = StdRng> {
    rng: R,
}

impl RandomStocking<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same seed, same grid.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStocking<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

/// 讀取設定中的進貨種子，未設定時回傳 `None`
pub fn configured_seed(config: &dyn Configuration) -> Result<Option<u64>> {
    let raw = config.get_string(SEED_KEY, "");
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse()
        .map(Some)
        .map_err(|_| VendingError::InvalidConfigValueError {
            field: SEED_KEY.to_string(),
            value: raw.to_string(),
            reason: "Seed must be a non-negative integer".to_string(),
        })
}

/// Seeded stocking when the configuration names a seed, entropy otherwise.
pub fn stocking_from_config(config: &dyn Configuration) -> Result<RandomStocking> {
    Ok(match configured_seed(config)? {
        Some(seed) => {
            tracing::debug!("Stocking with seed {}", seed);
            RandomStocking::seeded(seed)
        }
        None => RandomStocking::from_entropy(),
    })
}

impl<R: Rng> StockingPolicy for RandomStocking<R> {
    fn stock(&mut self, symbol: &Symbol) -> Stock {
        if self.rng.gen::<f64>() < EMPTY_CELL_PROBABILITY {
            return Stock::NoTray;
        }

        let price = self.rng.gen_range(MIN_PRICE..=MAX_PRICE);

        let quantity_draw = self.rng.gen::<f64>();
        let quantity = if quantity_draw < TWO_PRODUCTS_PROBABILITY {
            2
        } else if quantity_draw < ONE_PRODUCT_CUMULATIVE_PROBABILITY {
            1
        } else {
            0
        };

        let name = product_name_for(symbol);
        Stock::Tray {
            price,
            products: (0..quantity).map(|_| Product::new(name.clone())).collect(),
        }
    }
}

/// Explicit stocking table. Positions without an entry get no tray.
#[derive(Debug, Clone, Default)]
pub struct FixedStocking {
    table: HashMap<Symbol, Stock>,
}

impl FixedStocking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tray<I, S>(mut self, symbol: Symbol, price: u64, product_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let products = product_names.into_iter().map(Product::new).collect();
        self.table.insert(symbol, Stock::Tray { price, products });
        self
    }
}

impl StockingPolicy for FixedStocking {
    fn stock(&mut self, symbol: &Symbol) -> Stock {
        self.table.get(symbol).cloned().unwrap_or(Stock::NoTray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_symbols() -> Vec<Symbol> {
        let mut symbols = Vec::new();
        for row in 0..6 {
            for col in 0..4 {
                symbols.push(Symbol::new(row, col).unwrap());
            }
        }
        symbols
    }

    #[test]
    fn test_seeded_stocking_is_reproducible() {
        let mut first = RandomStocking::seeded(42);
        let mut second = RandomStocking::seeded(42);

        for symbol in all_symbols() {
            assert_eq!(first.stock(&symbol), second.stock(&symbol));
        }
    }

    #[test]
    fn test_random_stocking_respects_price_and_quantity_bounds() {
        let mut policy = RandomStocking::seeded(7);
        let symbol = Symbol::new(1, 2).unwrap();

        for _ in 0..1000 {
            if let Stock::Tray { price, products } = policy.stock(&symbol) {
                assert!((MIN_PRICE..=MAX_PRICE).contains(&price));
                assert!(products.len() <= 2);
                assert!(products.iter().all(|p| p.name() == "Product B3"));
            }
        }
    }

    #[test]
    fn test_random_stocking_distribution() {
        let mut policy = RandomStocking::seeded(2024);
        let symbol = Symbol::new(0, 0).unwrap();
        let draws = 20_000;
        let mut counts = [0usize; 4]; // no tray, 0, 1, 2 products

        for _ in 0..draws {
            match policy.stock(&symbol) {
                Stock::NoTray => counts[0] += 1,
                Stock::Tray { products, .. } => counts[products.len() + 1] += 1,
            }
        }

        let share = |count: usize| count as f64 / draws as f64;
        // 0.20 無托盤；其餘 0.80 中 10% 兩件、40% 一件、50% 零件
        assert!((share(counts[0]) - 0.20).abs() < 0.02);
        assert!((share(counts[1]) - 0.40).abs() < 0.02);
        assert!((share(counts[2]) - 0.32).abs() < 0.02);
        assert!((share(counts[3]) - 0.08).abs() < 0.02);
    }

    #[test]
    fn test_configured_seed() {
        use crate::config::MapConfiguration;

        assert_eq!(configured_seed(&MapConfiguration::new()).unwrap(), None);

        let seeded = MapConfiguration::new().with_integer(SEED_KEY, 99);
        assert_eq!(configured_seed(&seeded).unwrap(), Some(99));

        let invalid = MapConfiguration::new().with_string(SEED_KEY, "-1");
        assert!(configured_seed(&invalid).is_err());
    }

    #[test]
    fn test_fixed_stocking_defaults_to_no_tray() {
        let a1 = Symbol::new(0, 0).unwrap();
        let mut policy = FixedStocking::new().with_tray(a1, 200, ["Product A1"]);

        assert_eq!(
            policy.stock(&a1),
            Stock::Tray {
                price: 200,
                products: vec![Product::new("Product A1")]
            }
        );
        assert_eq!(policy.stock(&Symbol::new(1, 1).unwrap()), Stock::NoTray);
    }
}
