use crate::core::stocking::stocking_from_config;
use crate::domain::model::{Cell, Product, Tray};
use crate::domain::ports::{Configuration, Stock, StockingPolicy};
use crate::domain::symbol::{Symbol, MAX_COLS, MAX_ROWS};
use crate::utils::error::{Result, VendingError};
use crate::utils::validation::{validate_dimension, Validate};
use serde::Serialize;

pub const ROWS_KEY: &str = "machine.size.rows";
pub const COLS_KEY: &str = "machine.size.cols";
pub const DEFAULT_ROWS: i64 = 6;
pub const DEFAULT_COLS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineDimensions {
    rows: i64,
    cols: i64,
}

impl MachineDimensions {
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let dimensions = Self { rows, cols };
        dimensions.validate()?;
        Ok(dimensions)
    }

    pub fn from_config(config: &dyn Configuration) -> Result<Self> {
        let rows = config.get_integer(ROWS_KEY, DEFAULT_ROWS)?;
        let cols = config.get_integer(COLS_KEY, DEFAULT_COLS)?;
        Self::new(rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }
}

impl Validate for MachineDimensions {
    fn validate(&self) -> Result<()> {
        validate_dimension("rows", self.rows, 1, MAX_ROWS as i64)?;
        validate_dimension("cols", self.cols, 1, MAX_COLS as i64)
    }
}

/// Outcome of a purchase attempt. Only `Dispensed` hands a product to the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    Dispensed(Product),
    SoldOut(Symbol),
    NoTray(Symbol),
    MalformedSymbol(String),
}

impl Purchase {
    pub fn into_product(self) -> Option<Product> {
        match self {
            Purchase::Dispensed(product) => Some(product),
            _ => None,
        }
    }

    pub fn is_dispensed(&self) -> bool {
        matches!(self, Purchase::Dispensed(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TraySnapshot {
    pub symbol: Symbol,
    pub price: u64,
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub trays: Vec<TraySnapshot>,
}

#[derive(Debug)]
pub struct VendingMachine {
    rows: usize,
    cols: usize,
    // 以列為主序儲存，index = row * cols + col
    cells: Vec<Cell>,
}

impl VendingMachine {
    /// 依設定建立機台，並以隨機方式進貨 (設定了種子時可重現)
    pub fn new(config: &dyn Configuration) -> Result<Self> {
        let mut stocking = stocking_from_config(config)?;
        Self::with_stocking(config, &mut stocking)
    }

    pub fn with_stocking(
        config: &dyn Configuration,
        policy: &mut dyn StockingPolicy,
    ) -> Result<Self> {
        let dimensions = MachineDimensions::from_config(config)?;
        Self::from_dimensions(dimensions, policy)
    }

    pub fn from_dimensions(
        dimensions: MachineDimensions,
        policy: &mut dyn StockingPolicy,
    ) -> Result<Self> {
        let (rows, cols) = (dimensions.rows(), dimensions.cols());
        let mut cells = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let symbol = Symbol::new(row, col)?;
                let cell = match policy.stock(&symbol) {
                    Stock::NoTray => Cell::Empty,
                    Stock::Tray { price, products } => Cell::Installed(
                        Tray::builder(symbol).price(price).products(products).build(),
                    ),
                };
                cells.push(cell);
            }
        }

        let machine = Self { rows, cols, cells };
        tracing::info!(
            "Vending machine ready: {}x{} grid, {} trays installed, {} products in stock",
            rows,
            cols,
            machine.trays().count(),
            machine.trays().map(Tray::product_count).sum::<usize>()
        );
        Ok(machine)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
        let index = self.index_of(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn tray_at(&self, row: usize, col: usize) -> Result<Option<&Tray>> {
        Ok(self.cell_at(row, col)?.tray())
    }

    pub fn first_product_name_at(&self, row: usize, col: usize) -> Result<Option<&str>> {
        Ok(self
            .tray_at(row, col)?
            .and_then(|tray| tray.first_product_name()))
    }

    /// Installed trays in row-major order.
    pub fn trays(&self) -> impl Iterator<Item = &Tray> {
        self.cells.iter().filter_map(Cell::tray)
    }

    pub fn buy(&mut self, symbol: &str) -> Purchase {
        let symbol: Symbol = match symbol.parse() {
            Ok(symbol) => symbol,
            Err(_) => {
                tracing::debug!("Rejected malformed symbol {:?}", symbol);
                return Purchase::MalformedSymbol(symbol.to_string());
            }
        };

        // 超出機台範圍視同沒有托盤
        let tray = match self.index_of(symbol.row(), symbol.col()) {
            Ok(index) => self.cells[index].tray_mut(),
            Err(_) => None,
        };

        let outcome = match tray {
            None => Purchase::NoTray(symbol),
            Some(tray) => match tray.take_product() {
                Some(product) => Purchase::Dispensed(product),
                None => Purchase::SoldOut(symbol),
            },
        };

        tracing::debug!("Purchase at {}: {:?}", symbol, outcome);
        outcome
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            rows: self.rows,
            cols: self.cols,
            trays: self
                .trays()
                .map(|tray| TraySnapshot {
                    symbol: tray.symbol(),
                    price: tray.price(),
                    products: tray.products().map(|p| p.name().to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(VendingError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
