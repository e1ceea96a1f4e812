use crate::domain::symbol::Symbol;
use std::collections::VecDeque;

/// 未指定價格時的預設值 (最小貨幣單位)
pub const DEFAULT_TRAY_PRICE: u64 = 990;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single slot of the machine. Products leave the tray in the order they were stocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    symbol: Symbol,
    price: u64,
    products: VecDeque<Product>,
}

impl Tray {
    pub fn builder(symbol: Symbol) -> TrayBuilder {
        TrayBuilder {
            symbol,
            price: DEFAULT_TRAY_PRICE,
            products: VecDeque::new(),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_sold_out(&self) -> bool {
        self.products.is_empty()
    }

    /// 只查看最前面的商品名稱，不取出
    pub fn first_product_name(&self) -> Option<&str> {
        self.products.front().map(Product::name)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn take_product(&mut self) -> Option<Product> {
        self.products.pop_front()
    }
}

pub struct TrayBuilder {
    symbol: Symbol,
    price: u64,
    products: VecDeque<Product>,
}

impl TrayBuilder {
    pub fn price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    pub fn product(mut self, product: Product) -> Self {
        self.products.push_back(product);
        self
    }

    pub fn products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    pub fn build(self) -> Tray {
        Tray {
            symbol: self.symbol,
            price: self.price,
            products: self.products,
        }
    }
}

/// One grid position: either no tray at all, or an installed tray (possibly sold out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Installed(Tray),
}

impl Cell {
    pub fn tray(&self) -> Option<&Tray> {
        match self {
            Cell::Installed(tray) => Some(tray),
            Cell::Empty => None,
        }
    }

    pub fn tray_mut(&mut self) -> Option<&mut Tray> {
        match self {
            Cell::Installed(tray) => Some(tray),
            Cell::Empty => None,
        }
    }
}
