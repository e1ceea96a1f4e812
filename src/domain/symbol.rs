use crate::utils::error::{Result, VendingError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 列以單一大寫字母表示 (A-Z)
pub const MAX_ROWS: usize = 26;
/// 欄以單一數字表示 (1-9)
pub const MAX_COLS: usize = 9;

/// Address of a tray: one letter for the row followed by one digit for the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    row: usize,
    col: usize,
}

impl Symbol {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= MAX_ROWS || col >= MAX_COLS {
            return Err(VendingError::MalformedSymbol(format!("({}, {})", row, col)));
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(b'A' + self.row as u8);
        write!(f, "{}{}", letter, self.col + 1)
    }
}

impl FromStr for Symbol {
    type Err = VendingError;

    fn from_str(input: &str) -> Result<Self> {
        let malformed = || VendingError::MalformedSymbol(input.to_string());

        let mut chars = input.trim().chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter.to_ascii_uppercase(), digit),
            _ => return Err(malformed()),
        };

        if !letter.is_ascii_uppercase() || !('1'..='9').contains(&digit) {
            return Err(malformed());
        }

        Ok(Self {
            row: (letter as u8 - b'A') as usize,
            col: (digit as u8 - b'1') as usize,
        })
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
