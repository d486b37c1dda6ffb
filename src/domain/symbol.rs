use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Символ на барабане. Закрытый алфавит из 6 токенов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Death,  // 💀
    Stim,   // 💊
    Target, // 🎯
    Gear,   // ⚙
    Gun,    // 🔫
    Atom,   // ☢
}

impl Symbol {
    /// Размер алфавита.
    pub const COUNT: usize = 6;

    /// Все символы в каноническом порядке (он же порядок пейтаблицы).
    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::Death,
        Symbol::Stim,
        Symbol::Target,
        Symbol::Gear,
        Symbol::Gun,
        Symbol::Atom,
    ];

    /// Порядковый номер символа (0..6) — для битовых масок и счётчиков.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Death => "death",
            Symbol::Stim => "stim",
            Symbol::Target => "target",
            Symbol::Gear => "gear",
            Symbol::Gun => "gun",
            Symbol::Atom => "atom",
        };
        write!(f, "{name}")
    }
}

/// Парсинг строки вида "death", "atom" (регистронезависимо).
impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "death" => Ok(Symbol::Death),
            "stim" => Ok(Symbol::Stim),
            "target" => Ok(Symbol::Target),
            "gear" => Ok(Symbol::Gear),
            "gun" => Ok(Symbol::Gun),
            "atom" => Ok(Symbol::Atom),
            _ => Err(format!("Invalid symbol: {s}")),
        }
    }
}

/// Битовая маска по алфавиту символов (6 младших битов).
pub type SymbolMask = u8;

/// Маска одного символа.
pub const fn symbol_to_bit(symbol: Symbol) -> SymbolMask {
    1u8 << symbol.index()
}

/// Множество различных символов. Обёртка над битовой маской,
/// чтобы не таскать HashSet ради шести элементов.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolSet(pub SymbolMask);

impl SymbolSet {
    pub const EMPTY: SymbolSet = SymbolSet(0);

    /// Маска полного алфавита.
    pub const FULL: SymbolSet = SymbolSet((1u8 << Symbol::COUNT) - 1);

    pub fn insert(&mut self, symbol: Symbol) {
        self.0 |= symbol_to_bit(symbol);
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0 & symbol_to_bit(symbol) != 0
    }

    /// Сколько различных символов в множестве.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Собраны ли все 6 символов алфавита.
    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL.0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}
