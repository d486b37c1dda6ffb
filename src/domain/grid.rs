use serde::{Deserialize, Serialize};

use crate::domain::symbol::Symbol;

/// Сетка результата спина: центральные символы всех барабанов
/// в порядке их индексов. Единственный вход оценки выигрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    pub symbols: Vec<Symbol>,
}

impl Grid {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Grid { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Счётчики вхождений по алфавиту символов.
    pub fn counts(&self) -> [u8; Symbol::COUNT] {
        let mut counts = [0u8; Symbol::COUNT];
        for s in &self.symbols {
            counts[s.index()] += 1;
        }
        counts
    }
}
