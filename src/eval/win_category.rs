use serde::{Deserialize, Serialize};

use crate::domain::grid::Grid;
use crate::domain::symbol::Symbol;
use crate::domain::ReelIndex;

/// Класс выигрыша спина. Ровно один из трёх.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WinCategory {
    NoWin,
    Pair,
    ThreeOfAKind,
}

/// Результат классификации сетки: класс + выигравший символ
/// + индексы выигравших барабанов (для подсветки во фронте).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridClassification {
    pub category: WinCategory,
    pub symbol: Option<Symbol>,
    pub reels: Vec<ReelIndex>,
}

/// Классификация сетки из центральных символов.
///
/// - все три равны → ThreeOfAKind;
/// - ровно один символ встречается дважды → Pair
///   (две разные пары в сетке из трёх символов невозможны по принципу Дирихле,
///   этот случай не обрабатываем);
/// - иначе → NoWin.
pub fn classify_grid(grid: &Grid) -> GridClassification {
    let counts = grid.counts();

    // Три одинаковых: вся сетка занята одним символом.
    if grid.len() >= 3 {
        if let Some(idx) = counts.iter().position(|&c| c as usize == grid.len()) {
            let symbol = Symbol::ALL[idx];
            return GridClassification {
                category: WinCategory::ThreeOfAKind,
                symbol: Some(symbol),
                reels: (0..grid.len() as u8).collect(),
            };
        }
    }

    // Пара.
    if let Some(idx) = counts.iter().position(|&c| c == 2) {
        let symbol = Symbol::ALL[idx];
        let reels = grid
            .symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == symbol)
            .map(|(i, _)| i as ReelIndex)
            .collect();
        return GridClassification {
            category: WinCategory::Pair,
            symbol: Some(symbol),
            reels,
        };
    }

    GridClassification {
        category: WinCategory::NoWin,
        symbol: None,
        reels: Vec::new(),
    }
}
