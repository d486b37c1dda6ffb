use serde::{Deserialize, Serialize};

use crate::domain::symbol::Symbol;

/// Геометрия машины: сколько барабанов, сколько символов на ленте,
/// сколько видно в окне. Центральная позиция участвует в оценке выигрыша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReelLayout {
    pub reel_count: u8,
    pub symbols_per_reel: u8,
    pub visible_window: u8,
}

impl ReelLayout {
    /// Стандартная машина 3x5 с окном в 3 символа.
    pub fn standard() -> Self {
        Self {
            reel_count: 3,
            symbols_per_reel: 5,
            visible_window: 3,
        }
    }

    /// Индекс центрального слота ленты.
    pub fn center_index(&self) -> usize {
        self.symbols_per_reel as usize / 2
    }
}

/// Барабан. В домене — просто упорядоченная лента символов.
/// Случайные дозаливки делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reel {
    pub symbols: Vec<Symbol>,
    /// Индекс центрального слота (фиксирован геометрией машины).
    pub center: usize,
}

impl Reel {
    /// Собрать барабан из готовой ленты символов.
    pub fn new(symbols: Vec<Symbol>, center: usize) -> Self {
        debug_assert!(center < symbols.len());
        Reel { symbols, center }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Символ в центральном слоте. После остановки барабана он зафиксирован
    /// до следующего спина и участвует в оценке выигрыша.
    pub fn center_symbol(&self) -> Symbol {
        self.symbols[self.center]
    }

    /// Прокрутка на один символ: лента сдвигается на шаг,
    /// символ, ушедший за границу, заменяется свежим (его тянет engine из RNG).
    pub fn scroll_one(&mut self, incoming: Symbol) {
        self.symbols.rotate_right(1);
        self.symbols[0] = incoming;
    }

    /// Видимое окно барабана: `window` символов вокруг центра.
    pub fn visible(&self, window: usize) -> Vec<Symbol> {
        let half = window / 2;
        let start = self.center.saturating_sub(half);
        let end = (start + window).min(self.symbols.len());
        self.symbols[start..end].to_vec()
    }
}
