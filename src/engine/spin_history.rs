use serde::{Deserialize, Serialize};

use crate::domain::caps::Caps;
use crate::domain::symbol::Symbol;
use crate::domain::{ReelIndex, SpinId};
use crate::eval::WinCategory;

/// Тип события внутри спина.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum SpinEventKind {
    /// Спин принят, барабаны запущены.
    SpinStarted { spin_id: SpinId, bet: Caps },

    /// Барабан остановился, его центральный символ зафиксирован.
    ReelSettled {
        reel: ReelIndex,
        symbol: Symbol,
    },

    /// Все барабаны встали, сетка собрана.
    GridLocked { symbols: Vec<Symbol> },

    /// Оценка завершена.
    SpinEvaluated {
        category: WinCategory,
        payout: Caps,
        collection_bonus: bool,
        jackpot: bool,
    },
}

/// Событие спина с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinEvent {
    pub index: u32,
    pub kind: SpinEventKind,
}

/// Полный лог одного спина. Начинается заново на каждом принятом спине.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinHistory {
    pub events: Vec<SpinEvent>,
}

impl SpinHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: SpinEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(SpinEvent { index: idx, kind });
    }
}

impl Default for SpinHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Краткая запись об одном сыгранном спине (для панели "последние спины").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinRecord {
    pub spin_id: SpinId,
    pub bet: Caps,
    pub payout: Caps,
    pub category: WinCategory,
}

impl SpinRecord {
    /// Спин в плюсе? (выплата больше ставки)
    pub fn is_net_win(&self) -> bool {
        self.payout > self.bet
    }

    /// Абсолютное отклонение от ставки — как в панели истории фронта.
    pub fn net_amount(&self) -> Caps {
        if self.is_net_win() {
            self.payout - self.bet
        } else {
            self.bet - self.payout
        }
    }
}

/// Кольцевой список последних сыгранных спинов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecentSpins {
    pub records: Vec<SpinRecord>,
    pub capacity: usize,
}

impl RecentSpins {
    /// Фронт показывает последние 10 спинов.
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, record: SpinRecord) {
        self.records.push(record);
        if self.records.len() > self.capacity {
            let overflow = self.records.len() - self.capacity;
            self.records.drain(..overflow);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecentSpins {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
