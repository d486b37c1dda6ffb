use serde::{Deserialize, Serialize};

use crate::domain::symbol::SymbolSet;

use super::paytable::{MULTIPLIER_DECAY, MULTIPLIER_FLOOR};

/// Состояние прогрессии (объективы в духе пинбола).
///
/// Живёт как значение: `evaluate_spin` берёт старое состояние и возвращает
/// новое, никаких глобальных мутабельных полей.
///
/// Инварианты:
/// - `bonus_multiplier >= 1.0` всегда;
/// - `collected` — подмножество алфавита из 6 символов;
/// - `jackpot_progress` монотонно растёт между сбросами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionState {
    /// Сколько выигрышных спинов подряд (пара или три одинаковых).
    /// Любой спин без выигрыша сбрасывает в 0.
    pub streak: u32,
    /// Различные символы, увиденные в сетках после последнего бонуса
    /// "полная коллекция".
    pub collected: SymbolSet,
    /// Бонусный множитель. Применяется только к "три одинаковых".
    pub bonus_multiplier: f64,
    /// Прогресс джекпота в процентах.
    pub jackpot_progress: f64,
}

impl ProgressionState {
    /// Свежая сессия: стрик 0, пустая коллекция, множитель 1.0, прогресс 0.
    pub fn new() -> Self {
        Self {
            streak: 0,
            collected: SymbolSet::EMPTY,
            bonus_multiplier: 1.0,
            jackpot_progress: 0.0,
        }
    }

    /// Распад множителя на спине без выигрыша (с полом в 1.0).
    pub fn decay_multiplier(&mut self) {
        self.bonus_multiplier = (self.bonus_multiplier - MULTIPLIER_DECAY).max(MULTIPLIER_FLOOR);
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}
