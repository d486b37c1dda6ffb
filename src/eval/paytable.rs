//! Пейтаблица и константы прогрессии.
//!
//! Базовые множители (три одинаковых) и множители пар заданы литерально.
//! Поиск идёт по таблице с дефолтным фолбэком: алфавит символов закрыт,
//! так что фолбэк недостижим при корректной генерации барабанов,
//! но таблица не обязана падать на незнакомом символе.

use crate::domain::symbol::Symbol;

/// Базовые множители "три одинаковых": bet * base * bonus_multiplier.
pub const BASE_MULTIPLIERS: [(Symbol, f64); Symbol::COUNT] = [
    (Symbol::Death, 3.0),
    (Symbol::Stim, 5.0),
    (Symbol::Target, 8.0),
    (Symbol::Gear, 15.0),
    (Symbol::Gun, 25.0),
    (Symbol::Atom, 100.0),
];

/// Множители пары: bet * pair (бонусный множитель к парам НЕ применяется).
pub const PAIR_MULTIPLIERS: [(Symbol, f64); Symbol::COUNT] = [
    (Symbol::Death, 1.5),
    (Symbol::Stim, 2.0),
    (Symbol::Target, 2.5),
    (Symbol::Gear, 3.0),
    (Symbol::Gun, 4.0),
    (Symbol::Atom, 10.0),
];

/// Фолбэк для символа вне таблицы.
pub const DEFAULT_BASE_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_PAIR_MULTIPLIER: f64 = 1.0;

// Константы прогрессии.

/// Прирост джекпот-прогресса за "три одинаковых".
pub const JACKPOT_STEP_TRIPLE: f64 = 5.0;
/// Прирост джекпот-прогресса за пару.
pub const JACKPOT_STEP_PAIR: f64 = 1.0;
/// Порог срабатывания джекпота.
pub const JACKPOT_TARGET: f64 = 100.0;
/// Множитель выплаты при джекпоте.
pub const JACKPOT_PAYOUT_FACTOR: f64 = 3.0;

/// Каждый какой шаг стрика увеличивает бонусный множитель.
pub const STREAK_STEP: u32 = 3;
/// Прирост бонусного множителя за шаг стрика.
pub const MULTIPLIER_STEP: f64 = 0.5;
/// Распад бонусного множителя на спине без выигрыша.
pub const MULTIPLIER_DECAY: f64 = 0.1;
/// Нижняя граница бонусного множителя.
pub const MULTIPLIER_FLOOR: f64 = 1.0;

/// Множитель выплаты за собранную полную коллекцию символов.
pub const COLLECTION_PAYOUT_FACTOR: f64 = 2.0;

/// Базовый множитель символа для "три одинаковых".
pub fn base_multiplier(symbol: Symbol) -> f64 {
    BASE_MULTIPLIERS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, m)| *m)
        .unwrap_or(DEFAULT_BASE_MULTIPLIER)
}

/// Множитель символа для пары.
pub fn pair_multiplier(symbol: Symbol) -> f64 {
    PAIR_MULTIPLIERS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, m)| *m)
        .unwrap_or(DEFAULT_PAIR_MULTIPLIER)
}
