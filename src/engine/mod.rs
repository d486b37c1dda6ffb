//! Менеджер барабанов: жизненный цикл спина, ступенчатая остановка, сигналы.
//!
//! Высокоуровневый объект: `SlotMachine`
//! Основные операции:
//!   - `request_spin` – принять ставку и запустить спин (или молча отклонить)
//!   - `on_time_passed` – протекание времени: прокрутка, остановка, оценка
//!   - `drain_signals` – забрать исходящие сигналы для презентационного слоя

pub mod errors;
pub mod machine;
pub mod spin_history;

pub use errors::EngineError;
pub use machine::{SlotMachine, SpinSignal};
pub use spin_history::{RecentSpins, SpinEvent, SpinEventKind, SpinHistory, SpinRecord};

use crate::domain::symbol::Symbol;

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерный индекс в диапазоне `0..upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Равномерный символ из закрытого алфавита.
pub fn draw_symbol<R: RandomSource>(rng: &mut R) -> Symbol {
    Symbol::ALL[rng.next_index(Symbol::COUNT)]
}
