//! Оценка выигрыша и прогрессия. Чистая логика без RNG и таймеров.
//!
//! Главная функция: `evaluate_spin`
//!   (Grid, &ProgressionState, Caps) -> (SpinResult, новый ProgressionState)
//!
//! Состояние прогрессии протягивается значением, а не живёт в глобальной
//! переменной — так движок тестируется без слоя рендеринга.

pub mod evaluator;
pub mod paytable;
pub mod progression;
pub mod win_category;

pub use evaluator::{evaluate_spin, SpinResult};
pub use progression::ProgressionState;
pub use win_category::{classify_grid, GridClassification, WinCategory};
