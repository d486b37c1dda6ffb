//! Доменная модель слотов: символы, барабаны, сетка, ставки.

pub mod caps;
pub mod grid;
pub mod reel;
pub mod symbol;

// Базовые идентификаторы.
pub type MachineId = u64;
pub type SpinId = u64;
pub type ReelIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Symbol и т.п.
pub use caps::*;
pub use grid::*;
pub use reel::*;
pub use symbol::*;
