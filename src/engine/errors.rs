use crate::domain::{MachineId, ReelIndex};

use thiserror::Error;

/// Ошибки движка слотов.
///
/// Заметьте: "спин во время спина" НЕ ошибка — такой запрос молча
/// игнорируется (см. `SlotMachine::request_spin`).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Машина {0} не найдена")]
    MachineNotFound(MachineId),

    #[error("Ставка должна быть положительной")]
    ZeroBet,

    #[error("Барабан {0} не существует на этой машине")]
    InvalidReel(ReelIndex),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
