use serde::{Deserialize, Serialize};

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::domain::caps::Caps;
use crate::engine::SlotMachine;

/// Команда верхнего уровня.
///
/// Единственная команда, меняющая состояние, — запрос спина.
/// Вызывающая сторона гарантирует `bet <= доступный баланс` и списывает
/// ставку ДО запуска; движок баланс не проверяет и не трогает.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Запросить спин с заданной ставкой.
    Spin(SpinCommand),
}

/// Запрос спина.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpinCommand {
    /// Ставка в крышках. Положительная по контракту.
    pub bet: Caps,
}

/// Применить команду к машине.
///
/// "Спин во время спина" превращается в `SpinIgnored`, а не в ошибку —
/// фронту незачем показывать алерт на двойной клик по рычагу.
pub fn handle_command(
    machine: &mut SlotMachine,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Spin(cmd) => {
            let accepted = machine.request_spin(cmd.bet)?;
            if accepted {
                Ok(CommandResponse::SpinAccepted {
                    spin_id: machine.current_spin_id(),
                })
            } else {
                Ok(CommandResponse::SpinIgnored)
            }
        }
    }
}
