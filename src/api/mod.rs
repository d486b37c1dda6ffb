//! Внешний API движка слотов.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (запрос спина);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.
//!
//! Исходящие сигналы (`SpinStarted` / `SpinCompleted` и пр.) живут в engine:
//! это очередь машины, API их не дублирует.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
