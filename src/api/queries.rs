use serde::{Deserialize, Serialize};

use crate::api::dto::{MachineViewDto, ProgressionDto, SpinRecordDto};
use crate::engine::SlotMachine;
use crate::infra::mapping::{build_machine_view, build_progression_dto, build_recent_dtos};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить состояние машины целиком.
    GetMachine,

    /// Только строка объективов (стрик / коллекция / множитель / джекпот).
    GetProgression,

    /// Панель последних спинов.
    GetRecentSpins,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Machine(MachineViewDto),
    Progression(ProgressionDto),
    RecentSpins(Vec<SpinRecordDto>),
}

/// Обработать запрос к машине.
pub fn handle_query(machine: &SlotMachine, query: Query) -> QueryResponse {
    match query {
        Query::GetMachine => QueryResponse::Machine(build_machine_view(machine)),
        Query::GetProgression => {
            QueryResponse::Progression(build_progression_dto(&machine.progression))
        }
        Query::GetRecentSpins => QueryResponse::RecentSpins(build_recent_dtos(&machine.recent)),
    }
}
