use serde::{Deserialize, Serialize};

use crate::domain::caps::Caps;
use crate::domain::symbol::Symbol;
use crate::domain::{MachineId, ReelIndex, SpinId};
use crate::eval::WinCategory;

/// DTO одного барабана: видимое окно + центральный символ.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReelViewDto {
    pub reel_index: ReelIndex,
    pub visible: Vec<Symbol>,
    pub center: Symbol,
}

/// DTO прогрессии — строка объективов во фронте
/// (STREAK | SYMBOLS n/6 | MULTIPLIER | JACKPOT %).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressionDto {
    pub streak: u32,
    pub collected_count: u8,
    pub collected_total: u8,
    pub bonus_multiplier: f64,
    pub jackpot_progress: f64,
}

/// DTO записи в панели "последние спины".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpinRecordDto {
    pub spin_id: SpinId,
    pub bet: Caps,
    pub payout: Caps,
    pub category: WinCategory,
    /// Спин в плюсе относительно ставки.
    pub net_win: bool,
    /// Абсолютное отклонение от ставки.
    pub net_amount: Caps,
}

/// DTO машины целиком.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineViewDto {
    pub machine_id: MachineId,
    pub spinning: bool,
    pub reels: Vec<ReelViewDto>,
    /// Центральная строка — будущая сетка оценки.
    pub center_row: Vec<Symbol>,
    pub progression: ProgressionDto,
    pub recent: Vec<SpinRecordDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Спин принят, барабаны запущены.
    SpinAccepted { spin_id: SpinId },

    /// Спин уже идёт — запрос молча отброшен (контракт, не ошибка).
    SpinIgnored,
}
