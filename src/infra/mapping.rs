//! Маппинг domain/engine → DTO для презентационного слоя.

use crate::api::dto::{MachineViewDto, ProgressionDto, ReelViewDto, SpinRecordDto};
use crate::domain::symbol::Symbol;
use crate::domain::ReelIndex;
use crate::engine::{RecentSpins, SlotMachine};
use crate::eval::ProgressionState;

/// Сформировать DTO машины на основе живого `SlotMachine`.
pub fn build_machine_view(machine: &SlotMachine) -> MachineViewDto {
    let window = machine.layout.visible_window as usize;

    let reels = machine
        .reels
        .iter()
        .enumerate()
        .map(|(idx, reel)| ReelViewDto {
            reel_index: idx as ReelIndex,
            visible: reel.visible(window),
            center: reel.center_symbol(),
        })
        .collect();

    let center_row = machine
        .reels
        .iter()
        .map(|r| r.center_symbol())
        .collect();

    MachineViewDto {
        machine_id: machine.id,
        spinning: machine.spinning,
        reels,
        center_row,
        progression: build_progression_dto(&machine.progression),
        recent: build_recent_dtos(&machine.recent),
    }
}

/// DTO прогрессии.
pub fn build_progression_dto(state: &ProgressionState) -> ProgressionDto {
    ProgressionDto {
        streak: state.streak,
        collected_count: state.collected.len() as u8,
        collected_total: Symbol::COUNT as u8,
        bonus_multiplier: state.bonus_multiplier,
        jackpot_progress: state.jackpot_progress,
    }
}

/// DTO панели последних спинов (свежие в конце, как в истории машины).
pub fn build_recent_dtos(recent: &RecentSpins) -> Vec<SpinRecordDto> {
    recent
        .records
        .iter()
        .map(|r| SpinRecordDto {
            spin_id: r.spin_id,
            bet: r.bet,
            payout: r.payout,
            category: r.category,
            net_win: r.is_net_win(),
            net_amount: r.net_amount(),
        })
        .collect()
}
