use serde::{Deserialize, Serialize};

use crate::domain::caps::Caps;
use crate::domain::grid::Grid;
use crate::domain::symbol::Symbol;
use crate::domain::ReelIndex;

use super::paytable::{
    base_multiplier, pair_multiplier, COLLECTION_PAYOUT_FACTOR, JACKPOT_PAYOUT_FACTOR,
    JACKPOT_STEP_PAIR, JACKPOT_STEP_TRIPLE, JACKPOT_TARGET, MULTIPLIER_STEP, STREAK_STEP,
};
use super::progression::ProgressionState;
use super::win_category::{classify_grid, WinCategory};

/// Итог оценки одного спина.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinResult {
    /// Выплата в целых крышках (округление вниз, один раз, в конце).
    pub payout: Caps,
    pub category: WinCategory,
    /// Сработал ли бонус "полная коллекция" (выплата уже удвоена).
    pub collection_bonus: bool,
    /// Сработал ли джекпот (выплата уже утроена).
    pub jackpot: bool,
    /// Индексы выигравших барабанов — только для подсветки во фронте.
    pub winning_reels: Vec<ReelIndex>,
    pub winning_symbol: Option<Symbol>,
}

impl SpinResult {
    fn lost() -> Self {
        Self {
            payout: Caps::ZERO,
            category: WinCategory::NoWin,
            collection_bonus: false,
            jackpot: false,
            winning_reels: Vec::new(),
            winning_symbol: None,
        }
    }
}

/// Оценка спина: чистая функция.
///
/// Порядок шагов фиксирован:
/// 1. все символы сетки попадают в коллекцию;
/// 2. классификация (три одинаковых / пара / мимо);
/// 3. "три одинаковых": base * bet * bonus_multiplier, стрик +1, прогресс +5;
///    на каждом 3-м шаге стрика множитель +0.5; полная коллекция — выплата x2
///    и коллекция очищается; прогресс >= 100 — выплата x3 (после x2) и
///    прогресс в 0;
/// 4. пара: pair * bet (множитель НЕ применяется — асимметрия намеренная),
///    стрик +1, прогресс +1;
/// 5. мимо: стрик в 0, множитель -0.1 с полом 1.0, прогресс без изменений.
///
/// Выплату к балансу применяет вызывающая сторона, не движок.
pub fn evaluate_spin(
    grid: &Grid,
    state: &ProgressionState,
    bet: Caps,
) -> (SpinResult, ProgressionState) {
    let mut next = state.clone();

    // 1. Коллекция пополняется на любом спине, включая проигрышные.
    for s in &grid.symbols {
        next.collected.insert(*s);
    }

    let class = classify_grid(grid);

    match class.category {
        WinCategory::ThreeOfAKind => {
            let symbol = class.symbol.expect("у трёх одинаковых всегда есть символ");
            let mut payout = bet.as_f64() * base_multiplier(symbol) * next.bonus_multiplier;

            next.streak += 1;
            next.jackpot_progress += JACKPOT_STEP_TRIPLE;

            if next.streak % STREAK_STEP == 0 {
                next.bonus_multiplier += MULTIPLIER_STEP;
            }

            let collection_bonus = next.collected.is_full();
            if collection_bonus {
                payout *= COLLECTION_PAYOUT_FACTOR;
                next.collected.clear();
            }

            // Джекпот проверяется после удвоения за коллекцию:
            // если оба срабатывают в один спин, множители перемножаются.
            let jackpot = next.jackpot_progress >= JACKPOT_TARGET;
            if jackpot {
                payout *= JACKPOT_PAYOUT_FACTOR;
                next.jackpot_progress = 0.0;
            }

            let result = SpinResult {
                payout: Caps::from_payout(payout),
                category: WinCategory::ThreeOfAKind,
                collection_bonus,
                jackpot,
                winning_reels: class.reels,
                winning_symbol: Some(symbol),
            };
            (result, next)
        }

        WinCategory::Pair => {
            let symbol = class.symbol.expect("у пары всегда есть символ");
            let payout = bet.as_f64() * pair_multiplier(symbol);

            next.streak += 1;
            next.jackpot_progress += JACKPOT_STEP_PAIR;

            let result = SpinResult {
                payout: Caps::from_payout(payout),
                category: WinCategory::Pair,
                collection_bonus: false,
                jackpot: false,
                winning_reels: class.reels,
                winning_symbol: Some(symbol),
            };
            (result, next)
        }

        WinCategory::NoWin => {
            next.streak = 0;
            next.decay_multiplier();
            (SpinResult::lost(), next)
        }
    }
}
