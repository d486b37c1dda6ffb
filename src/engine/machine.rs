use serde::{Deserialize, Serialize};

use log::{debug, info};

use crate::domain::caps::Caps;
use crate::domain::grid::Grid;
use crate::domain::reel::{Reel, ReelLayout};
use crate::domain::symbol::Symbol;
use crate::domain::{MachineId, ReelIndex, SpinId};
use crate::engine::errors::EngineError;
use crate::engine::spin_history::{RecentSpins, SpinEventKind, SpinHistory, SpinRecord};
use crate::engine::{draw_symbol, RandomSource};
use crate::eval::{evaluate_spin, ProgressionState, SpinResult};
use crate::time_ctrl::{ReelClock, TimingRules};

/// Исходящий сигнал машины для презентационного слоя.
///
/// Контракт узкий: на каждый принятый спин — один `SpinStarted` (синхронно
/// с приёмом) и ровно один `SpinCompleted` (после остановки всех барабанов
/// и оценки). Бонусные сигналы — только для отображения; выплату к балансу
/// применяет вызывающая сторона.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum SpinSignal {
    SpinStarted {
        spin_id: SpinId,
    },
    ReelSettled {
        reel: ReelIndex,
        symbol: Symbol,
    },
    /// Собрана полная коллекция символов (выплата уже удвоена в result).
    CollectionBonus,
    /// Сработал джекпот (выплата уже утроена в result).
    JackpotFired,
    SpinCompleted {
        spin_id: SpinId,
        payout: Caps,
        result: SpinResult,
    },
}

/// Слот-машина: барабаны + жизненный цикл спина + прогрессия.
///
/// Однопоточная и тик-ориентированная: хост вызывает `on_time_passed`
/// со своим wall-clock, никаких фоновых задач внутри нет.
#[derive(Clone, Debug)]
pub struct SlotMachine {
    pub id: MachineId,
    pub layout: ReelLayout,
    pub timing: TimingRules,
    pub reels: Vec<Reel>,
    pub progression: ProgressionState,
    /// Лог текущего (или последнего) спина.
    pub history: SpinHistory,
    /// Последние сыгранные спины для панели истории.
    pub recent: RecentSpins,
    /// Единственная защёлка машины: спин во время спина молча игнорируется.
    /// Именно машинный флаг, а не пер-барабанные блокировки.
    pub spinning: bool,

    clocks: Vec<ReelClock>,
    settled_count: usize,
    current_bet: Caps,
    current_spin_id: SpinId,
    next_spin_id: SpinId,
    signals: Vec<SpinSignal>,
}

impl SlotMachine {
    /// Инициализация машины: каждая лента заполняется независимыми
    /// равномерными символами (повторы внутри ленты допустимы).
    pub fn new<R: RandomSource>(
        id: MachineId,
        layout: ReelLayout,
        timing: TimingRules,
        rng: &mut R,
    ) -> Self {
        let center = layout.center_index();
        let reels = (0..layout.reel_count)
            .map(|_| {
                let symbols = (0..layout.symbols_per_reel)
                    .map(|_| draw_symbol(rng))
                    .collect();
                Reel::new(symbols, center)
            })
            .collect();

        Self {
            id,
            layout,
            timing,
            reels,
            progression: ProgressionState::new(),
            history: SpinHistory::new(),
            recent: RecentSpins::default(),
            spinning: false,
            clocks: Vec::new(),
            settled_count: 0,
            current_bet: Caps::ZERO,
            current_spin_id: 0,
            next_spin_id: 1,
            signals: Vec::new(),
        }
    }

    /// Принять запрос на спин.
    ///
    /// - `Err(ZeroBet)` — нарушение контракта вызывающей стороны;
    /// - `Ok(false)` — спин уже идёт, запрос молча отброшен (не ошибка,
    ///   не очередь);
    /// - `Ok(true)` — спин запущен, `SpinStarted` выдан синхронно.
    ///
    /// Списание ставки с баланса — забота вызывающей стороны, до запуска.
    pub fn request_spin(&mut self, bet: Caps) -> Result<bool, EngineError> {
        if bet.is_zero() {
            return Err(EngineError::ZeroBet);
        }
        if self.spinning {
            debug!("machine {}: spin request ignored, already spinning", self.id);
            return Ok(false);
        }

        self.spinning = true;
        self.current_bet = bet;
        self.current_spin_id = self.next_spin_id;
        self.next_spin_id += 1;
        self.settled_count = 0;

        self.clocks = (0..self.layout.reel_count)
            .map(|i| ReelClock::start(i, &self.timing, self.layout.symbols_per_reel))
            .collect();

        self.history = SpinHistory::new();
        self.history.push(SpinEventKind::SpinStarted {
            spin_id: self.current_spin_id,
            bet,
        });
        self.signals.push(SpinSignal::SpinStarted {
            spin_id: self.current_spin_id,
        });

        debug!(
            "machine {}: spin {} started, bet {}",
            self.id, self.current_spin_id, bet
        );
        Ok(true)
    }

    /// Протекание `delta_ms` миллисекунд.
    ///
    /// Каждая пересечённая граница символа прокручивает ленту и дозаливает
    /// входящий символ свежим равномерным дро. Остановившийся барабан
    /// прищёлкивается к границе, его центр фиксируется до следующего спина.
    /// Барабаны встают строго в порядке индексов (тайминги ступенчатые).
    ///
    /// Переход к оценке — по счётчику: "остановлено == всего барабанов",
    /// без какого-либо опроса в цикле.
    pub fn on_time_passed<R: RandomSource>(&mut self, delta_ms: u32, rng: &mut R) {
        if !self.spinning {
            return;
        }

        for i in 0..self.clocks.len() {
            let tick = self.clocks[i].advance(delta_ms);

            for _ in 0..tick.steps {
                let incoming = draw_symbol(rng);
                self.reels[i].scroll_one(incoming);
            }

            if tick.just_finished {
                self.settled_count += 1;
                let symbol = self.reels[i].center_symbol();
                self.history.push(SpinEventKind::ReelSettled {
                    reel: i as ReelIndex,
                    symbol,
                });
                self.signals.push(SpinSignal::ReelSettled {
                    reel: i as ReelIndex,
                    symbol,
                });
                debug!("machine {}: reel {} settled on {}", self.id, i, symbol);
            }
        }

        if self.settled_count == self.reels.len() {
            self.complete_spin();
        }
    }

    /// Сетка из центральных символов (актуальна после остановки).
    pub fn grid(&self) -> Grid {
        Grid::new(self.reels.iter().map(|r| r.center_symbol()).collect())
    }

    /// Забрать накопленные сигналы (FIFO).
    pub fn drain_signals(&mut self) -> Vec<SpinSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Идентификатор текущего (или последнего завершённого) спина.
    pub fn current_spin_id(&self) -> SpinId {
        self.current_spin_id
    }

    /// Все барабаны встали — собрать сетку, оценить, раздать сигналы.
    fn complete_spin(&mut self) {
        let grid = self.grid();
        self.history.push(SpinEventKind::GridLocked {
            symbols: grid.symbols.clone(),
        });

        let (result, next_state) = evaluate_spin(&grid, &self.progression, self.current_bet);
        self.progression = next_state;

        self.history.push(SpinEventKind::SpinEvaluated {
            category: result.category,
            payout: result.payout,
            collection_bonus: result.collection_bonus,
            jackpot: result.jackpot,
        });
        self.recent.push(SpinRecord {
            spin_id: self.current_spin_id,
            bet: self.current_bet,
            payout: result.payout,
            category: result.category,
        });

        if result.collection_bonus {
            self.signals.push(SpinSignal::CollectionBonus);
        }
        if result.jackpot {
            self.signals.push(SpinSignal::JackpotFired);
        }

        info!(
            "machine {}: spin {} completed, {:?}, payout {}",
            self.id, self.current_spin_id, result.category, result.payout
        );

        let payout = result.payout;
        self.signals.push(SpinSignal::SpinCompleted {
            spin_id: self.current_spin_id,
            payout,
            result,
        });

        self.spinning = false;
        self.clocks.clear();
    }
}
