//! Движок слот-машины: барабаны, оценка выигрышей, прогрессия.
//!
//! Два логических компонента:
//! - менеджер барабанов (`engine::SlotMachine`) — состояние барабанов,
//!   жизненный цикл спина, таймеры остановки;
//! - оценка выигрыша и прогрессия (`eval`) — чистая функция
//!   (Grid, ProgressionState, bet) -> (SpinResult, новое состояние).
//!
//! Презентационный слой (кредиты, рендер, модалки) живёт снаружи и общается
//! с движком двумя узкими сигналами: `spin requested(bet)` на вход и
//! `spin completed(payout)` на выход. Баланс кредитов движок не трогает.

pub mod infra;
pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod time_ctrl;
