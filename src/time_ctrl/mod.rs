// src/time_ctrl/mod.rs
//! Вспомогательный модуль контроля времени спина.
//!
//! Здесь собираем:
//! - правила тайминга (`TimingRules`) — длительность и число оборотов
//!   по индексу барабана;
//! - таймер одного барабана (`ReelClock`) — выдаёт целые шаги символов
//!   и момент остановки;
//! - сессионный таймер (`SessionClock`) — напоминания о перерыве,
//!   полностью развязан с машиной состояний спина.
//!
//! Всё тик-ориентированное: один поток, хост сам сообщает, сколько
//! времени прошло. Никаких фоновых задач.

pub mod reel_clock;
pub mod session;
pub mod timing_rules;

pub use reel_clock::{ReelClock, ReelTick};
pub use session::{BreakReminder, SessionClock};
pub use timing_rules::TimingRules;
