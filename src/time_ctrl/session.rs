// src/time_ctrl/session.rs
//! Сессионный таймер напоминаний о перерыве.
//!
//! Полностью развязан с машиной состояний спина: независимый периодический
//! счётчик, который хост тикает своим wall-clock. Движок лишь возвращает
//! значение-напоминание, показывать его — забота презентационного слоя.

use serde::{Deserialize, Serialize};

/// Напоминание о перерыве: сколько всего секунд идёт сессия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakReminder {
    pub session_secs: u64,
}

/// Счётчик времени сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClock {
    pub elapsed_secs: u64,
    /// Период напоминаний (по умолчанию 30 минут).
    pub reminder_every_secs: u64,
}

impl SessionClock {
    /// Стандартный период: напоминание каждые 1800 секунд.
    pub fn standard() -> Self {
        Self {
            elapsed_secs: 0,
            reminder_every_secs: 1800,
        }
    }

    /// Протекание `delta_secs` секунд сессии.
    /// Возвращает напоминание, если пересечена очередная граница периода.
    pub fn on_time_passed(&mut self, delta_secs: u64) -> Option<BreakReminder> {
        if self.reminder_every_secs == 0 || delta_secs == 0 {
            return None;
        }

        let before = self.elapsed_secs / self.reminder_every_secs;
        self.elapsed_secs += delta_secs;
        let after = self.elapsed_secs / self.reminder_every_secs;

        if after > before {
            Some(BreakReminder {
                session_secs: self.elapsed_secs,
            })
        } else {
            None
        }
    }
}
