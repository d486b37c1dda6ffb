// src/time_ctrl/reel_clock.rs
//! Таймер одного барабана внутри спина.

use serde::{Deserialize, Serialize};

use crate::domain::ReelIndex;

use super::TimingRules;

/// Состояние таймера барабана.
///
/// Барабан движется равномерно: за `duration_ms` проходит `total_steps`
/// символов (обороты * длина ленты). Таймер переводит "сколько миллисекунд
/// прошло" в "сколько целых границ символов пересечено" — дозаливку ленты
/// на каждой границе делает engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReelClock {
    pub reel_index: ReelIndex,
    pub duration_ms: u32,
    pub total_steps: u32,
    pub elapsed_ms: u32,
    /// Сколько целых шагов уже отдано наружу.
    pub steps_emitted: u32,
    pub finished: bool,
}

/// Результат "протекания" времени для барабана.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReelTick {
    /// Сколько границ символов пересечено за этот тик.
    pub steps: u32,
    /// Барабан остановился именно на этом тике (ровно один раз за спин).
    pub just_finished: bool,
}

impl ReelClock {
    /// Запустить таймер барабана согласно правилам тайминга.
    pub fn start(reel_index: ReelIndex, rules: &TimingRules, symbols_per_reel: u8) -> Self {
        Self {
            reel_index,
            duration_ms: rules.duration_ms(reel_index),
            total_steps: rules.rotations(reel_index) * symbols_per_reel as u32,
            elapsed_ms: 0,
            steps_emitted: 0,
            finished: false,
        }
    }

    /// Симулируем протекание `delta_ms` миллисекунд.
    ///
    /// Логика:
    /// - по ходу спина отдаём только полностью пересечённые границы (floor);
    /// - на остановке позиция прищёлкивается к ближайшей границе символа
    ///   (round), чтобы центр встал ровно на слот;
    /// - после остановки таймер мёртв: никаких остаточных шагов.
    pub fn advance(&mut self, delta_ms: u32) -> ReelTick {
        if self.finished || delta_ms == 0 {
            return ReelTick {
                steps: 0,
                just_finished: false,
            };
        }

        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        let done = self.elapsed_ms >= self.duration_ms;

        let position =
            self.total_steps as f64 * self.elapsed_ms as f64 / self.duration_ms as f64;
        let target = if done {
            // Прищёлкивание к ближайшей границе.
            position.round() as u32
        } else {
            position.floor() as u32
        };
        let target = target.min(self.total_steps);

        let steps = target.saturating_sub(self.steps_emitted);
        self.steps_emitted = target;
        self.finished = done;

        ReelTick {
            steps,
            just_finished: done,
        }
    }

    /// Сколько миллисекунд осталось до остановки.
    pub fn remaining_ms(&self) -> u32 {
        self.duration_ms.saturating_sub(self.elapsed_ms)
    }
}
