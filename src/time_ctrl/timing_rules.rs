use serde::{Deserialize, Serialize};

use crate::domain::ReelIndex;

/// Правила тайминга спина.
///
/// Поздние барабаны крутятся дольше и делают больше оборотов —
/// классический ступенчатый стоп слот-машины:
///   длительность = base_spin_ms + stagger_ms * индекс;
///   обороты      = base_rotations + extra_rotations_per_reel * индекс.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRules {
    pub base_spin_ms: u32,
    pub stagger_ms: u32,
    pub base_rotations: u32,
    pub extra_rotations_per_reel: u32,
}

impl TimingRules {
    /// Стандартные тайминги: 2000мс + 500мс на барабан, 3 + 1 оборота.
    pub fn standard() -> Self {
        Self {
            base_spin_ms: 2000,
            stagger_ms: 500,
            base_rotations: 3,
            extra_rotations_per_reel: 1,
        }
    }

    /// Длительность спина барабана с данным индексом.
    pub fn duration_ms(&self, reel_index: ReelIndex) -> u32 {
        self.base_spin_ms + self.stagger_ms * reel_index as u32
    }

    /// Сколько полных оборотов ленты делает барабан с данным индексом.
    pub fn rotations(&self, reel_index: ReelIndex) -> u32 {
        self.base_rotations + self.extra_rotations_per_reel * reel_index as u32
    }
}
