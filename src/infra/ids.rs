use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{MachineId, SpinId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Удобно для локальных симуляций, dev-CLI и тестов: хосту не нужно
/// придумывать идентификаторы машин самому.
#[derive(Debug)]
pub struct IdGenerator {
    machine_counter: AtomicU64,
    spin_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            machine_counter: AtomicU64::new(1),
            spin_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_machine_id(&self) -> MachineId {
        self.machine_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_spin_id(&self) -> SpinId {
        self.spin_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
