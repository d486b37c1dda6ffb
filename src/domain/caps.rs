use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество бутылочных крышек (игровая валюта).
/// Обёртка над u64, чтобы не путать ставки/выплаты с обычными числами.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Caps(pub u64);

impl Caps {
    pub const ZERO: Caps = Caps(0);

    pub const fn new(amount: u64) -> Self {
        Caps(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Перевод в f64 для множительной арифметики пейтаблицы.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Округление вещественной выплаты вниз до целых крышек.
    /// Политика округления движка: floor один раз, в самом конце.
    pub fn from_payout(amount: f64) -> Caps {
        if amount <= 0.0 {
            Caps::ZERO
        } else {
            Caps(amount.floor() as u64)
        }
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Caps) -> Caps {
        Caps(self.0.saturating_sub(other.0))
    }
}

impl Add for Caps {
    type Output = Caps;

    fn add(self, rhs: Caps) -> Self::Output {
        Caps(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Caps {
    fn add_assign(&mut self, rhs: Caps) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Caps {
    type Output = Caps;

    fn sub(self, rhs: Caps) -> Self::Output {
        Caps(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Caps {
    fn sub_assign(&mut self, rhs: Caps) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Caps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
