use chrono::{DateTime, Duration, Utc};

/// Time source for session start/finish stamps.
///
/// Sessions take a clock by value so tests can freeze time.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Frozen(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self::Frozen(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Frozen(t) => *t,
        }
    }

    /// Moves a frozen clock forward. No effect on `Clock::System`.
    pub fn tick(&mut self, delta: Duration) {
        if let Clock::Frozen(t) = self {
            *t += delta;
        }
    }
}

/// Unix timestamp used by tests (2026-01-13T00:00:00Z).
pub const FROZEN_TEST_TIMESTAMP: i64 = 1_768_262_400;

/// Deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the frozen timestamp cannot be represented.
#[must_use]
pub fn frozen_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FROZEN_TEST_TIMESTAMP, 0)
        .expect("frozen timestamp should be valid")
}

#[must_use]
pub fn frozen_clock() -> Clock {
    Clock::frozen(frozen_now())
}
