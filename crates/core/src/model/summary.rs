use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("round {number} has {wrong} wrong answers out of {size}")]
    InconsistentRound { number: u32, size: usize, wrong: usize },
}

/// Tally for one fully judged round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number since the last restart.
    pub number: u32,
    pub size: usize,
    pub wrong: usize,
}

impl RoundRecord {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.size.saturating_sub(self.wrong)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.wrong == 0
    }
}

/// Aggregate summary for a finished practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    item_count: usize,
    answered: u32,
    restarts: u32,
    rounds: Vec<RoundRecord>,
    mastered: bool,
}

impl SessionSummary {
    /// Build a summary from the session's completed rounds.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    /// Returns `SessionSummaryError::InconsistentRound` if a round counts more
    /// wrong answers than items.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        item_count: usize,
        answered: u32,
        restarts: u32,
        rounds: Vec<RoundRecord>,
        mastered: bool,
    ) -> Result<Self, SessionSummaryError> {
        if finished_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if let Some(bad) = rounds.iter().find(|r| r.wrong > r.size) {
            return Err(SessionSummaryError::InconsistentRound {
                number: bad.number,
                size: bad.size,
                wrong: bad.wrong,
            });
        }
        Ok(Self {
            started_at,
            finished_at,
            item_count,
            answered,
            restarts,
            rounds,
            mastered,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total judgments made, across all rounds and restarts.
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// True if the session ended with every item answered correctly.
    #[must_use]
    pub fn mastered(&self) -> bool {
        self.mastered
    }

    #[must_use]
    pub fn total_wrong(&self) -> usize {
        self.rounds.iter().map(|r| r.wrong).sum()
    }
}
