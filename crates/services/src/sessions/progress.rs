use serde::Serialize;

/// Coarse state tag the UI switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// The session was started with no items.
    Empty,
    InRound,
    Complete,
}

/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundProgress {
    pub round_number: u32,
    /// Items already judged in this round.
    pub position: usize,
    pub round_len: usize,
    pub wrong_so_far: usize,
    pub answered: u32,
    pub status: RoundStatus,
}

impl RoundProgress {
    /// Fraction of the current round already judged, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.round_len == 0 {
            return 0.0;
        }
        self.position as f64 / self.round_len as f64
    }

    /// 1-based index of the item on screen, if any.
    #[must_use]
    pub fn display_index(&self) -> Option<usize> {
        (self.status == RoundStatus::InRound).then_some(self.position + 1)
    }
}
