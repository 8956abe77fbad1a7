use std::collections::HashSet;

use recall_core::model::{Correctness, PracticeItem, RoundRecord};
use tracing::{debug, info, warn};

use super::progress::{RoundProgress, RoundStatus};
use crate::error::{InvalidState, SessionError};

//
// ─── PUBLIC VALUES ─────────────────────────────────────────────────────────────
//

/// Learner self-report for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Correct,
    Wrong,
}

impl From<bool> for Judgment {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }
}

impl From<Judgment> for Correctness {
    fn from(judgment: Judgment) -> Self {
        match judgment {
            Judgment::Correct => Correctness::Correct,
            Judgment::Wrong => Correctness::Incorrect,
        }
    }
}

/// Identifies one presentation of one item.
///
/// The UI captures the cursor when it renders an item and passes it back with
/// the judgment. A second tap carries the same cursor after the engine has
/// already moved on, so it is rejected instead of judging the next item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    epoch: u64,
    position: usize,
}

impl Cursor {
    /// 0-based position within the current round.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Outcome of a fully judged round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'a, T> {
    AllCorrect,
    /// Items judged wrong, in the order they were marked.
    ItemsRemaining(Vec<&'a T>),
}

/// What the presentation layer should show after a judgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a, T> {
    Next(&'a T),
    RoundComplete(Verdict<'a, T>),
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    AllCorrect,
    ItemsRemaining(Vec<usize>),
}

/// Rounds hold indices into the engine's item collection.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Empty,
    InRound {
        round: Vec<usize>,
        position: usize,
        wrong: Vec<usize>,
    },
    Complete {
        round_len: usize,
        outcome: Outcome,
    },
}

fn rejected(state: InvalidState) -> SessionError {
    warn!(%state, "rejected round transition");
    SessionError::InvalidState(state)
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Mastery-round state machine over an ordered item collection.
///
/// Round 1 is the whole collection in caller order. Each later round is
/// exactly the items judged wrong in the round before it, in the order they
/// were marked. There is no retry cap: an item that is always judged wrong
/// keeps coming back.
#[derive(Debug, Clone)]
pub struct RoundEngine<T> {
    items: Vec<T>,
    state: State,
    epoch: u64,
    round_number: u32,
    answered: u32,
    restarts: u32,
    history: Vec<RoundRecord>,
}

impl<T: PracticeItem> RoundEngine<T> {
    /// Start the first round over `items`.
    ///
    /// An empty collection produces an engine in the `Empty` state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DuplicateItem` if two items share an id.
    pub fn new(items: Vec<T>) -> Result<Self, SessionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.item_id()) {
                return Err(SessionError::DuplicateItem {
                    id: item.item_id().clone(),
                });
            }
        }

        let state = if items.is_empty() {
            State::Empty
        } else {
            State::InRound {
                round: (0..items.len()).collect(),
                position: 0,
                wrong: Vec::new(),
            }
        };
        let round_number = u32::from(!items.is_empty());

        Ok(Self {
            items,
            state,
            epoch: 0,
            round_number,
            answered: 0,
            restarts: 0,
            history: Vec::new(),
        })
    }

    /// The full collection in its original order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.state {
            State::Empty => RoundStatus::Empty,
            State::InRound { .. } => RoundStatus::InRound,
            State::Complete { .. } => RoundStatus::Complete,
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        match &self.state {
            State::InRound {
                round, position, ..
            } => round.get(*position).and_then(|&i| self.items.get(i)),
            State::Empty | State::Complete { .. } => None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        match &self.state {
            State::InRound { position, .. } => Some(Cursor {
                epoch: self.epoch,
                position: *position,
            }),
            State::Empty | State::Complete { .. } => None,
        }
    }

    /// Items of the round being judged, in presentation order.
    #[must_use]
    pub fn round_items(&self) -> Vec<&T> {
        match &self.state {
            State::InRound { round, .. } => self.resolve(round),
            State::Empty | State::Complete { .. } => Vec::new(),
        }
    }

    /// Items judged wrong so far in the current round.
    #[must_use]
    pub fn wrong_so_far(&self) -> Vec<&T> {
        match &self.state {
            State::InRound { wrong, .. } => self.resolve(wrong),
            State::Complete {
                outcome: Outcome::ItemsRemaining(wrong),
                ..
            } => self.resolve(wrong),
            State::Empty
            | State::Complete {
                outcome: Outcome::AllCorrect,
                ..
            } => Vec::new(),
        }
    }

    /// The verdict of the last round, once it is complete.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict<'_, T>> {
        match &self.state {
            State::Complete { outcome, .. } => Some(self.verdict_for(outcome)),
            State::Empty | State::InRound { .. } => None,
        }
    }

    /// True once a round finishes with every item correct.
    #[must_use]
    pub fn is_mastered(&self) -> bool {
        matches!(
            self.state,
            State::Complete {
                outcome: Outcome::AllCorrect,
                ..
            }
        )
    }

    /// 1-based number of the current round since the last restart (0 when empty).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Judgments accepted so far, across every round and restart.
    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Tallies of completed rounds, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        let (position, round_len, wrong_so_far) = match &self.state {
            State::Empty => (0, 0, 0),
            State::InRound {
                round,
                position,
                wrong,
            } => (*position, round.len(), wrong.len()),
            State::Complete { round_len, outcome } => {
                let wrong = match outcome {
                    Outcome::AllCorrect => 0,
                    Outcome::ItemsRemaining(w) => w.len(),
                };
                (*round_len, *round_len, wrong)
            }
        };
        RoundProgress {
            round_number: self.round_number,
            position,
            round_len,
            wrong_so_far,
            answered: self.answered,
            status: self.status(),
        }
    }

    /// Record a judgment for the item identified by `cursor` and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` when the session is empty, the
    /// round is already complete, or `cursor` is not the current item. A
    /// rejected call changes nothing.
    pub fn judge(
        &mut self,
        cursor: Cursor,
        judgment: Judgment,
    ) -> Result<Step<'_, T>, SessionError> {
        let (round, position, wrong) = match &mut self.state {
            State::InRound {
                round,
                position,
                wrong,
            } => (round, position, wrong),
            State::Empty => return Err(rejected(InvalidState::NoItems)),
            State::Complete { .. } => return Err(rejected(InvalidState::RoundComplete)),
        };
        if cursor.epoch != self.epoch || cursor.position != *position {
            return Err(rejected(InvalidState::StaleCursor));
        }

        let index = round[*position];
        if judgment == Judgment::Wrong {
            wrong.push(index);
        }
        *position += 1;
        self.answered = self.answered.saturating_add(1);
        debug!(
            item = %self.items[index].item_id(),
            ?judgment,
            round = self.round_number,
            position = *position,
            "judged item"
        );

        if let Some(&next) = round.get(*position) {
            return Ok(Step::Next(&self.items[next]));
        }

        // Last item of the round was just judged.
        let round_len = round.len();
        let remaining = std::mem::take(wrong);
        self.history.push(RoundRecord {
            number: self.round_number,
            size: round_len,
            wrong: remaining.len(),
        });
        info!(
            round = self.round_number,
            size = round_len,
            wrong = remaining.len(),
            "round complete"
        );
        let outcome = if remaining.is_empty() {
            Outcome::AllCorrect
        } else {
            Outcome::ItemsRemaining(remaining)
        };
        self.state = State::Complete {
            round_len,
            outcome: outcome.clone(),
        };
        Ok(Step::RoundComplete(self.verdict_for(&outcome)))
    }

    /// Start a new round made of the items judged wrong in the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the last round completed
    /// with items remaining.
    pub fn continue_with_remaining(&mut self) -> Result<Cursor, SessionError> {
        let remaining = match &mut self.state {
            State::Complete {
                outcome: Outcome::ItemsRemaining(remaining),
                ..
            } => std::mem::take(remaining),
            State::Complete {
                outcome: Outcome::AllCorrect,
                ..
            } => return Err(rejected(InvalidState::NothingToRetry)),
            State::InRound { .. } => return Err(rejected(InvalidState::RoundInProgress)),
            State::Empty => return Err(rejected(InvalidState::NoItems)),
        };

        self.epoch += 1;
        self.round_number = self.round_number.saturating_add(1);
        info!(
            round = self.round_number,
            size = remaining.len(),
            "continuing with remaining items"
        );
        self.state = State::InRound {
            round: remaining,
            position: 0,
            wrong: Vec::new(),
        };
        Ok(Cursor {
            epoch: self.epoch,
            position: 0,
        })
    }

    /// Throw away all round progress and start again from the full collection.
    ///
    /// Allowed from any state. An empty collection stays `Empty` and returns `None`.
    pub fn restart_from_beginning(&mut self) -> Option<Cursor> {
        if self.items.is_empty() {
            return None;
        }

        self.epoch += 1;
        self.round_number = 1;
        self.restarts = self.restarts.saturating_add(1);
        self.state = State::InRound {
            round: (0..self.items.len()).collect(),
            position: 0,
            wrong: Vec::new(),
        };
        info!(
            size = self.items.len(),
            restarts = self.restarts,
            "restarted from the full collection"
        );
        Some(Cursor {
            epoch: self.epoch,
            position: 0,
        })
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&T> {
        indices.iter().filter_map(|&i| self.items.get(i)).collect()
    }

    fn verdict_for(&self, outcome: &Outcome) -> Verdict<'_, T> {
        match outcome {
            Outcome::AllCorrect => Verdict::AllCorrect,
            Outcome::ItemsRemaining(wrong) => Verdict::ItemsRemaining(self.resolve(wrong)),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use recall_core::model::ItemId;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item(ItemId);

    impl PracticeItem for Item {
        fn item_id(&self) -> &ItemId {
            &self.0
        }
    }

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|s| Item(s.parse().unwrap())).collect()
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.0.to_string()).collect()
    }

    fn current_id<T: PracticeItem>(engine: &RoundEngine<T>) -> Option<String> {
        engine.current_item().map(|i| i.item_id().to_string())
    }

    fn judge<T: PracticeItem>(engine: &mut RoundEngine<T>, judgment: Judgment) {
        let cursor = engine.cursor().expect("engine should be in a round");
        engine.judge(cursor, judgment).unwrap();
    }

    #[test]
    fn scenario_wrong_item_is_retried_until_correct() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();

        judge(&mut engine, Judgment::Correct);
        judge(&mut engine, Judgment::Wrong);
        let cursor = engine.cursor().unwrap();
        let step = engine.judge(cursor, Judgment::Correct).unwrap();
        match step {
            Step::RoundComplete(Verdict::ItemsRemaining(left)) => assert_eq!(ids(&left), ["b"]),
            other => panic!("unexpected step {other:?}"),
        }

        let cursor = engine.continue_with_remaining().unwrap();
        assert_eq!(cursor.position(), 0);
        assert_eq!(ids(&engine.round_items()), ["b"]);
        assert_eq!(engine.round_number(), 2);

        let step = engine.judge(cursor, Judgment::Correct).unwrap();
        assert_eq!(step, Step::RoundComplete(Verdict::AllCorrect));
        assert!(engine.is_mastered());
        assert_eq!(engine.answered_count(), 4);
    }

    #[test]
    fn empty_collection_never_enters_a_round() {
        let mut engine = RoundEngine::<Item>::new(Vec::new()).unwrap();

        assert_eq!(engine.status(), RoundStatus::Empty);
        assert_eq!(engine.current_item(), None);
        assert_eq!(engine.cursor(), None);
        assert_eq!(engine.round_number(), 0);
        assert!(engine.verdict().is_none());
        assert!(matches!(
            engine.continue_with_remaining(),
            Err(SessionError::InvalidState(InvalidState::NoItems))
        ));
        assert_eq!(engine.restart_from_beginning(), None);
        assert_eq!(engine.status(), RoundStatus::Empty);
    }

    #[test]
    fn judgment_maps_onto_note_correctness() {
        assert_eq!(Correctness::from(Judgment::Correct), Correctness::Correct);
        assert_eq!(Correctness::from(Judgment::from(false)), Correctness::Incorrect);
    }

    #[test]
    fn judging_an_empty_engine_reports_no_items() {
        let mut empty = RoundEngine::<Item>::new(Vec::new()).unwrap();
        let other = RoundEngine::new(items(&["a"])).unwrap();
        let cursor = other.cursor().unwrap();

        let err = empty.judge(cursor, Judgment::Correct).unwrap_err();

        assert_eq!(err.invalid_state(), Some(InvalidState::NoItems));
        assert_eq!(empty.answered_count(), 0);
        assert_eq!(empty.status(), RoundStatus::Empty);
    }

    #[test]
    fn judge_steps_through_round_then_reports_verdict() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();

        let cursor = engine.cursor().unwrap();
        let step = engine.judge(cursor, Judgment::Wrong).unwrap();
        assert_eq!(step, Step::Next(&items(&["b"])[0]));

        let cursor = engine.cursor().unwrap();
        let step = engine.judge(cursor, Judgment::Correct).unwrap();
        assert_eq!(step, Step::Next(&items(&["c"])[0]));

        let cursor = engine.cursor().unwrap();
        match engine.judge(cursor, Judgment::Wrong).unwrap() {
            Step::RoundComplete(Verdict::ItemsRemaining(left)) => {
                assert_eq!(ids(&left), ["a", "c"]);
            }
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(
            engine.verdict().map(|v| matches!(v, Verdict::ItemsRemaining(_))),
            Some(true)
        );
        assert!(!engine.is_mastered());
    }

    #[test]
    fn restart_from_partial_mastery_restores_full_collection() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();
        judge(&mut engine, Judgment::Correct);
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Correct);
        assert_eq!(engine.status(), RoundStatus::Complete);

        let cursor = engine.restart_from_beginning().unwrap();

        assert_eq!(cursor.position(), 0);
        assert_eq!(ids(&engine.round_items()), ["a", "b", "c"]);
        assert!(engine.wrong_so_far().is_empty());
        assert_eq!(engine.status(), RoundStatus::InRound);
        assert_eq!(engine.round_number(), 1);
        assert_eq!(engine.restarts(), 1);
    }

    #[test]
    fn restart_mid_round_discards_accumulator() {
        let mut engine = RoundEngine::new(items(&["a", "b"])).unwrap();
        judge(&mut engine, Judgment::Wrong);
        assert_eq!(engine.wrong_so_far().len(), 1);

        engine.restart_from_beginning().unwrap();

        assert!(engine.wrong_so_far().is_empty());
        assert_eq!(current_id(&engine).as_deref(), Some("a"));
    }

    #[test]
    fn double_tap_is_rejected_without_touching_accumulator() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();
        let cursor = engine.cursor().unwrap();

        engine.judge(cursor, Judgment::Wrong).unwrap();
        let err = engine.judge(cursor, Judgment::Wrong).unwrap_err();

        assert_eq!(err.invalid_state(), Some(InvalidState::StaleCursor));
        assert_eq!(ids(&engine.wrong_so_far()), ["a"]);
        assert_eq!(current_id(&engine).as_deref(), Some("b"));
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn double_tap_on_last_item_hits_complete_round() {
        let mut engine = RoundEngine::new(items(&["a"])).unwrap();
        let cursor = engine.cursor().unwrap();

        engine.judge(cursor, Judgment::Wrong).unwrap();
        let err = engine.judge(cursor, Judgment::Correct).unwrap_err();

        assert_eq!(err.invalid_state(), Some(InvalidState::RoundComplete));
        assert_eq!(engine.rounds().len(), 1);
        assert_eq!(engine.rounds()[0].wrong, 1);
    }

    #[test]
    fn cursor_from_previous_round_is_stale() {
        let mut engine = RoundEngine::new(items(&["a", "b"])).unwrap();
        let first_round_cursor = engine.cursor().unwrap();
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Correct);
        engine.continue_with_remaining().unwrap();

        let err = engine.judge(first_round_cursor, Judgment::Correct).unwrap_err();

        assert_eq!(err.invalid_state(), Some(InvalidState::StaleCursor));
        assert_eq!(current_id(&engine).as_deref(), Some("a"));
    }

    #[test]
    fn all_correct_round_completes_after_len_judgments() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c", "d"])).unwrap();
        let mut calls = 0;
        while engine.status() == RoundStatus::InRound {
            judge(&mut engine, Judgment::Correct);
            calls += 1;
        }

        assert_eq!(calls, 4);
        assert_eq!(engine.verdict(), Some(Verdict::AllCorrect));
        assert!(matches!(
            engine.continue_with_remaining(),
            Err(SessionError::InvalidState(InvalidState::NothingToRetry))
        ));
    }

    #[test]
    fn judgments_per_round_equal_round_length() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c", "d", "e"])).unwrap();
        // Alternate wrong/correct so each round shrinks but is never trivially clean.
        let mut toggle = false;
        loop {
            let len = engine.round_items().len();
            let mut calls = 0;
            while engine.status() == RoundStatus::InRound {
                toggle = !toggle;
                judge(&mut engine, Judgment::from(!toggle));
                calls += 1;
            }
            assert_eq!(calls, len);
            if engine.is_mastered() {
                break;
            }
            engine.continue_with_remaining().unwrap();
        }
    }

    #[test]
    fn next_round_keeps_order_items_were_marked_wrong() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c", "d"])).unwrap();
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Correct);
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Wrong);

        engine.continue_with_remaining().unwrap();

        assert_eq!(ids(&engine.round_items()), ["a", "c", "d"]);
        assert_eq!(engine.progress().position, 0);
        assert!(engine.wrong_so_far().is_empty());
    }

    #[test]
    fn current_item_is_idempotent() {
        let engine = RoundEngine::new(items(&["a", "b"])).unwrap();
        let first = current_id(&engine);
        assert_eq!(first, current_id(&engine));
        assert_eq!(first, current_id(&engine));
        assert_eq!(engine.answered_count(), 0);
    }

    #[test]
    fn single_item_completes_after_one_judgment() {
        let mut engine = RoundEngine::new(items(&["only"])).unwrap();
        let cursor = engine.cursor().unwrap();
        let step = engine.judge(cursor, Judgment::Correct).unwrap();
        assert_eq!(step, Step::RoundComplete(Verdict::AllCorrect));
    }

    #[test]
    fn judge_returns_next_item_mid_round() {
        let mut engine = RoundEngine::new(items(&["a", "b"])).unwrap();
        let cursor = engine.cursor().unwrap();
        let step = engine.judge(cursor, Judgment::Correct).unwrap();
        match step {
            Step::Next(item) => assert_eq!(item.0.as_str(), "b"),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn bounded_mastery_shrinks_rounds_to_all_correct() {
        // Item i needs i+1 attempts before it is answered correctly.
        let pool = items(&["a", "b", "c", "d"]);
        let needed: std::collections::HashMap<String, u32> = pool
            .iter()
            .enumerate()
            .map(|(i, item)| (item.0.to_string(), i as u32 + 1))
            .collect();
        let mut attempts: std::collections::HashMap<String, u32> = std::collections::HashMap::new();
        let mut engine = RoundEngine::new(pool).unwrap();

        loop {
            while let Some(id) = current_id(&engine) {
                let tries = attempts.entry(id.clone()).or_insert(0);
                *tries += 1;
                judge(&mut engine, Judgment::from(*tries >= needed[&id]));
            }
            if engine.is_mastered() {
                break;
            }
            engine.continue_with_remaining().unwrap();
        }

        let sizes: Vec<usize> = engine.rounds().iter().map(|r| r.size).collect();
        assert_eq!(sizes, [4, 3, 2, 1]);
        assert!(sizes.windows(2).all(|w| w[1] < w[0]));
        let wrong: Vec<usize> = engine.rounds().iter().map(|r| r.wrong).collect();
        assert!(wrong.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn mastered_item_never_reappears() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();
        judge(&mut engine, Judgment::Correct);
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Wrong);

        engine.continue_with_remaining().unwrap();
        judge(&mut engine, Judgment::Wrong);
        judge(&mut engine, Judgment::Correct);
        engine.continue_with_remaining().unwrap();

        assert_eq!(ids(&engine.round_items()), ["b"]);
    }

    #[test]
    fn always_wrong_item_keeps_cycling() {
        let mut engine = RoundEngine::new(items(&["stubborn"])).unwrap();
        for round in 1..=10 {
            assert_eq!(engine.round_number(), round);
            judge(&mut engine, Judgment::Wrong);
            assert!(!engine.is_mastered());
            engine.continue_with_remaining().unwrap();
        }
        assert_eq!(current_id(&engine).as_deref(), Some("stubborn"));
    }

    #[test]
    fn continue_mid_round_is_rejected() {
        let mut engine = RoundEngine::new(items(&["a", "b"])).unwrap();
        judge(&mut engine, Judgment::Wrong);
        let err = engine.continue_with_remaining().unwrap_err();
        assert_eq!(err.invalid_state(), Some(InvalidState::RoundInProgress));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = RoundEngine::new(items(&["a", "b", "a"])).unwrap_err();
        assert!(matches!(err, SessionError::DuplicateItem { id } if id.as_str() == "a"));
    }

    #[test]
    fn progress_reports_position_and_wrong_count() {
        let mut engine = RoundEngine::new(items(&["a", "b", "c"])).unwrap();
        judge(&mut engine, Judgment::Wrong);

        let progress = engine.progress();
        assert_eq!(
            progress,
            RoundProgress {
                round_number: 1,
                position: 1,
                round_len: 3,
                wrong_so_far: 1,
                answered: 1,
                status: RoundStatus::InRound,
            }
        );

        judge(&mut engine, Judgment::Correct);
        judge(&mut engine, Judgment::Correct);
        let done = engine.progress();
        assert_eq!(done.position, 3);
        assert_eq!(done.status, RoundStatus::Complete);
        assert_eq!(done.wrong_so_far, 1);
    }
}
