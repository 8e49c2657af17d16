use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{CategoryId, ScaleValue, Statement, StatementId};
use quiz_core::{ScoreEntry, score};

/// Which surface of the quiz the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Reporting,
}

/// Result of asking the session to move to the next statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The current statement has no response yet; position is unchanged.
    Rejected,
    /// Moved forward one statement.
    Moved,
    /// Every statement is answered and the session switched to reporting.
    Completed,
}

/// In-memory state of one run through the quiz.
///
/// Holds the shuffled presentation order, the responses keyed by statement
/// id, the cursor position, and the per-category expansion state of the
/// report. All transitions are synchronous; invalid ones are no-ops rather
/// than errors so the UI never has a failure path to render.
#[derive(Debug, Clone)]
pub struct QuizSession {
    statements: Vec<Statement>,
    responses: HashMap<StatementId, ScaleValue>,
    position: usize,
    phase: Phase,
    expanded: HashSet<CategoryId>,
    preview_expansion_applied: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for QuizSession {
    /// An empty session. Renders as a zero-statement quiz and a preview
    /// report, so a context fallback never panics a view.
    fn default() -> Self {
        Self::with_order(Vec::new())
    }
}

impl QuizSession {
    /// Start a fresh session over `statements`, shuffled.
    #[must_use]
    pub fn start(statements: &[Statement]) -> Self {
        let mut order = statements.to_vec();
        order.as_mut_slice().shuffle(&mut rng());
        Self::with_order(order)
    }

    /// Start a session that presents `statements` exactly in the given
    /// order. Tests use this for deterministic walks through the quiz.
    #[must_use]
    pub fn with_order(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            responses: HashMap::new(),
            position: 0,
            phase: Phase::Answering,
            expanded: HashSet::new(),
            preview_expansion_applied: false,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    // ─── ACCESSORS ───

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Statement under the cursor, `None` only for an empty session.
    #[must_use]
    pub fn current(&self) -> Option<&Statement> {
        self.statements.get(self.position)
    }

    #[must_use]
    pub fn response_for(&self, id: StatementId) -> Option<ScaleValue> {
        self.responses.get(&id).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.statements.is_empty() && self.responses.len() == self.statements.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Index of the first statement belonging to `category` in the current
    /// presentation order.
    #[must_use]
    pub fn first_position_for(&self, category: CategoryId) -> Option<usize> {
        self.statements.iter().position(|s| s.category() == category)
    }

    /// Category scores, present only once every statement is answered.
    ///
    /// A partially answered session scores as empty so the report falls
    /// back to its preview rendering instead of showing skewed averages.
    #[must_use]
    pub fn score_entries(&self) -> Vec<ScoreEntry> {
        if self.is_complete() {
            score(&self.statements, &self.responses)
        } else {
            Vec::new()
        }
    }

    // ─── TRANSITIONS ───

    /// Record a response for the current statement. Does not advance;
    /// re-selecting overwrites the previous response.
    pub fn select_answer(&mut self, value: ScaleValue) {
        if let Some(statement) = self.statements.get(self.position) {
            self.responses.insert(statement.id(), value);
        }
    }

    /// Move forward one statement, or finish the quiz on the last one.
    ///
    /// Refuses to move past an unanswered statement. On the last statement
    /// the session completes only when every statement is answered.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let Some(statement) = self.statements.get(self.position) else {
            return AdvanceOutcome::Rejected;
        };
        if !self.responses.contains_key(&statement.id()) {
            return AdvanceOutcome::Rejected;
        }
        if self.position + 1 < self.statements.len() {
            self.position += 1;
            return AdvanceOutcome::Moved;
        }
        if self.is_complete() {
            self.phase = Phase::Reporting;
            self.completed_at = Some(Utc::now());
            AdvanceOutcome::Completed
        } else {
            AdvanceOutcome::Rejected
        }
    }

    /// Step back one statement, stopping at the first.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Jump the cursor to `index` and return to answering.
    ///
    /// Out-of-range indices are rejected and leave the session untouched.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.statements.len() {
            return false;
        }
        self.position = index;
        self.phase = Phase::Answering;
        true
    }

    /// Discard all responses and start over with a fresh shuffle.
    pub fn restart(&mut self) {
        self.statements.as_mut_slice().shuffle(&mut rng());
        self.responses.clear();
        self.position = 0;
        self.phase = Phase::Answering;
        self.expanded.clear();
        self.preview_expansion_applied = false;
        self.started_at = Utc::now();
        self.completed_at = None;
    }

    // ─── REPORT EXPANSION ───

    #[must_use]
    pub fn is_expanded(&self, category: CategoryId) -> bool {
        self.expanded.contains(&category)
    }

    pub fn toggle_expanded(&mut self, category: CategoryId) {
        if !self.expanded.insert(category) {
            self.expanded.remove(&category);
        }
    }

    /// Expand the leading entry when a preview report is first shown.
    ///
    /// `preview_first` is the top preview entry, or `None` when the report
    /// is scored (or empty). The latch fires at most once per stay in
    /// preview and re-arms on leaving it, so the reader's own collapse is
    /// never re-forced by a re-render, while a later return to preview
    /// auto-expands again. Scored reports never auto-expand.
    pub fn sync_preview_expansion(&mut self, preview_first: Option<CategoryId>) {
        let Some(category) = preview_first else {
            self.preview_expansion_applied = false;
            return;
        };
        if !self.preview_expansion_applied {
            self.preview_expansion_applied = true;
            self.expanded.insert(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::CategoryId;

    fn fixture_statements() -> Vec<Statement> {
        let mut out = Vec::new();
        for (category, count) in [(1u8, 2u16), (2, 2)] {
            for number in 1..=count {
                let id = StatementId::new(CategoryId::new(category), number);
                out.push(Statement::new(id, format!("statement {id}")));
            }
        }
        out
    }

    fn answer_all(session: &mut QuizSession) {
        for _ in 0..session.total() {
            session.select_answer(ScaleValue::Agree);
            session.advance();
        }
    }

    #[test]
    fn advance_is_rejected_without_a_response() {
        let mut session = QuizSession::with_order(fixture_statements());
        assert_eq!(session.advance(), AdvanceOutcome::Rejected);
        assert_eq!(session.position(), 0);

        session.select_answer(ScaleValue::Neutral);
        assert_eq!(session.advance(), AdvanceOutcome::Moved);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn selecting_again_overwrites_without_advancing() {
        let mut session = QuizSession::with_order(fixture_statements());
        session.select_answer(ScaleValue::StronglyDisagree);
        session.select_answer(ScaleValue::StronglyAgree);
        assert_eq!(session.position(), 0);
        let id = session.current().unwrap().id();
        assert_eq!(session.response_for(id), Some(ScaleValue::StronglyAgree));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn completing_the_last_statement_switches_to_reporting() {
        let mut session = QuizSession::with_order(fixture_statements());
        answer_all(&mut session);
        assert_eq!(session.phase(), Phase::Reporting);
        assert!(session.is_complete());
        assert!(session.completed_at().is_some());
        assert_eq!(session.score_entries().len(), 2);
    }

    #[test]
    fn last_statement_does_not_complete_with_gaps_behind_it() {
        let mut session = QuizSession::with_order(fixture_statements());
        // Answer the first, then jump past the second to the end.
        session.select_answer(ScaleValue::Agree);
        session.advance();
        assert!(session.jump_to(3));
        session.select_answer(ScaleValue::Agree);
        assert_eq!(session.advance(), AdvanceOutcome::Rejected);
        assert_eq!(session.phase(), Phase::Answering);
        assert!(session.score_entries().is_empty());
    }

    #[test]
    fn retreat_stops_at_the_first_statement() {
        let mut session = QuizSession::with_order(fixture_statements());
        session.retreat();
        assert_eq!(session.position(), 0);
        session.select_answer(ScaleValue::Agree);
        session.advance();
        session.retreat();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn jump_rejects_out_of_range_and_returns_to_answering() {
        let mut session = QuizSession::with_order(fixture_statements());
        answer_all(&mut session);
        assert_eq!(session.phase(), Phase::Reporting);

        assert!(!session.jump_to(99));
        assert_eq!(session.phase(), Phase::Reporting);

        assert!(session.jump_to(2));
        assert_eq!(session.phase(), Phase::Answering);
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn restart_clears_everything_and_keeps_the_statement_set() {
        let mut session = QuizSession::with_order(fixture_statements());
        answer_all(&mut session);
        session.toggle_expanded(CategoryId::new(1));

        let mut before: Vec<StatementId> =
            session.statements().iter().map(Statement::id).collect();
        session.restart();
        let mut after: Vec<StatementId> =
            session.statements().iter().map(Statement::id).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);

        assert_eq!(session.phase(), Phase::Answering);
        assert_eq!(session.position(), 0);
        assert_eq!(session.answered_count(), 0);
        assert!(session.completed_at().is_none());
        assert!(!session.is_expanded(CategoryId::new(1)));
    }

    #[test]
    fn toggle_expansion_round_trips() {
        let mut session = QuizSession::with_order(fixture_statements());
        let category = CategoryId::new(2);
        assert!(!session.is_expanded(category));
        session.toggle_expanded(category);
        assert!(session.is_expanded(category));
        session.toggle_expanded(category);
        assert!(!session.is_expanded(category));
    }

    #[test]
    fn preview_expansion_latch_fires_once_per_preview_stay() {
        let mut session = QuizSession::with_order(fixture_statements());
        let first = CategoryId::new(1);

        session.sync_preview_expansion(Some(first));
        assert!(session.is_expanded(first));

        // The reader collapses it; a re-render must not re-expand.
        session.toggle_expanded(first);
        session.sync_preview_expansion(Some(first));
        assert!(!session.is_expanded(first));

        // Leaving preview re-arms the latch for the next preview stay.
        session.sync_preview_expansion(None);
        session.sync_preview_expansion(Some(first));
        assert!(session.is_expanded(first));
    }

    #[test]
    fn scored_reports_never_auto_expand() {
        let mut session = QuizSession::with_order(fixture_statements());
        answer_all(&mut session);
        session.sync_preview_expansion(None);
        assert!(!session.is_expanded(CategoryId::new(1)));
    }

    #[test]
    fn default_session_is_inert() {
        let mut session = QuizSession::default();
        assert!(session.current().is_none());
        assert!(!session.is_complete());
        session.select_answer(ScaleValue::Agree);
        assert_eq!(session.advance(), AdvanceOutcome::Rejected);
        assert!(session.score_entries().is_empty());
    }

    #[test]
    fn first_position_tracks_presentation_order() {
        let session = QuizSession::with_order(fixture_statements());
        assert_eq!(session.first_position_for(CategoryId::new(2)), Some(2));
        assert_eq!(session.first_position_for(CategoryId::new(7)), None);
    }
}
