//! Session coordinator
//!
//! A [`Session`] owns the live register, filters and expected-amount text for
//! one run of the application. It is built from a [`SessionState`] at startup,
//! mutated by user actions, and captured back into a [`SessionState`] at
//! shutdown. Every mutation returns the recomputed summary.

use tracing::{debug, info};

use super::calculation::{parse_amount, parse_amount_lenient, CalculationService, EmptyExpectedPolicy};
use crate::config::{FaceValueSet, Preferences};
use crate::error::CashResult;
use crate::models::{CashRegister, Denomination, DenominationFilter, FilterSet, SummaryResult};
use crate::storage::{SessionState, StateStore};

/// Live state of one run
#[derive(Debug, Clone)]
pub struct Session {
    register: CashRegister,
    filters: FilterSet,
    expected_text: String,
    preferences: Preferences,
    calculator: CalculationService,
}

impl Session {
    /// Build a live session from persisted state
    pub fn from_state(state: SessionState) -> Self {
        let SessionState {
            expected_amount,
            denomination_counts,
            filter_visibility,
            preferences,
            ..
        } = state;

        let mut register = preferences
            .face_value_set
            .build_register()
            .unwrap_or_default();

        for (&face_value, &count) in &denomination_counts {
            if let Err(err) = register.set_count(face_value, count) {
                debug!(face_value, count, error = %err, "skipping restored count");
            }
        }

        let saved_filters: Vec<DenominationFilter> = filter_visibility
            .iter()
            .map(|(&face_value, &visible)| DenominationFilter {
                face_value,
                visible,
            })
            .collect();
        let mut filters = FilterSet::for_register(&register);
        filters.apply_saved(&saved_filters);

        Self {
            register,
            filters,
            expected_text: expected_amount.map(|v| v.to_string()).unwrap_or_default(),
            calculator: CalculationService::new(preferences.empty_expected_policy),
            preferences,
        }
    }

    /// Load state from a store and build the session
    pub fn startup<S: StateStore<SessionState>>(store: &S) -> Self {
        let session = Self::from_state(store.load());
        debug!(total = session.register.total_value(), "session started");
        session
    }

    /// Capture the session and persist it
    pub fn shutdown<S: StateStore<SessionState>>(&self, store: &S) -> CashResult<()> {
        let state = self.snapshot();
        store.save(&state)?;
        info!(
            total = state.last_total,
            expected = ?state.expected_amount,
            "session saved"
        );
        Ok(())
    }

    /// Capture the current state for persistence
    pub fn snapshot(&self) -> SessionState {
        let total = self.register.total_value();
        let expected_amount = parse_amount(&self.expected_text);

        SessionState {
            expected_amount,
            last_total: total,
            last_difference: expected_amount.map(|e| total - e),
            denomination_counts: self
                .register
                .denominations()
                .iter()
                .map(|d| (d.face_value(), d.count()))
                .collect(),
            filter_visibility: self
                .filters
                .filters()
                .iter()
                .map(|f| (f.face_value, f.visible))
                .collect(),
            preferences: self.preferences.clone(),
        }
    }

    pub fn register(&self) -> &CashRegister {
        &self.register
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Expected amount exactly as entered
    pub fn expected_text(&self) -> &str {
        &self.expected_text
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Recompute the summary for the current counts and expected amount
    pub fn summary(&self) -> SummaryResult {
        self.calculator
            .summarize(self.register.denominations(), &self.expected_text)
    }

    /// Set a count and recompute
    pub fn set_count(&mut self, face_value: i64, count: i64) -> CashResult<SummaryResult> {
        self.register.set_count(face_value, count)?;
        Ok(self.summary())
    }

    /// Set a count from user-entered text; invalid text counts as zero
    pub fn set_count_text(&mut self, face_value: i64, text: &str) -> CashResult<SummaryResult> {
        self.set_count(face_value, parse_amount_lenient(text))
    }

    /// Replace the expected amount text and recompute
    pub fn set_expected_text(&mut self, text: &str) -> SummaryResult {
        self.expected_text = text.trim().to_string();
        self.summary()
    }

    /// Zero every count and empty the expected amount; filters are kept
    pub fn clear(&mut self) -> SummaryResult {
        self.register.clear();
        self.expected_text.clear();
        self.summary()
    }

    /// Zero every count, keeping the expected amount
    pub fn clear_counts(&mut self) -> SummaryResult {
        self.register.clear();
        self.summary()
    }

    /// Show or hide a denomination row
    pub fn set_filter_visible(&mut self, face_value: i64, visible: bool) -> CashResult<()> {
        self.filters.set_visible(face_value, visible)
    }

    /// Make every denomination row visible
    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    /// Denominations whose rows are visible, in register order
    pub fn visible_denominations(&self) -> Vec<Denomination> {
        self.register
            .denominations()
            .iter()
            .filter(|d| self.filters.is_visible(d.face_value()))
            .copied()
            .collect()
    }

    /// Text report of the non-empty denominations and the total
    pub fn report(&self) -> String {
        self.register.format_report()
    }

    /// Change how an empty expected amount is treated
    pub fn set_empty_expected_policy(&mut self, policy: EmptyExpectedPolicy) -> SummaryResult {
        self.preferences.empty_expected_policy = policy;
        self.calculator = CalculationService::new(policy);
        self.summary()
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) {
        self.preferences.currency_symbol = symbol.trim().to_string();
    }

    /// Switch to another face value set
    ///
    /// Counts and visibility carry over for face values present in both sets.
    pub fn set_face_value_set(&mut self, set: FaceValueSet) -> SummaryResult {
        let mut state = self.snapshot();
        let fresh = SessionState::fresh(Preferences {
            face_value_set: set,
            ..self.preferences.clone()
        });

        state
            .denomination_counts
            .retain(|face_value, _| fresh.denomination_counts.contains_key(face_value));
        state
            .filter_visibility
            .retain(|face_value, _| fresh.filter_visibility.contains_key(face_value));
        state.preferences = fresh.preferences;

        *self = Self::from_state(state);
        self.summary()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_state(SessionState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SummaryStatus;
    use std::cell::RefCell;

    /// In-memory store used to exercise startup and shutdown
    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Option<SessionState>>,
    }

    impl StateStore<SessionState> for MemoryStore {
        fn load(&self) -> SessionState {
            self.saved.borrow().clone().unwrap_or_default()
        }

        fn save(&self, data: &SessionState) -> CashResult<()> {
            *self.saved.borrow_mut() = Some(data.clone());
            Ok(())
        }
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::default();
        let summary = session.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.expected, Some(0));
        assert_eq!(summary.status, SummaryStatus::Ok);
        assert_eq!(session.expected_text(), "");
    }

    #[test]
    fn test_mutations_recompute() {
        let mut session = Session::default();
        session.set_count(100, 3).unwrap();
        let summary = session.set_count(50, 2).unwrap();
        assert_eq!(summary.total, 400);

        let summary = session.set_expected_text("350");
        assert_eq!(summary.difference, Some(50));
        assert_eq!(summary.status, SummaryStatus::Over);

        let summary = session.set_expected_text("400");
        assert_eq!(summary.status, SummaryStatus::Ok);

        let summary = session.set_expected_text("");
        assert_eq!(summary.difference, Some(400));
        assert_eq!(summary.status, SummaryStatus::Over);
    }

    #[test]
    fn test_set_count_text_is_lenient() {
        let mut session = Session::default();
        session.set_count(10, 4).unwrap();

        let summary = session.set_count_text(10, "abc").unwrap();
        assert_eq!(summary.total, 0);

        let summary = session.set_count_text(10, "6").unwrap();
        assert_eq!(summary.total, 60);

        assert!(session.set_count_text(3, "1").is_err());
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        let mut session = Session::default();
        session.set_count(5000, 2).unwrap();

        let err = session.set_count_text(5000, "4000000000000000").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(session.summary().total, 10000);
    }

    #[test]
    fn test_unsupported_count_leaves_state() {
        let mut session = Session::default();
        session.set_count(100, 3).unwrap();

        assert!(session.set_count(3, 5).unwrap_err().is_unsupported_denomination());
        assert_eq!(session.register().total_value(), 300);
    }

    #[test]
    fn test_clear_keeps_filters() {
        let mut session = Session::default();
        session.set_count(500, 2).unwrap();
        session.set_expected_text("1000");
        session.set_filter_visible(1, false).unwrap();

        let summary = session.clear();
        assert_eq!(summary.total, 0);
        assert_eq!(session.expected_text(), "");
        assert!(!session.filters().is_visible(1));
    }

    #[test]
    fn test_clear_counts_keeps_expected() {
        let mut session = Session::default();
        session.set_count(200, 5).unwrap();
        session.set_expected_text("900");

        let summary = session.clear_counts();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.difference, Some(-900));
        assert_eq!(summary.status, SummaryStatus::Under);
    }

    #[test]
    fn test_visible_denominations() {
        let mut session = Session::default();
        session.set_filter_visible(5000, false).unwrap();
        session.set_filter_visible(1, false).unwrap();

        let visible = session.visible_denominations();
        assert_eq!(visible.len(), 9);
        assert_eq!(visible[0].face_value(), 2000);

        session.reset_filters();
        assert_eq!(session.visible_denominations().len(), 11);
    }

    #[test]
    fn test_no_comparison_policy() {
        let mut session = Session::default();
        session.set_count(100, 1).unwrap();

        let summary = session.set_empty_expected_policy(EmptyExpectedPolicy::NoComparison);
        assert_eq!(summary.difference, None);
        assert_eq!(summary.status, SummaryStatus::None);
        assert_eq!(
            session.snapshot().preferences.empty_expected_policy,
            EmptyExpectedPolicy::NoComparison
        );
    }

    #[test]
    fn test_snapshot_invariants() {
        let mut session = Session::default();
        session.set_count(100, 3).unwrap();
        session.set_count(50, 2).unwrap();
        session.set_expected_text("350");

        let state = session.snapshot();
        assert_eq!(state.last_total, 400);
        assert_eq!(state.expected_amount, Some(350));
        assert_eq!(state.last_difference, Some(50));

        session.set_expected_text("");
        let state = session.snapshot();
        assert_eq!(state.expected_amount, None);
        assert_eq!(state.last_difference, None);
    }

    #[test]
    fn test_startup_shutdown_round_trip() {
        let store = MemoryStore::default();

        let mut session = Session::startup(&store);
        session.set_count(1000, 2).unwrap();
        session.set_count(5, 1).unwrap();
        session.set_expected_text("2000");
        session.set_filter_visible(2, false).unwrap();
        session.shutdown(&store).unwrap();

        let restored = Session::startup(&store);
        assert_eq!(restored.register(), session.register());
        assert_eq!(restored.filters(), session.filters());
        assert_eq!(restored.expected_text(), "2000");
        assert_eq!(restored.summary().difference, Some(5));
    }

    #[test]
    fn test_switch_face_value_set() {
        let mut session = Session::default();
        session.set_count(2, 10).unwrap();
        session.set_count(100, 1).unwrap();
        session.set_filter_visible(50, false).unwrap();

        let summary = session.set_face_value_set(FaceValueSet::Reduced);
        assert_eq!(summary.total, 100);
        assert!(!session.register().contains(2));
        assert!(!session.filters().is_visible(50));
        assert_eq!(session.preferences().face_value_set, FaceValueSet::Reduced);

        session.set_face_value_set(FaceValueSet::Full);
        assert_eq!(session.register().count_of(2), Some(0));
        assert_eq!(session.register().count_of(100), Some(1));
    }
}
