use log::{debug, info, warn};
use std::sync::Arc;

use crate::api::DataSource;
use crate::domain::{Dataset, Player, SortDirection, SortKey, SortSpec};
use crate::engine::{filter_players, sort_players};
use crate::errors::LoadError;

/// Generation stamp handed out when a load starts.
///
/// Only the most recently issued ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns the leaderboard view state and derives the projection from it
#[derive(Debug, Default)]
pub struct ViewStateController {
    dataset: Arc<Dataset>,
    error: Option<LoadError>,
    search_term: String,
    sort_spec: SortSpec,
    mounted: bool,
    issued: u64,
}

impl ViewStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort_spec
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.dataset.last_updated.as_deref()
    }

    // --- Transitions ---

    pub fn on_load_success(&mut self, dataset: Dataset) {
        self.dataset = Arc::new(dataset);
        self.error = None;
    }

    pub fn on_load_failure(&mut self, err: LoadError) {
        self.error = Some(err);
    }

    pub fn on_search_change(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Same column while ascending flips to descending; anything else
    /// starts the clicked column ascending.
    pub fn on_header_click(&mut self, key: SortKey) {
        let current = self.sort_spec;
        self.sort_spec = if current.key == key && current.direction == SortDirection::Ascending {
            SortSpec::new(key, current.direction.flipped())
        } else {
            SortSpec::ascending(key)
        };
        debug!("Sorting by {} {:?}", self.sort_spec.key, self.sort_spec.direction);
    }

    /// Players to display: filtered by the search term, then sorted.
    /// Recomputed on every call.
    pub fn projection(&self) -> Vec<&Player> {
        let all: Vec<&Player> = self.dataset.players.iter().collect();
        let matching = filter_players(&all, &self.search_term);
        sort_players(&matching, self.sort_spec)
    }

    // --- Loading ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply a finished load. Returns `false` when a newer load was started
    /// in the meantime and the result was discarded.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<Dataset, LoadError>) -> bool {
        if ticket.0 != self.issued {
            warn!(
                "Discarding stale load result (ticket {}, latest {})",
                ticket.0, self.issued
            );
            return false;
        }

        match result {
            Ok(dataset) => self.on_load_success(dataset),
            Err(err) => self.on_load_failure(err),
        }
        true
    }

    /// Ticket for the initial load, or `None` once the view has been mounted
    pub fn start_mount(&mut self) -> Option<LoadTicket> {
        if self.mounted {
            debug!("View already mounted, skipping load");
            return None;
        }
        self.mounted = true;
        Some(self.begin_load())
    }

    /// Ticket for a manual refresh; any load started before it goes stale
    pub fn start_refresh(&mut self) -> LoadTicket {
        info!("Refreshing stats");
        self.mounted = true;
        self.begin_load()
    }

    /// Initial load, awaited in place. Runs at most once per controller.
    pub async fn mount<S: DataSource>(&mut self, source: &S) {
        if let Some(ticket) = self.start_mount() {
            let result = source.load().await;
            self.apply_load(ticket, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn player(rank: u32, name: &str, xp: u64, wins: u64) -> Player {
        Player {
            rank,
            name: name.to_string(),
            level: 1,
            xp,
            wins,
            goals: 0,
            assists: 0,
            matches: 0,
            mvps: 0,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                player(1, "Ana", 10, 2),
                player(2, "Bob", 30, 5),
                player(3, "Ana2", 20, 2),
            ],
            Some("2025-01-01T00:00:00Z".to_string()),
        )
    }

    fn projected_ranks(controller: &ViewStateController) -> Vec<u32> {
        controller.projection().iter().map(|p| p.rank).collect()
    }

    struct CountingSource {
        calls: Cell<usize>,
        result: Result<Dataset, LoadError>,
    }

    impl CountingSource {
        fn new(result: Result<Dataset, LoadError>) -> Self {
            Self {
                calls: Cell::new(0),
                result,
            }
        }
    }

    impl DataSource for CountingSource {
        async fn load(&self) -> Result<Dataset, LoadError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = ViewStateController::new();

        assert!(controller.dataset().is_empty());
        assert!(controller.error().is_none());
        assert_eq!(controller.search_term(), "");
        assert_eq!(controller.sort_spec(), SortSpec::ascending(SortKey::Rank));
        assert!(controller.projection().is_empty());
    }

    #[test]
    fn test_search_then_sort_scenario() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());

        controller.on_search_change("ana");
        assert_eq!(projected_ranks(&controller), vec![1, 3]);

        controller.on_header_click(SortKey::Xp);
        controller.on_header_click(SortKey::Xp);
        assert_eq!(controller.sort_spec(), SortSpec::descending(SortKey::Xp));
        assert_eq!(projected_ranks(&controller), vec![3, 1]);
    }

    #[test]
    fn test_header_click_toggles_and_resets() {
        let mut controller = ViewStateController::new();

        controller.on_header_click(SortKey::Wins);
        assert_eq!(controller.sort_spec(), SortSpec::ascending(SortKey::Wins));

        controller.on_header_click(SortKey::Wins);
        assert_eq!(controller.sort_spec(), SortSpec::descending(SortKey::Wins));

        controller.on_header_click(SortKey::Wins);
        assert_eq!(controller.sort_spec(), SortSpec::ascending(SortKey::Wins));

        controller.on_header_click(SortKey::Wins);
        controller.on_header_click(SortKey::Name);
        assert_eq!(controller.sort_spec(), SortSpec::ascending(SortKey::Name));
    }

    #[test]
    fn test_default_rank_header_click_goes_descending() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());

        controller.on_header_click(SortKey::Rank);

        assert_eq!(projected_ranks(&controller), vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_wins_keep_feed_order() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());

        controller.on_header_click(SortKey::Wins);

        assert_eq!(projected_ranks(&controller), vec![1, 3, 2]);
    }

    #[test]
    fn test_projection_leaves_dataset_untouched() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());
        controller.on_search_change("b");
        controller.on_header_click(SortKey::Xp);

        let _ = controller.projection();

        assert_eq!(**controller.dataset(), sample_dataset());
    }

    #[test]
    fn test_failure_keeps_previous_dataset() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());

        controller.on_load_failure(LoadError::new("offline"));

        assert_eq!(controller.error().map(|e| e.message.as_str()), Some("offline"));
        assert_eq!(controller.dataset().len(), 3);
    }

    #[test]
    fn test_success_clears_error() {
        let mut controller = ViewStateController::new();
        controller.on_load_failure(LoadError::new("offline"));

        controller.on_load_success(sample_dataset());

        assert!(controller.error().is_none());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut controller = ViewStateController::new();

        let first = controller.begin_load();
        let second = controller.begin_load();

        assert!(controller.apply_load(second, Ok(sample_dataset())));
        assert!(!controller.apply_load(first, Err(LoadError::new("late failure"))));

        assert!(controller.error().is_none());
        assert_eq!(controller.dataset().len(), 3);
    }

    #[test]
    fn test_reload_replaces_dataset_wholesale() {
        let mut controller = ViewStateController::new();
        controller.on_load_success(sample_dataset());
        let before = Arc::clone(controller.dataset());

        controller.on_load_success(Dataset::new(vec![player(7, "Zoe", 1, 1)], None));

        assert!(!Arc::ptr_eq(&before, controller.dataset()));
        assert_eq!(before.len(), 3);
        assert_eq!(projected_ranks(&controller), vec![7]);
    }

    #[tokio::test]
    async fn test_mount_loads_only_once() {
        let source = CountingSource::new(Ok(sample_dataset()));
        let mut controller = ViewStateController::new();

        controller.mount(&source).await;
        controller.mount(&source).await;

        assert_eq!(source.calls.get(), 1);
        assert_eq!(controller.dataset().len(), 3);
    }

    #[tokio::test]
    async fn test_mount_failure_leaves_empty_projection() {
        let source = CountingSource::new(Err(LoadError::new("Network response was not ok (500)")));
        let mut controller = ViewStateController::new();

        controller.mount(&source).await;

        assert!(controller.projection().is_empty());
        assert!(controller.error().is_some());
    }

    #[test]
    fn test_refresh_supersedes_pending_mount() {
        let mut controller = ViewStateController::new();

        let mount = controller.start_mount().unwrap();
        let refresh = controller.start_refresh();

        assert!(controller.apply_load(refresh, Ok(sample_dataset())));
        assert!(!controller.apply_load(mount, Err(LoadError::new("slow mount failed"))));
        assert!(controller.error().is_none());
        assert!(controller.start_mount().is_none());
    }
}
