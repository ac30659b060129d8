//! Roster controller
//!
//! Owns the roster view state for one event: category tab, settled search
//! term, pager, selection set, and page cache. Fetches are generation
//! tagged so a response that arrives after the filters have moved on is
//! discarded instead of clobbering fresher state.

use shared::models::{AttendanceUpdate, Category, RosterMember};
use shared::response::RosterPage;
use tracing::{debug, warn};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

use super::pagination::Pager;
use super::query::PageCache;
use super::search::matches_member;
use super::selection::SelectionSet;

/// Parameters of one roster fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterQuery {
    pub event_id: Option<i64>,
    pub category: Category,
    pub page: u32,
    pub search: String,
}

/// Proof that a fetch was started against a specific generation of the
/// view state. Must be handed back to [`RosterController::apply_page`].
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    pub query: RosterQuery,
}

/// Outcome of [`RosterController::begin_fetch`].
#[derive(Debug)]
pub enum FetchPlan {
    /// The page was served from cache; no request is needed.
    Cached,
    /// Issue the request described by the ticket's query, then hand the
    /// result back via `apply_page`.
    Fetch(FetchTicket),
}

/// Table body state as the UI should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    /// No fetch started yet.
    Idle,
    /// A fetch for the current view state is in flight.
    Loading,
    /// Rows reflect the current view state. An empty row list is a valid
    /// Loaded state ("No members found"), not a failure.
    Loaded,
    /// The last fetch failed; rows are whatever was shown before. The view
    /// stays interactive so the user can retry.
    Failed,
}

#[derive(Debug)]
pub struct RosterController {
    event_id: Option<i64>,
    category: Category,
    search: String,
    pager: Pager,
    generation: u64,
    state: RosterState,
    last_error: Option<String>,
    rows: Vec<RosterMember>,
    selection: SelectionSet,
    cache: PageCache,
}

impl RosterController {
    /// Controller for marking attendance on one event. Without an event id
    /// the roster is a read-only directory view and toggling is rejected.
    pub fn new(event_id: Option<i64>) -> Self {
        Self {
            event_id,
            category: Category::default(),
            search: String::new(),
            pager: Pager::new(),
            generation: 0,
            state: RosterState::Idle,
            last_error: None,
            rows: Vec::new(),
            selection: SelectionSet::new(),
            cache: PageCache::new(),
        }
    }

    // ========== View-state accessors ==========

    pub fn event_id(&self) -> Option<i64> {
        self.event_id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn state(&self) -> RosterState {
        self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.pager.current_page()
    }

    pub fn last_page(&self) -> u32 {
        self.pager.last_page()
    }

    /// Rows of the currently displayed page.
    pub fn rows(&self) -> &[RosterMember] {
        &self.rows
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether a row should render as marked.
    pub fn is_selected(&self, member_id: i64) -> bool {
        self.selection.contains(member_id)
    }

    // ========== Filter transitions ==========

    /// Switch category tab. Resets to page 1 before any fetch is issued
    /// and invalidates in-flight responses for the old tab.
    pub fn set_category(&mut self, category: Category) {
        if self.category == category {
            return;
        }
        self.category = category;
        self.pager.reset();
        self.generation += 1;
    }

    /// Apply a settled search term. Same reset rules as `set_category`;
    /// requesting a high page under a narrower filter would render an
    /// empty-result illusion.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search == term {
            return;
        }
        self.search = term;
        self.pager.reset();
        self.generation += 1;
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next();
        if moved {
            self.generation += 1;
        }
        moved
    }

    /// Go back one page. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.prev();
        if moved {
            self.generation += 1;
        }
        moved
    }

    // ========== Fetch lifecycle ==========

    fn current_query(&self) -> RosterQuery {
        RosterQuery {
            event_id: self.event_id,
            category: self.category,
            page: self.pager.current_page(),
            search: self.search.clone(),
        }
    }

    /// Start a fetch for the current view state. Serves a fresh cached
    /// page directly; otherwise marks the table loading and returns the
    /// ticket the response must be applied with.
    pub fn begin_fetch(&mut self) -> FetchPlan {
        let query = self.current_query();
        if let Some(page) = self.cache.get(&query) {
            let page = page.clone();
            self.show_page(&page);
            return FetchPlan::Cached;
        }

        self.state = RosterState::Loading;
        FetchPlan::Fetch(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a fetch outcome. A response whose ticket no longer matches
    /// the controller's generation is discarded whole, success or failure:
    /// it answers a question the view is no longer asking. Returns whether
    /// the response was applied.
    pub fn apply_page(
        &mut self,
        ticket: FetchTicket,
        result: ClientResult<RosterPage>,
    ) -> ClientResult<bool> {
        if ticket.generation != self.generation {
            debug!(?ticket.query, "discarding stale roster response");
            return Ok(false);
        }

        match result {
            Ok(page) => {
                self.cache.insert(ticket.query, page.clone());
                self.show_page(&page);
                Ok(true)
            }
            Err(err) => {
                self.state = RosterState::Failed;
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch and apply the current page in one call.
    pub async fn refresh(&mut self, http: &HttpClient) -> ClientResult<()> {
        match self.begin_fetch() {
            FetchPlan::Cached => Ok(()),
            FetchPlan::Fetch(ticket) => {
                let result = http
                    .filter_by_type(
                        ticket.query.event_id,
                        ticket.query.category,
                        ticket.query.page,
                        &ticket.query.search,
                    )
                    .await;
                self.apply_page(ticket, result).map(|_| ())
            }
        }
    }

    fn show_page(&mut self, page: &RosterPage) {
        self.pager.set_last_page(page.pagination.last_page);
        self.selection.seed(&page.data);
        // Defensive re-filter on top of the server-side search.
        self.rows = page
            .data
            .iter()
            .filter(|row| matches_member(&row.member, &self.search))
            .cloned()
            .collect();
        self.state = RosterState::Loaded;
        self.last_error = None;
    }

    // ========== Attendance toggling ==========

    /// Toggle one member's mark: flip locally, then tell the server. On
    /// failure the flip is reverted so the table keeps reflecting server
    /// truth, and the error is surfaced for a non-fatal notification.
    ///
    /// Rapid repeated toggles are safe: each call is independent and the
    /// server applies them in arrival order, one id at a time.
    pub async fn toggle(&mut self, http: &HttpClient, member_id: i64) -> ClientResult<bool> {
        let Some(event_id) = self.event_id else {
            return Err(ClientError::InvalidState(
                "cannot mark attendance without an event".into(),
            ));
        };

        let now_selected = self.selection.toggle(member_id);
        let update = AttendanceUpdate::single(self.category, member_id);

        match http.update_attendance(event_id, &update).await {
            Ok(()) => {
                self.note_mark(member_id, now_selected);
                Ok(now_selected)
            }
            Err(err) => {
                self.selection.toggle(member_id);
                warn!(member_id, error = %err, "attendance update failed, reverting local mark");
                Err(err)
            }
        }
    }

    /// Keep the displayed rows and cache consistent with a confirmed mark.
    fn note_mark(&mut self, member_id: i64, marked: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.member.id == member_id) {
            row.is_marked = marked;
        }
        // Every cached page holding this member predates the write, not
        // just the one for the current query.
        self.cache.note_mark(member_id, marked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Member, UserStatus, UserType};
    use shared::response::{PageInfo, Paginated};

    fn row(id: i64, family_name: &str, marked: bool) -> RosterMember {
        RosterMember {
            member: Member {
                id,
                name: format!("Given{id}"),
                family_name: family_name.into(),
                user_type: UserType::Member,
                status: UserStatus::Active,
                gender: None,
                marital_status: None,
                dob: None,
                phone: None,
                email: None,
                address: None,
                church_name: None,
                group_id: None,
                profile: None,
            },
            is_marked: marked,
        }
    }

    fn page(rows: Vec<RosterMember>, current: u32, last: u32) -> RosterPage {
        Paginated {
            data: rows,
            pagination: PageInfo::new(current, last, 10),
        }
    }

    fn ticket(controller: &mut RosterController) -> FetchTicket {
        match controller.begin_fetch() {
            FetchPlan::Fetch(ticket) => ticket,
            FetchPlan::Cached => panic!("expected a fetch, page was cached"),
        }
    }

    #[test]
    fn category_or_search_change_resets_page_before_fetch() {
        let mut controller = RosterController::new(Some(1));
        let t = ticket(&mut controller);
        controller
            .apply_page(t, Ok(page(vec![], 1, 3)))
            .unwrap();
        controller.next_page();
        controller.next_page();
        assert_eq!(controller.current_page(), 3);

        controller.set_category(Category::Friend);
        assert_eq!(controller.current_page(), 1);
        let t = ticket(&mut controller);
        assert_eq!(t.query.page, 1, "fetch after tab switch must ask for page 1");

        controller
            .apply_page(t, Ok(page(vec![], 1, 2)))
            .unwrap();
        controller.next_page();
        controller.set_search("tan");
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn stale_response_does_not_clobber_fresher_state() {
        let mut controller = RosterController::new(Some(1));

        // Fetch for category A goes out...
        let stale = ticket(&mut controller);

        // ...user switches to category B before it resolves.
        controller.set_category(Category::Friend);
        let fresh = ticket(&mut controller);
        let applied = controller
            .apply_page(fresh, Ok(page(vec![row(7, "Friendly", false)], 1, 1)))
            .unwrap();
        assert!(applied);

        // The late A response must be ignored.
        let applied = controller
            .apply_page(stale, Ok(page(vec![row(99, "Stale", true)], 1, 5)))
            .unwrap();
        assert!(!applied);
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].member.id, 7);
        assert_eq!(controller.last_page(), 1);
        assert!(!controller.is_selected(99));
    }

    #[test]
    fn stale_error_is_also_discarded() {
        let mut controller = RosterController::new(Some(1));
        let stale = ticket(&mut controller);
        controller.set_search("lim");

        let applied = controller
            .apply_page(stale, Err(ClientError::Internal("boom".into())))
            .unwrap();
        assert!(!applied);
        assert_ne!(controller.state(), RosterState::Failed);
    }

    #[test]
    fn failed_fetch_is_nonfatal_and_retryable() {
        let mut controller = RosterController::new(Some(1));
        let t = ticket(&mut controller);
        let err = controller
            .apply_page(t, Err(ClientError::Internal("boom".into())))
            .unwrap_err();
        assert!(matches!(err, ClientError::Internal(_)));
        assert_eq!(controller.state(), RosterState::Failed);
        assert!(controller.last_error().is_some());

        // Retry with unchanged filters still fetches.
        let t = ticket(&mut controller);
        controller
            .apply_page(t, Ok(page(vec![], 1, 1)))
            .unwrap();
        assert_eq!(controller.state(), RosterState::Loaded);
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn loaded_page_seeds_selection_from_marks() {
        let mut controller = RosterController::new(Some(1));
        let t = ticket(&mut controller);
        let rows: Vec<RosterMember> = (1..=10)
            .map(|id| row(id, "Tan", matches!(id, 2 | 5 | 9)))
            .collect();
        controller.apply_page(t, Ok(page(rows, 1, 1))).unwrap();

        assert_eq!(controller.selection().ids(), vec![2, 5, 9]);
        assert_eq!(controller.state(), RosterState::Loaded);
    }

    #[test]
    fn empty_page_is_loaded_not_failed() {
        let mut controller = RosterController::new(Some(1));
        controller.set_search("nosuchfamily");
        let t = ticket(&mut controller);
        controller
            .apply_page(t, Ok(page(vec![], 1, 1)))
            .unwrap();

        assert_eq!(controller.state(), RosterState::Loaded);
        assert!(controller.rows().is_empty());
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.last_page(), 1);
    }

    #[test]
    fn second_visit_to_a_page_is_served_from_cache() {
        let mut controller = RosterController::new(Some(1));
        let t = ticket(&mut controller);
        controller
            .apply_page(t, Ok(page(vec![row(3, "Tan", true)], 1, 1)))
            .unwrap();

        // Same filters, same page: no request needed.
        assert!(matches!(controller.begin_fetch(), FetchPlan::Cached));
        assert_eq!(controller.rows().len(), 1);

        // A different search term misses the cache.
        controller.set_search("lim");
        assert!(matches!(controller.begin_fetch(), FetchPlan::Fetch(_)));
    }

    #[test]
    fn defensive_refilter_drops_rows_the_server_should_not_have_sent() {
        let mut controller = RosterController::new(Some(1));
        controller.set_search("tan");
        let t = ticket(&mut controller);
        controller
            .apply_page(
                t,
                Ok(page(vec![row(1, "Tan", false), row(2, "Lim", false)], 1, 1)),
            )
            .unwrap();

        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].member.family_name, "Tan");
    }

    #[tokio::test]
    async fn toggle_without_event_is_rejected() {
        let mut controller = RosterController::new(None);
        let http = crate::ClientConfig::default().build_client();
        let err = controller.toggle(&http, 1).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidState(_)));
        assert!(controller.selection().is_empty(), "no optimistic flip on rejection");
    }
}
