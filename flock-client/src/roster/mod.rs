//! Attendance roster state machine
//!
//! Composes server-paginated roster queries, a page cache, the marked-id
//! selection set, and search filtering for one event. The controller is
//! single-owner state driven by a UI event loop; concurrency is limited to
//! overlapping in-flight requests, which are disambiguated by a request
//! generation counter (last request wins by relevance, not arrival order).

pub mod controller;
pub mod pagination;
pub mod query;
pub mod search;
pub mod selection;

pub use controller::{FetchPlan, FetchTicket, RosterController, RosterQuery, RosterState};
pub use pagination::Pager;
pub use query::PageCache;
pub use search::SearchDebounce;
pub use selection::SelectionSet;
