//! Roster page cache
//!
//! Fetched pages are cached per (event, category, page, search) with a
//! finite staleness window: server data may drift across sessions but is
//! treated as stable within one editing session, so re-visiting a page
//! shortly after fetching it skips the network round trip.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use shared::response::RosterPage;

use super::controller::RosterQuery;

const DEFAULT_TTL: Duration = Duration::from_secs(30);

#[derive(Debug)]
struct CacheEntry {
    stored_at: Instant,
    page: RosterPage,
}

#[derive(Debug)]
pub struct PageCache {
    ttl: Duration,
    entries: HashMap<RosterQuery, CacheEntry>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh cached page for the query, if any. Expired entries are
    /// treated as absent.
    pub fn get(&self, query: &RosterQuery) -> Option<&RosterPage> {
        self.entries
            .get(query)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| &entry.page)
    }

    pub fn insert(&mut self, query: RosterQuery, page: RosterPage) {
        self.entries.insert(
            query,
            CacheEntry {
                stored_at: Instant::now(),
                page,
            },
        );
    }

    /// Patch a confirmed attendance mark into every cached page that
    /// contains the member. The same member can sit in cached pages under
    /// several search terms; all of them must agree with server truth, or
    /// a cache hit would reseed the selection from a pre-write snapshot.
    pub fn note_mark(&mut self, member_id: i64, marked: bool) {
        for entry in self.entries.values_mut() {
            for row in &mut entry.page.data {
                if row.member.id == member_id {
                    row.is_marked = marked;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}
