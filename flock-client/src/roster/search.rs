//! Search input handling
//!
//! A poll-based debouncer for the search box, and the defensive
//! client-side re-filter applied on top of the server-side search.

use std::time::{Duration, Instant};

use shared::models::Member;

const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Coalesces keystrokes into one settled search term.
///
/// The UI feeds every edit through [`input`](Self::input) and polls
/// [`poll`](Self::poll) on its tick; the settled term is emitted once the
/// input has been quiet for the configured delay. Pure state, no timers.
#[derive(Debug)]
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an edit to the search box.
    pub fn input(&mut self, term: impl Into<String>) {
        self.input_at(term, Instant::now());
    }

    /// Emit the settled term, if the quiet period has elapsed.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    fn input_at(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some((term.into(), now));
    }

    fn poll_at(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.duration_since(*at) >= self.delay => {
                self.pending.take().map(|(term, _)| term)
            }
            _ => None,
        }
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match against given and family name.
///
/// The server already filters; this re-check guards the table against a
/// response that ignored the search parameter.
pub fn matches_member(member: &Member, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    member.name.to_lowercase().contains(&term)
        || member.family_name.to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Member, UserStatus, UserType};

    fn member(name: &str, family_name: &str) -> Member {
        Member {
            id: 1,
            name: name.into(),
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
        }
    }

    #[test]
    fn debounce_emits_only_the_last_term_after_quiet_period() {
        let mut debounce = SearchDebounce::with_delay(Duration::from_millis(100));
        let start = Instant::now();

        debounce.input_at("t", start);
        debounce.input_at("ta", start + Duration::from_millis(50));
        debounce.input_at("tan", start + Duration::from_millis(90));

        // Still typing: nothing settles.
        assert_eq!(debounce.poll_at(start + Duration::from_millis(120)), None);

        // Quiet long enough: last term wins, emitted once.
        assert_eq!(
            debounce.poll_at(start + Duration::from_millis(200)),
            Some("tan".to_string())
        );
        assert_eq!(debounce.poll_at(start + Duration::from_millis(300)), None);
    }

    #[test]
    fn matches_either_name_case_insensitively() {
        let m = member("Mary", "Tan");
        assert!(matches_member(&m, ""));
        assert!(matches_member(&m, "tan"));
        assert!(matches_member(&m, "AR"));
        assert!(!matches_member(&m, "lim"));
    }
}
