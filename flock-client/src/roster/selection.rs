//! Selection synchronizer state
//!
//! The set of member ids currently marked present for one event. Seeded
//! from the server's per-row `isMarked` flags on every page load; toggled
//! locally ahead of the remote update (the controller reverts the flip if
//! the remote call fails).

use std::collections::HashSet;

use shared::models::RosterMember;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible-page portion of the set from server truth.
    ///
    /// Ids on the incoming page overwrite any local state for those rows;
    /// ids from other pages are kept, so paging back and forth does not
    /// forget marks.
    pub fn seed<'a>(&mut self, rows: impl IntoIterator<Item = &'a RosterMember>) {
        for row in rows {
            if row.is_marked {
                self.ids.insert(row.member.id);
            } else {
                self.ids.remove(&row.member.id);
            }
        }
    }

    /// Flip membership for one id. Returns the new state: `true` if the
    /// member is now selected.
    pub fn toggle(&mut self, member_id: i64) -> bool {
        if self.ids.remove(&member_id) {
            false
        } else {
            self.ids.insert(member_id);
            true
        }
    }

    pub fn contains(&self, member_id: i64) -> bool {
        self.ids.contains(&member_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Drop all selection state, e.g. when switching events.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Member, RosterMember, UserStatus, UserType};

    fn row(id: i64, marked: bool) -> RosterMember {
        RosterMember {
            member: Member {
                id,
                name: format!("Given{id}"),
                family_name: format!("Family{id}"),
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

    #[test]
    fn seed_contains_exactly_the_marked_ids() {
        let rows: Vec<RosterMember> = (1..=10).map(|id| row(id, matches!(id, 2 | 5 | 9))).collect();
        let mut selection = SelectionSet::new();
        selection.seed(&rows);

        assert_eq!(selection.ids(), vec![2, 5, 9]);
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let mut selection = SelectionSet::new();
        selection.seed(&[row(101, true), row(102, false)]);

        assert!(selection.toggle(102));
        assert!(selection.contains(102));
        assert!(!selection.toggle(102));
        assert!(!selection.contains(102));

        assert!(!selection.toggle(101));
        assert!(selection.toggle(101));
        assert_eq!(selection.ids(), vec![101]);
    }

    #[test]
    fn reseed_overwrites_visible_rows_only() {
        let mut selection = SelectionSet::new();
        // Page 1 marked id 3, page 2 marked id 12.
        selection.seed(&[row(3, true)]);
        selection.seed(&[row(12, true)]);
        assert_eq!(selection.ids(), vec![3, 12]);

        // Back to page 1: server now says 3 is unmarked; 12 stays.
        selection.seed(&[row(3, false)]);
        assert_eq!(selection.ids(), vec![12]);
    }
}
