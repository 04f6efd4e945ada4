//! List State Machine
//!
//! The pure core of the user browser: full collection, search filter,
//! paginated display window, and the loading flag for the simulated page
//! fetch. Signal-free so the whole thing is testable off the browser.
//!
//! The display window is stored as a prefix length over the active
//! collection (filtered when a filter is set, full otherwise), so the
//! `displayed <= active` invariant holds by construction.

use crate::models::User;

/// Page size for the display window.
pub const PAGE_SIZE: usize = 100;

/// Handle for one in-flight page fetch. Carries the epoch of the active
/// collection at the time the fetch started; the append is discarded if
/// the epoch has moved on by the time the fetch lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    /// The authoritative collection. Shrinks only via delete.
    items: Vec<User>,
    /// Current search text. Empty means no filter.
    filter: String,
    /// Subsequence of `items` whose name contains `filter`, case-insensitive.
    /// Only meaningful while `filter` is non-empty.
    filtered: Vec<User>,
    /// Length of the displayed prefix of the active collection.
    displayed_len: usize,
    /// True while a simulated page fetch is pending.
    loading: bool,
    /// Bumped whenever the active collection changes identity or content,
    /// invalidating in-flight fetches.
    epoch: u64,
}

impl ListState {
    pub fn new(items: Vec<User>) -> Self {
        let displayed_len = items.len().min(PAGE_SIZE);
        Self {
            items,
            filter: String::new(),
            filtered: Vec::new(),
            displayed_len,
            loading: false,
            epoch: 0,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Size of the full collection.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// The collection the display window draws from.
    fn active(&self) -> &[User] {
        if self.filter.is_empty() {
            &self.items
        } else {
            &self.filtered
        }
    }

    /// The rows currently shown.
    pub fn displayed(&self) -> &[User] {
        let n = self.displayed_len.min(self.active().len());
        &self.active()[..n]
    }

    /// Whether the active collection has rows beyond the display window.
    pub fn has_more(&self) -> bool {
        self.displayed_len < self.active().len()
    }

    /// Apply a new search filter: recompute the filtered collection and
    /// reset the window to the first page of the active collection. Any
    /// in-flight fetch is invalidated.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        if filter.is_empty() {
            self.filtered = Vec::new();
        } else {
            let needle = filter.to_lowercase();
            self.filtered = self
                .items
                .iter()
                .filter(|user| user.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
        self.displayed_len = self.active().len().min(PAGE_SIZE);
        self.epoch += 1;
    }

    /// Start a page fetch if one makes sense: not while another fetch is
    /// pending, and not when the active collection is fully displayed.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        Some(LoadTicket { epoch: self.epoch })
    }

    /// Land a page fetch. Always clears the loading flag; grows the window
    /// only if the ticket is still current.
    pub fn complete_load(&mut self, ticket: LoadTicket) {
        self.loading = false;
        if ticket.epoch != self.epoch {
            return;
        }
        self.displayed_len = self.active().len().min(self.displayed_len + PAGE_SIZE);
    }

    /// Remove a user by id from every collection that holds it. Deleting
    /// an id that is not present leaves the state untouched.
    pub fn delete(&mut self, id: u32) {
        if !self.items.iter().any(|user| user.id == id) {
            return;
        }
        let in_window = self.displayed().iter().any(|user| user.id == id);
        self.items.retain(|user| user.id != id);
        self.filtered.retain(|user| user.id != id);
        if in_window {
            self.displayed_len -= 1;
        }
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            place: format!("Place {}", id),
        }
    }

    /// `count` users with unique names "User 0" .. "User count-1".
    fn make_users(count: u32) -> Vec<User> {
        (0..count).map(|i| make_user(i, &format!("User {}", i))).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_name() {
        let users = vec![
            make_user(0, "Alice Weber"),
            make_user(1, "Malice Zhang"),
            make_user(2, "Bob Rossi"),
        ];
        let mut state = ListState::new(users.clone());

        state.set_filter("ALIce");
        let expected: Vec<User> = users
            .iter()
            .filter(|u| u.name.to_lowercase().contains("alice"))
            .cloned()
            .collect();
        assert_eq!(state.displayed(), &expected[..]);
        assert_eq!(state.displayed().len(), 2);

        state.set_filter("zzz");
        assert!(state.displayed().is_empty());
        assert!(!state.has_more());
    }

    #[test]
    fn clearing_filter_resets_to_first_page_of_full_collection() {
        let users = make_users(250);
        let mut state = ListState::new(users.clone());

        // Page forward, then filter, then clear.
        let ticket = state.begin_load().unwrap();
        state.complete_load(ticket);
        assert_eq!(state.displayed().len(), 200);

        state.set_filter("User 1");
        assert!(state.displayed().len() < 200);

        state.set_filter("");
        assert_eq!(state.displayed(), &users[..PAGE_SIZE]);
    }

    #[test]
    fn pagination_grows_by_page_and_stops_at_the_end() {
        let mut state = ListState::new(make_users(250));
        assert_eq!(state.displayed().len(), 100);

        let ticket = state.begin_load().unwrap();
        assert!(state.loading());
        state.complete_load(ticket);
        assert!(!state.loading());
        assert_eq!(state.displayed().len(), 200);

        let ticket = state.begin_load().unwrap();
        state.complete_load(ticket);
        assert_eq!(state.displayed().len(), 250);

        // Sentinel visibility with nothing left is a no-op.
        assert!(state.begin_load().is_none());
        assert!(!state.loading());
        assert_eq!(state.displayed().len(), 250);
    }

    #[test]
    fn loads_are_mutually_exclusive() {
        let mut state = ListState::new(make_users(250));
        let ticket = state.begin_load().unwrap();
        assert!(state.begin_load().is_none());
        state.complete_load(ticket);
        assert!(state.begin_load().is_some());
    }

    #[test]
    fn small_collections_fit_in_the_first_page() {
        let state = ListState::new(make_users(40));
        assert_eq!(state.displayed().len(), 40);
        assert!(!state.has_more());
    }

    #[test]
    fn delete_removes_from_full_filtered_and_displayed() {
        let mut state = ListState::new(make_users(250));

        state.set_filter("User 2");
        assert!(state.displayed().iter().any(|u| u.id == 2));

        state.delete(2);
        assert!(state.displayed().iter().all(|u| u.id != 2));
        assert_eq!(state.total(), 249);

        state.set_filter("");
        assert!(state.displayed().iter().all(|u| u.id != 2));
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let mut state = ListState::new(make_users(50));
        state.delete(7);
        let snapshot = state.clone();
        state.delete(7);
        assert_eq!(state, snapshot);
        state.delete(9999);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn delete_beyond_the_window_keeps_the_window_size() {
        let mut state = ListState::new(make_users(250));
        assert_eq!(state.displayed().len(), 100);
        state.delete(240);
        assert_eq!(state.displayed().len(), 100);
        assert_eq!(state.total(), 249);
    }

    #[test]
    fn deleting_the_only_match_leaves_an_empty_window() {
        let users = vec![
            make_user(0, "Alice Weber"),
            make_user(1, "Bob Rossi"),
        ];
        let mut state = ListState::new(users);
        state.set_filter("alice");
        assert_eq!(state.displayed().len(), 1);

        state.delete(0);
        assert!(state.displayed().is_empty());

        // Subsequent sentinel visibility must stay a no-op.
        assert!(state.begin_load().is_none());
        assert!(state.displayed().is_empty());
    }

    #[test]
    fn window_growth_is_monotone_until_filter_change() {
        let mut state = ListState::new(make_users(500));
        let mut prev = state.displayed().len();
        while let Some(ticket) = state.begin_load() {
            state.complete_load(ticket);
            assert!(state.displayed().len() >= prev);
            prev = state.displayed().len();
        }
        assert_eq!(prev, 500);

        state.set_filter("User 4");
        assert!(state.displayed().len() <= PAGE_SIZE);
    }

    #[test]
    fn filter_change_invalidates_an_in_flight_fetch() {
        let mut state = ListState::new(make_users(500));
        let ticket = state.begin_load().unwrap();

        // Filter edit while the fetch is pending.
        state.set_filter("User 1");
        let after_filter = state.displayed().len();

        state.complete_load(ticket);
        assert!(!state.loading());
        // The stale append must not have grown the new window.
        assert_eq!(state.displayed().len(), after_filter);
    }

    #[test]
    fn delete_invalidates_an_in_flight_fetch() {
        let mut state = ListState::new(make_users(500));
        let ticket = state.begin_load().unwrap();
        state.delete(0);
        let after_delete = state.displayed().len();

        state.complete_load(ticket);
        assert!(!state.loading());
        assert_eq!(state.displayed().len(), after_delete);
    }

    #[test]
    fn displayed_never_exceeds_active_collection() {
        let mut state = ListState::new(make_users(120));
        let ticket = state.begin_load().unwrap();
        state.complete_load(ticket);
        assert_eq!(state.displayed().len(), 120);

        state.set_filter("User 11");
        assert!(state.displayed().len() <= state.total());
        for id in 0..120 {
            state.delete(id);
            assert!(state.displayed().len() <= state.total());
        }
        assert!(state.displayed().is_empty());
    }
}
