//! Search screen state.

use super::{Effects, ResponseOrder};
use crate::models::SearchResult;
use crate::navigation::Route;

/// Which part of the search screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Search,
    Results,
}

/// A search the screen wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic per-screen request number
    pub ticket: u64,
    /// Query text, exactly as typed
    pub query: String,
}

/// Search results plus the text input that drives them.
#[derive(Debug, Default)]
pub struct HomeScreen {
    query: String,
    results: Vec<SearchResult>,
    selected: usize,
    focus: HomeFocus,
    next_ticket: u64,
    applied_ticket: Option<u64>,
    effects: Effects,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request issued when the screen mounts: an empty query.
    pub fn initial_load(&mut self) -> SearchRequest {
        self.issue(String::new())
    }

    /// The request for the current input, taken verbatim.
    pub fn submit(&mut self) -> SearchRequest {
        self.issue(self.query.clone())
    }

    fn issue(&mut self, query: String) -> SearchRequest {
        self.next_ticket += 1;
        SearchRequest {
            ticket: self.next_ticket,
            query,
        }
    }

    /// Replace the result list with a response for request `ticket`.
    ///
    /// Returns whether the response was applied. Under
    /// [`ResponseOrder::ArrivalOrder`] it always is, so a slow earlier request
    /// can overwrite a newer one.
    pub fn apply_results(
        &mut self,
        ticket: u64,
        results: Vec<SearchResult>,
        order: ResponseOrder,
    ) -> bool {
        if order == ResponseOrder::LatestRequest
            && self.applied_ticket.is_some_and(|applied| ticket < applied)
        {
            return false;
        }
        self.results = results;
        self.selected = 0;
        self.applied_ticket = Some(ticket);
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn focus(&self) -> HomeFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: HomeFocus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Search => HomeFocus::Results,
            HomeFocus::Results => HomeFocus::Search,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection to `index` if it names a result.
    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected = index;
        }
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }

    /// Route to the selected recipe. Only the id is forwarded; the detail
    /// screen fetches the full record itself.
    pub fn open_selected(&self) -> Option<Route> {
        self.selected_result().map(|item| Route::Recipe {
            recipe_id: item.id,
        })
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut Effects {
        &mut self.effects
    }
}
