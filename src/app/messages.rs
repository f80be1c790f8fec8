//! AppMessage enum for results coming back from spawned requests.

use crate::models::{Recipe, SearchResult};
use crate::navigation::ScreenId;

/// Successful fetch results, addressed to the screen that issued the request.
///
/// Failures are never sent: the task that saw the failure logs it and stops.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Search results for request `ticket` of a search screen
    SearchLoaded {
        screen: ScreenId,
        ticket: u64,
        results: Vec<SearchResult>,
    },
    /// Full record for a detail screen
    RecipeLoaded { screen: ScreenId, recipe: Recipe },
}

impl AppMessage {
    /// Screen the message is addressed to.
    pub fn screen(&self) -> ScreenId {
        match self {
            AppMessage::SearchLoaded { screen, .. } | AppMessage::RecipeLoaded { screen, .. } => {
                *screen
            }
        }
    }
}
