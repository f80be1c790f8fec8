//! Per-screen state containers.
//!
//! Each mounted screen owns its fetched data and the handles of the requests
//! it started. Nothing is shared between screens; popping a screen drops its
//! state and aborts its in-flight requests.

mod home;
mod recipe;

pub use home::{HomeFocus, HomeScreen, SearchRequest};
pub use recipe::{Overview, RecipeScreen, RecipeTab};

use tokio::task::{AbortHandle, JoinHandle};

/// How a screen treats responses that arrive out of request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrder {
    /// Apply every response as it arrives; the last to arrive wins.
    #[default]
    ArrivalOrder,
    /// Ignore a response once a newer request's response has been applied.
    LatestRequest,
}

/// In-flight requests started by one screen instance.
#[derive(Debug, Default)]
pub struct Effects {
    handles: Vec<AbortHandle>,
}

impl Effects {
    /// Track a spawned request.
    pub fn track(&mut self, handle: &JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle.abort_handle());
    }

    /// Number of tracked requests still running.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every tracked request.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Effects {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// A mounted screen.
#[derive(Debug)]
pub enum Screen {
    Home(HomeScreen),
    Recipe(RecipeScreen),
}

impl Screen {
    /// Requests this screen is still waiting on.
    pub fn effects(&self) -> &Effects {
        match self {
            Screen::Home(home) => home.effects(),
            Screen::Recipe(recipe) => recipe.effects(),
        }
    }

    /// Mutable access to the screen's request handles.
    pub fn effects_mut(&mut self) -> &mut Effects {
        match self {
            Screen::Home(home) => home.effects_mut(),
            Screen::Recipe(recipe) => recipe.effects_mut(),
        }
    }

    /// Cleanup hook run when the screen leaves the stack.
    pub fn unmount(&mut self) {
        self.effects_mut().cancel_all();
    }
}
