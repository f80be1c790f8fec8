//! Application state and the glue between screens, requests and the UI loop.
//!
//! The UI loop is the only place screen state changes. Requests run as
//! spawned tasks and report back through an unbounded channel of
//! [`AppMessage`]s, which [`App::handle_message`] applies to the screen that
//! asked for them.

mod effects;
mod handlers;
mod messages;

pub use effects::{run_recipe_load, run_search, spawn_recipe_load, spawn_search};
pub use messages::AppMessage;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::RecipeApi;
use crate::navigation::{Navigator, Route, ScreenId};
use crate::screens::{HomeScreen, ResponseOrder, Screen};

/// Top-level application state.
pub struct App {
    /// Navigation stack; owns every mounted screen
    pub navigator: Navigator,
    /// Receiver for request results (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender cloned into every request task
    message_tx: mpsc::UnboundedSender<AppMessage>,
    api: RecipeApi,
    response_order: ResponseOrder,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed and the frame should be redrawn
    pub needs_redraw: bool,
}

impl App {
    /// Create the app with the search screen as root. Nothing is fetched
    /// until [`App::start`] runs inside a tokio runtime.
    pub fn new(api: RecipeApi, response_order: ResponseOrder) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            navigator: Navigator::new(Route::Home),
            message_rx: Some(message_rx),
            message_tx,
            api,
            response_order,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Run the mount effect of the root screen.
    pub fn start(&mut self) {
        let id = self.navigator.current().id;
        self.mount(id);
    }

    /// Navigate to `route` and run the new screen's mount effect.
    pub fn navigate(&mut self, route: Route) {
        let id = self.navigator.navigate(route);
        info!(route = route.name(), screen = %id, "Navigated");
        self.mount(id);
        self.mark_dirty();
    }

    /// Leave the current screen. The root screen cannot be left this way.
    pub fn back(&mut self) {
        if let Some(popped) = self.navigator.back() {
            info!(route = popped.route.name(), screen = %popped.id, "Screen unmounted");
            self.mark_dirty();
        }
    }

    /// Submit the search screen's current input as a new query.
    pub fn submit_search(&mut self) {
        let mounted = self.navigator.current_mut();
        let id = mounted.id;
        if let Screen::Home(home) = &mut mounted.screen {
            let request = home.submit();
            let handle = spawn_search(self.api.clone(), self.message_tx.clone(), id, request);
            home.effects_mut().track(&handle);
        }
    }

    /// Open the selected search result, if any.
    pub fn open_selected(&mut self) {
        let route = match &self.navigator.current().screen {
            Screen::Home(home) => home.open_selected(),
            Screen::Recipe(_) => None,
        };
        if let Some(route) = route {
            self.navigate(route);
        }
    }

    /// Apply a request result to the screen it belongs to.
    pub fn handle_message(&mut self, message: AppMessage) {
        let order = self.response_order;
        let Some(mounted) = self.navigator.get_mut(message.screen()) else {
            debug!(screen = %message.screen(), "Dropping result for unmounted screen");
            return;
        };

        match (message, &mut mounted.screen) {
            (AppMessage::SearchLoaded { ticket, results, .. }, Screen::Home(home)) => {
                let count = results.len();
                if home.apply_results(ticket, results, order) {
                    debug!(ticket, count, "Search results applied");
                } else {
                    debug!(ticket, "Discarded out-of-order search results");
                }
            }
            (AppMessage::RecipeLoaded { recipe, .. }, Screen::Recipe(screen)) => {
                debug!(recipe_id = recipe.id, "Recipe applied");
                screen.apply_recipe(recipe);
            }
            (message, _) => {
                debug!(?message, "Result does not match its screen");
            }
        }
        self.mark_dirty();
    }

    /// Whether the current screen still has requests in flight.
    pub fn has_pending_requests(&self) -> bool {
        self.navigator.current().screen.effects().pending() > 0
    }

    /// The search screen, when it is the current screen.
    pub fn home(&self) -> Option<&HomeScreen> {
        match &self.navigator.current().screen {
            Screen::Home(home) => Some(home),
            Screen::Recipe(_) => None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn mount(&mut self, id: ScreenId) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let Some(mounted) = self.navigator.get_mut(id) else {
            return;
        };

        match &mut mounted.screen {
            Screen::Home(home) => {
                let request = home.initial_load();
                let handle = spawn_search(api, tx, id, request);
                home.effects_mut().track(&handle);
            }
            Screen::Recipe(recipe) => {
                if let Some(recipe_id) = recipe.begin_load() {
                    let handle = spawn_recipe_load(api, tx, id, recipe_id);
                    recipe.effects_mut().track(&handle);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{Recipe, SearchResult};
    use std::sync::Arc;

    fn app_with(mock: &MockHttpClient, order: ResponseOrder) -> App {
        let api = RecipeApi::new(Arc::new(mock.clone()), "https://mock.test", "k");
        App::new(api, order)
    }

    fn recipe(id: u64) -> Recipe {
        serde_json::from_value(serde_json::json!({"id": id, "title": "R"})).unwrap()
    }

    fn loaded(id: u64) -> Vec<SearchResult> {
        vec![SearchResult::new(id, format!("Recipe {}", id))]
    }

    async fn next_message(app: &mut App) -> AppMessage {
        let rx = app.message_rx.as_mut().unwrap();
        tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_start_fetches_empty_query() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(serde_json::json!({
            "results": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]
        })));
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        app.start();

        let message = next_message(&mut app).await;
        app.handle_message(message);

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query_param("query").as_deref(), Some(""));
        let ids: Vec<u64> = app.home().unwrap().results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_open_selected_navigates_with_id() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(serde_json::json!({"id": 7})));
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        let home_id = app.navigator.current().id;
        app.handle_message(AppMessage::SearchLoaded {
            screen: home_id,
            ticket: 1,
            results: vec![SearchResult::new(3, "a"), SearchResult::new(7, "b")],
        });
        if let Screen::Home(home) = &mut app.navigator.current_mut().screen {
            home.select(1);
        }

        app.open_selected();

        assert_eq!(app.navigator.current().route, Route::Recipe { recipe_id: 7 });
        let message = next_message(&mut app).await;
        app.handle_message(message);
        match &app.navigator.current().screen {
            Screen::Recipe(screen) => assert!(screen.is_loaded()),
            other => panic!("Expected recipe screen, got {:?}", other),
        }
        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("/recipes/7/information"));
    }

    #[tokio::test]
    async fn test_result_for_unmounted_screen_is_dropped() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        let detail = app.navigator.navigate(Route::Recipe { recipe_id: 5 });
        app.back();

        app.handle_message(AppMessage::RecipeLoaded {
            screen: detail,
            recipe: recipe(5),
        });

        assert_eq!(app.navigator.depth(), 1);
        assert!(app.home().is_some());
    }

    #[tokio::test]
    async fn test_back_cancels_in_flight_detail_request() {
        let mock = MockHttpClient::new();
        mock.set_default_response(
            MockResponse::json(serde_json::json!({"id": 5})).after_millis(50),
        );
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        app.navigate(Route::Recipe { recipe_id: 5 });
        assert!(app.has_pending_requests());

        app.back();

        let rx = app.message_rx.as_mut().unwrap();
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(300), rx.recv()).await;
        assert!(waited.is_err(), "aborted request still delivered a result");
    }

    #[tokio::test]
    async fn test_stale_results_win_in_arrival_order() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        let home = app.navigator.current().id;

        app.handle_message(AppMessage::SearchLoaded { screen: home, ticket: 2, results: loaded(20) });
        app.handle_message(AppMessage::SearchLoaded { screen: home, ticket: 1, results: loaded(10) });

        assert_eq!(app.home().unwrap().results()[0].id, 10);
    }

    #[tokio::test]
    async fn test_stale_results_dropped_in_latest_request_order() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, ResponseOrder::LatestRequest);
        let home = app.navigator.current().id;

        app.handle_message(AppMessage::SearchLoaded { screen: home, ticket: 2, results: loaded(20) });
        app.handle_message(AppMessage::SearchLoaded { screen: home, ticket: 1, results: loaded(10) });

        assert_eq!(app.home().unwrap().results()[0].id, 20);
    }

    #[tokio::test]
    async fn test_mismatched_message_is_ignored() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, ResponseOrder::ArrivalOrder);
        let home = app.navigator.current().id;
        app.handle_message(AppMessage::RecipeLoaded { screen: home, recipe: recipe(1) });
        assert!(app.home().unwrap().results().is_empty());
    }
}
