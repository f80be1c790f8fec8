//! Request tasks.
//!
//! Each fetch runs as its own tokio task. On success the task posts an
//! [`AppMessage`] back to the UI loop, which owns all screen state. On failure
//! the task logs one error event and ends; nothing reaches the screen.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::AppMessage;
use crate::api::RecipeApi;
use crate::navigation::ScreenId;
use crate::screens::SearchRequest;

/// Run one search and deliver its results.
pub async fn run_search(
    api: RecipeApi,
    tx: UnboundedSender<AppMessage>,
    screen: ScreenId,
    request: SearchRequest,
) {
    debug!(%screen, ticket = request.ticket, query = %request.query, "Search request issued");

    match api.search(&request.query).await {
        Ok(results) => {
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(AppMessage::SearchLoaded {
                screen,
                ticket: request.ticket,
                results,
            });
        }
        Err(err) => {
            error!(
                %screen,
                ticket = request.ticket,
                code = err.error_code(),
                error = %err,
                "Search request failed"
            );
        }
    }
}

/// Run the detail fetch for `recipe_id` and deliver the record.
pub async fn run_recipe_load(
    api: RecipeApi,
    tx: UnboundedSender<AppMessage>,
    screen: ScreenId,
    recipe_id: u64,
) {
    debug!(%screen, recipe_id, "Recipe request issued");

    match api.recipe_information(recipe_id).await {
        Ok(recipe) => {
            let _ = tx.send(AppMessage::RecipeLoaded { screen, recipe });
        }
        Err(err) => {
            error!(
                %screen,
                recipe_id,
                code = err.error_code(),
                error = %err,
                "Recipe request failed"
            );
        }
    }
}

/// Spawn [`run_search`] on the current runtime.
pub fn spawn_search(
    api: RecipeApi,
    tx: UnboundedSender<AppMessage>,
    screen: ScreenId,
    request: SearchRequest,
) -> JoinHandle<()> {
    tokio::spawn(run_search(api, tx, screen, request))
}

/// Spawn [`run_recipe_load`] on the current runtime.
pub fn spawn_recipe_load(
    api: RecipeApi,
    tx: UnboundedSender<AppMessage>,
    screen: ScreenId,
    recipe_id: u64,
) -> JoinHandle<()> {
    tokio::spawn(run_recipe_load(api, tx, screen, recipe_id))
}
