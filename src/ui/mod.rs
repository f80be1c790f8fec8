//! Rendering.
//!
//! Views read screen state and never change it. [`render`] draws whichever
//! screen is on top of the navigation stack.

pub mod components;
pub mod helpers;
pub mod home;
pub mod recipe;
pub mod theme;

use ratatui::Frame;

use crate::app::App;
use crate::screens::Screen;

/// Draw the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match &app.navigator.current().screen {
        Screen::Home(home) => home::render(frame, area, home),
        Screen::Recipe(recipe) => recipe::render(frame, area, recipe),
    }
}
