//! Recipe detail screen state.

use super::Effects;
use crate::html::strip_tags;
use crate::models::{Recipe, Step};

/// Tabs of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeTab {
    #[default]
    Overview,
    Instructions,
}

impl RecipeTab {
    pub const ALL: [RecipeTab; 2] = [RecipeTab::Overview, RecipeTab::Instructions];

    pub fn label(&self) -> &'static str {
        match self {
            RecipeTab::Overview => "Overview",
            RecipeTab::Instructions => "Instructions",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            RecipeTab::Overview => 0,
            RecipeTab::Instructions => 1,
        }
    }

    fn toggled(self) -> Self {
        match self {
            RecipeTab::Overview => RecipeTab::Instructions,
            RecipeTab::Instructions => RecipeTab::Overview,
        }
    }
}

/// Text shown on the overview tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview<'a> {
    pub title: &'a str,
    pub image: Option<&'a str>,
    /// Summary with markup removed
    pub summary: String,
}

/// Detail view for one recipe id.
///
/// Starts not-loaded, becomes loaded at most once. There is no reload path:
/// if the single fetch fails the screen stays on its loading text.
#[derive(Debug)]
pub struct RecipeScreen {
    recipe_id: u64,
    recipe: Option<Recipe>,
    load_started: bool,
    tab: RecipeTab,
    scroll: u16,
    effects: Effects,
}

impl RecipeScreen {
    pub fn new(recipe_id: u64) -> Self {
        Self {
            recipe_id,
            recipe: None,
            load_started: false,
            tab: RecipeTab::default(),
            scroll: 0,
            effects: Effects::default(),
        }
    }

    pub fn recipe_id(&self) -> u64 {
        self.recipe_id
    }

    /// Claim the mount fetch. Yields the id the first time only.
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.load_started {
            return None;
        }
        self.load_started = true;
        Some(self.recipe_id)
    }

    /// Store the fetched record.
    pub fn apply_recipe(&mut self, recipe: Recipe) {
        self.recipe = Some(recipe);
        self.scroll = 0;
    }

    pub fn is_loaded(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn overview(&self) -> Option<Overview<'_>> {
        self.recipe.as_ref().map(|recipe| Overview {
            title: &recipe.title,
            image: recipe.image.as_deref(),
            summary: strip_tags(&recipe.summary),
        })
    }

    /// First instruction group's steps; empty while not loaded.
    pub fn steps(&self) -> &[Step] {
        self.recipe
            .as_ref()
            .map(Recipe::first_steps)
            .unwrap_or(&[])
    }

    pub fn tab(&self) -> RecipeTab {
        self.tab
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.toggled();
        self.scroll = 0;
    }

    pub fn prev_tab(&mut self) {
        self.next_tab();
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut Effects {
        &mut self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe(value: serde_json::Value) -> Recipe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_begin_load_only_once() {
        let mut screen = RecipeScreen::new(7);
        assert_eq!(screen.begin_load(), Some(7));
        assert_eq!(screen.begin_load(), None);
    }

    #[test]
    fn test_not_loaded_state() {
        let screen = RecipeScreen::new(7);
        assert!(!screen.is_loaded());
        assert!(screen.overview().is_none());
        assert!(screen.steps().is_empty());
    }

    #[test]
    fn test_overview_strips_markup() {
        let mut screen = RecipeScreen::new(7);
        screen.apply_recipe(recipe(json!({
            "id": 7,
            "title": "Pasta",
            "image": "https://img/7.jpg",
            "summary": "<b>Tasty</b> and <i>quick</i>"
        })));

        let overview = screen.overview().unwrap();
        assert_eq!(overview.title, "Pasta");
        assert_eq!(overview.image, Some("https://img/7.jpg"));
        assert_eq!(overview.summary, "Tasty and quick");
    }

    #[test]
    fn test_steps_from_first_group() {
        let mut screen = RecipeScreen::new(7);
        screen.apply_recipe(recipe(json!({
            "id": 7,
            "analyzedInstructions": [{"steps": [
                {"number": 1, "step": "Boil water"},
                {"number": 2, "step": "Add pasta"}
            ]}]
        })));
        let steps: Vec<(u32, &str)> = screen
            .steps()
            .iter()
            .map(|s| (s.number, s.step.as_str()))
            .collect();
        assert_eq!(steps, vec![(1, "Boil water"), (2, "Add pasta")]);
    }

    #[test]
    fn test_empty_instructions() {
        let mut screen = RecipeScreen::new(7);
        screen.apply_recipe(recipe(json!({"id": 7, "analyzedInstructions": []})));
        assert!(screen.is_loaded());
        assert!(screen.steps().is_empty());
    }

    #[test]
    fn test_tab_switch_resets_scroll() {
        let mut screen = RecipeScreen::new(7);
        screen.scroll_down(5);
        screen.scroll_up(2);
        assert_eq!(screen.scroll(), 3);

        screen.next_tab();
        assert_eq!(screen.tab(), RecipeTab::Instructions);
        assert_eq!(screen.scroll(), 0);
        screen.prev_tab();
        assert_eq!(screen.tab(), RecipeTab::Overview);

        screen.scroll_up(10);
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = RecipeTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Instructions"]);
        assert_eq!(RecipeTab::Instructions.index(), 1);
    }
}
