//! Push-style navigation stack.
//!
//! Two routes exist: `Home` (search) and `Recipe` (detail). Navigating pushes
//! a fresh screen instance; going back pops and unmounts the top screen. Each
//! mounted screen gets a [`ScreenId`] so late async results can be routed to
//! the instance that asked for them, or dropped if it is gone.

use std::fmt;

use crate::screens::{HomeScreen, RecipeScreen, Screen};

/// A declared route and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Recipe { recipe_id: u64 },
}

impl Route {
    /// Declared route name.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Recipe { .. } => "Recipe",
        }
    }
}

/// Identity of one mounted screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen-{}", self.0)
    }
}

/// A screen on the stack together with the route that created it.
#[derive(Debug)]
pub struct MountedScreen {
    pub id: ScreenId,
    pub route: Route,
    pub screen: Screen,
}

/// Navigation stack. The root screen is never popped.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<MountedScreen>,
    next_id: u64,
}

impl Navigator {
    /// Create a stack with `root` mounted.
    pub fn new(root: Route) -> Self {
        let mut navigator = Self {
            stack: Vec::new(),
            next_id: 1,
        };
        navigator.navigate(root);
        navigator
    }

    /// Push a new instance of `route` and return its id.
    pub fn navigate(&mut self, route: Route) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;

        let screen = match route {
            Route::Home => Screen::Home(HomeScreen::new()),
            Route::Recipe { recipe_id } => Screen::Recipe(RecipeScreen::new(recipe_id)),
        };
        self.stack.push(MountedScreen { id, route, screen });
        id
    }

    /// Pop the top screen. Returns `None` when only the root is left.
    ///
    /// The popped screen's in-flight work is cancelled before it is returned.
    pub fn back(&mut self) -> Option<MountedScreen> {
        if self.stack.len() <= 1 {
            return None;
        }
        let mut popped = self.stack.pop()?;
        popped.screen.unmount();
        Some(popped)
    }

    /// Top of the stack.
    pub fn current(&self) -> &MountedScreen {
        // The root is pushed in `new` and never popped.
        &self.stack[self.stack.len() - 1]
    }

    /// Mutable top of the stack.
    pub fn current_mut(&mut self) -> &mut MountedScreen {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Mounted screen with `id`, if still on the stack.
    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut MountedScreen> {
        self.stack.iter_mut().find(|mounted| mounted.id == id)
    }

    /// Whether `id` is still mounted.
    pub fn is_mounted(&self, id: ScreenId) -> bool {
        self.stack.iter().any(|mounted| mounted.id == id)
    }

    /// Number of screens on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Routes from root to top.
    pub fn routes(&self) -> Vec<Route> {
        self.stack.iter().map(|mounted| mounted.route).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Home.name(), "Home");
        assert_eq!(Route::Recipe { recipe_id: 7 }.name(), "Recipe");
    }

    #[test]
    fn test_new_mounts_root() {
        let nav = Navigator::new(Route::Home);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().route, Route::Home);
        assert!(matches!(nav.current().screen, Screen::Home(_)));
    }

    #[test]
    fn test_navigate_pushes_recipe_with_id() {
        let mut nav = Navigator::new(Route::Home);
        let id = nav.navigate(Route::Recipe { recipe_id: 7 });

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().id, id);
        match &nav.current().screen {
            Screen::Recipe(recipe) => assert_eq!(recipe.recipe_id(), 7),
            other => panic!("Expected recipe screen, got {:?}", other),
        }
        assert_eq!(
            nav.routes(),
            vec![Route::Home, Route::Recipe { recipe_id: 7 }]
        );
    }

    #[test]
    fn test_screen_ids_are_unique() {
        let mut nav = Navigator::new(Route::Home);
        let root = nav.current().id;
        let first = nav.navigate(Route::Recipe { recipe_id: 1 });
        nav.back();
        let second = nav.navigate(Route::Recipe { recipe_id: 1 });
        assert_ne!(root, first);
        assert_ne!(first, second);
        assert!(!nav.is_mounted(first));
        assert!(nav.is_mounted(second));
    }

    #[test]
    fn test_back_never_pops_root() {
        let mut nav = Navigator::new(Route::Home);
        assert!(nav.back().is_none());
        assert_eq!(nav.depth(), 1);

        nav.navigate(Route::Recipe { recipe_id: 3 });
        let popped = nav.back().expect("detail screen should pop");
        assert_eq!(popped.route, Route::Recipe { recipe_id: 3 });
        assert_eq!(nav.current().route, Route::Home);
    }

    #[test]
    fn test_get_mut_finds_buried_screen() {
        let mut nav = Navigator::new(Route::Home);
        let home = nav.current().id;
        nav.navigate(Route::Recipe { recipe_id: 9 });
        assert!(nav.get_mut(home).is_some());
        assert_eq!(format!("{}", home), "screen-1");
    }
}
