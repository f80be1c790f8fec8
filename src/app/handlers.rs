//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::screens::{HomeFocus, Screen};

/// Lines moved by PageUp / PageDown on the detail screen.
const PAGE_LINES: u16 = 10;

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if matches!(self.navigator.current().screen, Screen::Home(_)) {
            self.handle_home_key(key);
        } else {
            self.handle_recipe_key(key);
        }
    }

    /// Handle bracketed paste. Text goes into the search input when it has
    /// focus; line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) {
        let Screen::Home(home) = &mut self.navigator.current_mut().screen else {
            return;
        };
        if home.focus() != HomeFocus::Search {
            return;
        }
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' => home.insert_char(' '),
                c => home.insert_char(c),
            }
        }
        self.mark_dirty();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let Screen::Home(home) = &mut self.navigator.current_mut().screen else {
            return;
        };

        match home.focus() {
            HomeFocus::Search => match key.code {
                KeyCode::Enter => self.submit_search(),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    home.clear_query()
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    home.insert_char(c)
                }
                KeyCode::Backspace => home.backspace(),
                KeyCode::Tab | KeyCode::Down | KeyCode::Esc => {
                    home.set_focus(HomeFocus::Results)
                }
                _ => {}
            },
            HomeFocus::Results => match key.code {
                KeyCode::Enter => self.open_selected(),
                KeyCode::Up | KeyCode::Char('k') => home.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => home.select_next(),
                KeyCode::Home | KeyCode::Char('g') => home.select(0),
                KeyCode::End | KeyCode::Char('G') => {
                    let last = home.results().len().saturating_sub(1);
                    home.select(last);
                }
                KeyCode::Tab | KeyCode::Char('/') => home.set_focus(HomeFocus::Search),
                KeyCode::Esc | KeyCode::Char('q') => self.quit(),
                _ => {}
            },
        }
    }

    fn handle_recipe_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                self.back();
                return;
            }
            _ => {}
        }

        let Screen::Recipe(screen) = &mut self.navigator.current_mut().screen else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => screen.next_tab(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => screen.prev_tab(),
            KeyCode::Down | KeyCode::Char('j') => screen.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => screen.scroll_up(1),
            KeyCode::PageDown => screen.scroll_down(PAGE_LINES),
            KeyCode::PageUp => screen.scroll_up(PAGE_LINES),
            _ => {}
        }
    }
}
