//! Search screen view: query input above a scrollable result list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::screens::{HomeFocus, HomeScreen};

/// Placeholder shown while the query is empty.
pub const PLACEHOLDER: &str = "Search recipes...";

/// One rendered list entry, keyed by the result's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow<'a> {
    pub id: u64,
    pub title: &'a str,
    pub image: Option<&'a str>,
}

/// Rows for the result list, in response order.
pub fn result_rows(home: &HomeScreen) -> Vec<ResultRow<'_>> {
    home.results()
        .iter()
        .map(|item| ResultRow {
            id: item.id,
            title: &item.title,
            image: item.image.as_deref(),
        })
        .collect()
}

/// Render the search screen into `area`.
pub fn render(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], home);
    render_search_input(frame, chunks[1], home);
    render_results(frame, chunks[2], home);
    render_hints(frame, chunks[3], home);
}

fn render_header(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let count = home.results().len();
    let line = Line::from(vec![
        Span::styled(
            " recipes",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", count), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_search_input(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let focused = home.focus() == HomeFocus::Search;
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let content = if home.query().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM)))
    } else {
        Line::from(home.query().to_string())
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && inner.width > 0 {
        let offset = (home.query().width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

fn render_results(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let rows = result_rows(home);
    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No recipes to show",
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let title_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut lines = vec![Line::from(truncate_to_width(row.title, title_width))];
            if let Some(image) = row.image {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(image, title_width),
                    Style::default().fg(COLOR_DIM),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let focused = home.focus() == HomeFocus::Results;
    let highlight = if focused {
        Style::default()
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(home.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_hints(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let hint = match home.focus() {
        HomeFocus::Search => " enter search · tab results · ctrl+c quit",
        HomeFocus::Results => " enter open · j/k move · / search · q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        area,
    );
}
