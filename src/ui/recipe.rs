//! Recipe detail view: tab strip plus the active tab's body.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_STEP_NUMBER, COLOR_TITLE};
use crate::models::Step;
use crate::screens::{Overview, RecipeScreen, RecipeTab};

/// Text shown until the detail record arrives.
pub const LOADING_TEXT: &str = "Loading...";

/// Render the detail screen into `area`.
pub fn render(frame: &mut Frame, area: Rect, screen: &RecipeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let tabs = [
        TabItem::new(RecipeTab::Overview.label()),
        TabItem::with_short_label(RecipeTab::Instructions.label(), "Steps"),
    ];
    frame.render_widget(
        Paragraph::new(render_tab_selector(&tabs, screen.tab().index(), area.width)),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = match screen.overview() {
        None => vec![Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(COLOR_DIM),
        ))],
        Some(overview) => match screen.tab() {
            RecipeTab::Overview => overview_lines(&overview),
            RecipeTab::Instructions => instruction_lines(screen.steps()),
        },
    };

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((screen.scroll(), 0));
    frame.render_widget(body, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " tab switch · j/k scroll · esc back",
            Style::default().fg(COLOR_DIM),
        )),
        chunks[2],
    );
}

/// Title, image reference and plain-text summary.
pub fn overview_lines(overview: &Overview<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        overview.title.to_string(),
        Style::default()
            .fg(COLOR_TITLE)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(image) = overview.image {
        lines.push(Line::from(Span::styled(
            format!("image: {}", image),
            Style::default().fg(COLOR_DIM),
        )));
    }

    lines.push(Line::default());
    lines.extend(
        overview
            .summary
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    lines
}

/// One line per step: highlighted number, then the step text.
pub fn instruction_lines(steps: &[Step]) -> Vec<Line<'static>> {
    if steps.is_empty() {
        return vec![Line::from(Span::styled(
            "No instructions",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    steps
        .iter()
        .map(|step| {
            Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", step.number),
                    Style::default()
                        .fg(COLOR_STEP_NUMBER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(step.step.clone()),
            ])
        })
        .collect()
}
