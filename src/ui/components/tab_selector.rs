//! Tab Selector Component
//!
//! A horizontal tab strip. Uses `▶` marker for the selected tab and short
//! labels on narrow terminals.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Terminals narrower than this use short labels.
pub const COMPACT_WIDTH: u16 = 40;

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Create a new tab item with the same label for both normal and compact modes
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    /// Create a new tab item with different labels for normal and compact modes
    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

/// Render a horizontal tab selector for a strip `width` columns wide.
///
/// # Example
/// ```ignore
/// let items = vec![TabItem::new("Overview"), TabItem::with_short_label("Instructions", "Steps")];
/// let line = render_tab_selector(&items, 0, area.width);
/// ```
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, width: u16) -> Line<'static> {
    let compact = width < COMPACT_WIDTH;
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if compact { item.short_label } else { item.label };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if compact { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
