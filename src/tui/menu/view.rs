use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::State;
use crate::config::DisplayConfig;
use crate::formatting::format_money;
use crate::types::SharedData;

/// Render the menu tab: items grouped by category, 86'd items dimmed
pub fn render_content(
    f: &mut Frame,
    area: Rect,
    state: &State,
    data: &SharedData,
    display: &DisplayConfig,
) {
    let mut lines = Vec::new();
    let mut last_category: Option<&str> = None;

    for (i, item) in data.menu.iter().enumerate() {
        if last_category != Some(item.category.as_str()) {
            if last_category.is_some() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", item.category),
                Style::default()
                    .fg(display.theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            )));
            last_category = Some(item.category.as_str());
        }

        let marker = if item.available { "  " } else { "86" };
        let row = format!(
            "   {:<24} {:>10}  {}",
            item.name,
            format_money(item.price_cents, &display.currency),
            marker,
        );
        let mut style = if item.available {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if state.subtab_focused && i == state.selected_index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(row, style)));
    }

    if data.menu.is_empty() {
        lines.push(Line::raw(" Menu not loaded yet"));
    }

    f.render_widget(Paragraph::new(lines), area);
}
