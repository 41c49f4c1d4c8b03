use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::State;
use crate::config::DisplayConfig;
use crate::formatting::format_date;
use crate::types::SharedData;

/// Render the fleet tab: delivery slots in the applied range, full slots
/// flagged
pub fn render_content(
    f: &mut Frame,
    area: Rect,
    state: &State,
    data: &SharedData,
    display: &DisplayConfig,
) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {:<12} {:<13} {:<8} {:>8}",
            "Date", "Window", "Courier", "Load"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let mut last_date = None;
    for (i, slot) in data.slots.iter().enumerate() {
        if last_date.is_some() && last_date != Some(slot.date) {
            lines.push(Line::raw(""));
        }
        last_date = Some(slot.date);

        let load = format!("{}/{}", slot.booked, slot.capacity);
        let row = format!(
            " {:<12} {:<13} {:<8} {:>8}{}",
            format_date(slot.date, &display.date_format),
            slot.window,
            slot.courier,
            load,
            if slot.is_full() { "  FULL" } else { "" },
        );
        let mut style = if slot.is_full() {
            Style::default().fg(display.theme.error_fg)
        } else if slot.booked == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        if state.subtab_focused && i == state.selected_index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(row, style)));
    }

    if data.slots.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(" No delivery slots in the selected range"));
    }

    f.render_widget(Paragraph::new(lines), area);
}
