use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::State;
use crate::config::DisplayConfig;
use crate::formatting::{format_date, format_date_range, format_money};
use crate::tui::datepicker::widget::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::tui::datepicker::{anchor, CalendarWidget};
use crate::tui::widgets::RenderableWidget;
use crate::types::{OrderStatus, SharedData};

/// Render the orders tab. Records the trigger and popover areas on the state
/// so the mouse handler can hit-test the next event against them.
pub fn render_content(
    f: &mut Frame,
    area: Rect,
    state: &mut State,
    data: &SharedData,
    display: &DisplayConfig,
) {
    if area.width == 0 || area.height == 0 {
        state.trigger_area = None;
        state.popover_area = None;
        return;
    }

    let (start, end) = data.range;
    let trigger_label = format!(
        " Range: {} [d]",
        format_date_range(start, end, &display.date_format)
    );
    let trigger = Rect {
        x: area.x,
        y: area.y,
        width: (trigger_label.width() as u16).min(area.width),
        height: 1,
    };
    state.trigger_area = Some(trigger);

    let trigger_style = if state.picker.is_some() {
        Style::default().fg(display.theme.accent_fg)
    } else {
        Style::default()
    };

    let mut lines = vec![
        Line::from(Span::styled(trigger_label, trigger_style)),
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                " {:<6} {:<12} {:<18} {:>5} {:>10}  {}",
                "Order", "Placed", "Customer", "Items", "Total", "Status"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for (i, order) in data.orders.iter().enumerate() {
        let row = format!(
            " #{:<5} {:<12} {:<18} {:>5} {:>10}  {}",
            order.id,
            format_date(order.placed, &display.date_format),
            order.customer,
            order.item_count,
            format_money(order.total_cents, &display.currency),
            order.status.label(),
        );
        let mut style = status_style(order.status);
        if state.subtab_focused && i == state.selected_index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(row, style)));
    }

    if data.orders.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(" No orders in the selected range"));
    }

    f.render_widget(Paragraph::new(lines), area);

    if let Some(picker) = &state.picker {
        let panel = anchor(trigger, PANEL_WIDTH, PANEL_HEIGHT, f.area());
        state.popover_area = Some(panel);
        CalendarWidget::new(picker).render(panel, f.buffer_mut(), display);
    } else {
        state.popover_area = None;
    }
}

fn status_style(status: OrderStatus) -> Style {
    match status {
        OrderStatus::Cancelled => Style::default().fg(Color::DarkGray),
        OrderStatus::Delivered => Style::default().fg(Color::Green),
        OrderStatus::Ready | OrderStatus::OutForDelivery => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::datepicker::{DatePicker, PickerConfig};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn draw(state: &mut State, data: &SharedData) -> Terminal<TestBackend> {
        let display = DisplayConfig::from_config(&data.config);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render_content(f, f.area(), state, data, &display))
            .unwrap();
        terminal
    }

    #[test]
    fn test_records_trigger_area() {
        let mut state = State::new();
        let data = SharedData::new(Config::default(), d(2025, 2, 10));
        draw(&mut state, &data);

        let trigger = state.trigger_area.unwrap();
        assert_eq!(trigger.y, 0);
        assert!(trigger.width > 0);
        assert!(state.popover_area.is_none());
    }

    #[test]
    fn test_records_popover_area_when_open() {
        let mut state = State::new();
        let data = SharedData::new(Config::default(), d(2025, 2, 10));
        state.picker = Some(DatePicker::new(PickerConfig::new(data.today)));
        draw(&mut state, &data);

        let panel = state.popover_area.unwrap();
        assert_eq!(panel.width, PANEL_WIDTH);
        assert_eq!(panel.height, PANEL_HEIGHT);
        // Anchored below the trigger line
        assert_eq!(panel.y, state.trigger_area.unwrap().y + 1);
    }

    #[test]
    fn test_popover_area_cleared_after_close() {
        let mut state = State::new();
        let data = SharedData::new(Config::default(), d(2025, 2, 10));
        state.picker = Some(DatePicker::new(PickerConfig::new(data.today)));
        draw(&mut state, &data);
        assert!(state.popover_area.is_some());

        state.close_picker();
        draw(&mut state, &data);
        assert!(state.popover_area.is_none());
    }

    #[test]
    fn test_trigger_shows_applied_range() {
        let mut state = State::new();
        let data = SharedData::new(Config::default(), d(2025, 2, 10));
        let terminal = draw(&mut state, &data);

        let buf = terminal.backend().buffer();
        let line: String = (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.contains("Range: 2025-02-04 - 2025-02-10 [d]"));
    }
}
