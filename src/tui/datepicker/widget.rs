/// Calendar popover widget: bordered month view with weekday header, six
/// week rows, the selection summary, and a key hint line.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::grid::MonthGrid;
use super::selection::DayRole;
use super::DatePicker;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Outer panel size, border included
pub const PANEL_WIDTH: u16 = 30;
pub const PANEL_HEIGHT: u16 = 12;

const CELL_WIDTH: u16 = 4;
/// Week rows start this many rows below the panel top (border, title, header)
const GRID_TOP_OFFSET: u16 = 3;

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa ";

pub struct CalendarWidget<'a> {
    picker: &'a DatePicker,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(picker: &'a DatePicker) -> Self {
        CalendarWidget { picker }
    }

    fn day_style(&self, date: NaiveDate, is_current_month: bool, display: &DisplayConfig) -> Style {
        let theme = &display.theme;
        let role_style = match self.picker.classify(date) {
            DayRole::SingleDay | DayRole::RangeStart | DayRole::RangeEnd => Style::default()
                .fg(theme.accent_fg)
                .add_modifier(Modifier::BOLD),
            DayRole::InRange => Style::default().fg(theme.range_fg),
            DayRole::NotSelectable => Style::default().fg(ratatui::style::Color::DarkGray),
            DayRole::Today => Style::default()
                .fg(theme.today_fg)
                .add_modifier(Modifier::UNDERLINED),
            DayRole::Normal => {
                if is_current_month {
                    Style::default()
                } else {
                    Style::default().fg(ratatui::style::Color::DarkGray)
                }
            }
        };
        if date == self.picker.cursor() {
            role_style.add_modifier(Modifier::REVERSED)
        } else {
            role_style
        }
    }
}

impl RenderableWidget for CalendarWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        if area.width < PANEL_WIDTH || area.height < PANEL_HEIGHT {
            return;
        }
        let base = Style::default();
        let chars = &display.box_chars;
        let inner_width = (PANEL_WIDTH - 2) as usize;

        // Border
        let top = format!(
            "{}{}{}",
            chars.top_left,
            chars.horizontal.repeat(inner_width),
            chars.top_right
        );
        let bottom = format!(
            "{}{}{}",
            chars.bottom_left,
            chars.horizontal.repeat(inner_width),
            chars.bottom_right
        );
        buf.set_string(area.x, area.y, &top, base);
        buf.set_string(area.x, area.y + PANEL_HEIGHT - 1, &bottom, base);
        for y in 1..PANEL_HEIGHT - 1 {
            buf.set_string(area.x, area.y + y, &chars.vertical, base);
            buf.set_string(area.x + PANEL_WIDTH - 1, area.y + y, &chars.vertical, base);
        }
        for y in 1..PANEL_HEIGHT - 1 {
            buf.set_string(area.x + 1, area.y + y, " ".repeat(inner_width), base);
        }

        // Title: displayed month, centered
        let label = self.picker.view().label();
        let pad = inner_width.saturating_sub(label.len()) / 2;
        buf.set_string(
            area.x + 1 + pad as u16,
            area.y + 1,
            &label,
            base.add_modifier(Modifier::BOLD),
        );

        // Weekday header
        buf.set_string(
            area.x + 1,
            area.y + 2,
            WEEKDAY_HEADER,
            Style::default().fg(display.theme.today_fg),
        );

        // Six week rows
        for (i, cell) in self.picker.grid().cells().iter().enumerate() {
            let col = (i % 7) as u16;
            let row = (i / 7) as u16;
            let x = area.x + 1 + col * CELL_WIDTH;
            let y = area.y + GRID_TOP_OFFSET + row;
            let text = format!("{:>3} ", cell.date.day());
            buf.set_string(x, y, text, self.day_style(cell.date, cell.is_current_month, display));
        }

        // Summary and hints
        let summary = self.picker.summary(&display.date_format);
        let clipped: String = summary.chars().take(inner_width).collect();
        buf.set_string(area.x + 1, area.y + GRID_TOP_OFFSET + 6, clipped, base);
        buf.set_string(
            area.x + 1,
            area.y + GRID_TOP_OFFSET + 7,
            "Enter pick  a apply  c clear",
            Style::default().fg(ratatui::style::Color::DarkGray),
        );
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(PANEL_WIDTH)
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(PANEL_HEIGHT)
    }
}

/// Map a pointer position inside the popover panel to the date of the day
/// cell under it, if any.
pub fn date_at(panel: Rect, grid: &MonthGrid, column: u16, row: u16) -> Option<NaiveDate> {
    let grid_x = panel.x + 1;
    let grid_y = panel.y + GRID_TOP_OFFSET;
    if column < grid_x || row < grid_y {
        return None;
    }
    let col = (column - grid_x) / CELL_WIDTH;
    let week = row - grid_y;
    if col >= 7 || week >= 6 {
        return None;
    }
    let idx = (week * 7 + col) as usize;
    grid.cells().get(idx).map(|cell| cell.date)
}
