/// Top navigation bar: tab labels over a separator rule, with connectors
/// dropped under each label gap.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::app::CurrentTab;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct TabBar {
    pub current: CurrentTab,
    /// Whether keyboard focus is on the tab bar (content unfocused)
    pub focused: bool,
}

impl TabBar {
    pub fn new(current: CurrentTab, focused: bool) -> Self {
        TabBar { current, focused }
    }

    fn base_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(ratatui::style::Color::DarkGray)
        }
    }

    fn label_style(&self, tab: CurrentTab, display: &DisplayConfig) -> Style {
        if tab != self.current {
            return self.base_style();
        }
        if self.focused {
            self.base_style().fg(display.theme.accent_fg)
        } else {
            self.base_style().fg(display.theme.unfocused_accent_fg())
        }
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let base = self.base_style();
        let right = area.x + area.width;

        // Label row, tracking which columns carry a separator
        let mut x = area.x;
        let mut separator_cols = Vec::new();
        for (i, tab) in CurrentTab::all().iter().enumerate() {
            if i > 0 {
                if x + 3 > right {
                    break;
                }
                separator_cols.push(x + 1);
                buf.set_string(x, area.y, " ", base);
                buf.set_string(x + 1, area.y, &display.box_chars.vertical, base);
                buf.set_string(x + 2, area.y, " ", base);
                x += 3;
            }
            let label = tab.title();
            if x >= right {
                break;
            }
            buf.set_string(x, area.y, label, self.label_style(*tab, display));
            x += label.width() as u16;
        }

        // Separator rule with a connector below every label gap
        let rule_y = area.y + 1;
        for col in area.x..right {
            buf.set_string(col, rule_y, &display.box_chars.horizontal, base);
        }
        for col in separator_cols {
            buf.set_string(col, rule_y, &display.box_chars.connector, base);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
