/// Bottom status bar: a rule line, then a status/error message on the left
/// and the refresh countdown on the right.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub last_refresh: Option<SystemTime>,
    pub refresh_interval: u32,
}

impl StatusBar {
    fn countdown_text(&self) -> String {
        let Some(refresh_time) = self.last_refresh else {
            return "Loading...".to_string();
        };
        match SystemTime::now().duration_since(refresh_time) {
            Ok(elapsed) => {
                let remaining = self.refresh_interval.saturating_sub(elapsed.as_secs() as u32);
                if remaining > 0 {
                    format!("Refresh in {}s", remaining)
                } else {
                    "Refreshing...".to_string()
                }
            }
            Err(_) => "Refresh in ?s".to_string(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let base = Style::default();
        let right = area.x + area.width;

        let countdown = self.countdown_text();
        // Rule with a downward connector above the countdown column
        let divider = right.saturating_sub(countdown.width() as u16 + 2);
        for col in area.x..right {
            buf.set_string(col, area.y, &display.box_chars.horizontal, base);
        }
        if divider > area.x {
            buf.set_string(divider, area.y, &display.box_chars.top_junction, base);
        }

        let text_y = area.y + 1;
        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(display.theme.error_fg)
            } else {
                base
            };
            let text = if self.is_error {
                format!(" ERROR: {}", message)
            } else {
                format!(" {}", message)
            };
            let budget = divider.saturating_sub(area.x) as usize;
            let clipped: String = text.chars().take(budget).collect();
            buf.set_string(area.x, text_y, clipped, style);
        }
        if divider > area.x {
            buf.set_string(divider, text_y, &display.box_chars.vertical, base);
        }
        buf.set_string(divider + 2, text_y, &countdown, base);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;
    use std::time::Duration;

    #[test]
    fn test_loading_before_first_refresh() {
        let widget = StatusBar {
            message: None,
            is_error: false,
            last_refresh: None,
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 40, 2);
        assert!(buffer_line(&buf, 1).contains("Loading..."));
    }

    #[test]
    fn test_countdown_shown_after_refresh() {
        let widget = StatusBar {
            message: None,
            is_error: false,
            last_refresh: Some(SystemTime::now()),
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 40, 2);
        assert!(buffer_line(&buf, 1).contains("Refresh in"));
    }

    #[test]
    fn test_refreshing_when_interval_elapsed() {
        let widget = StatusBar {
            message: None,
            is_error: false,
            last_refresh: SystemTime::now().checked_sub(Duration::from_secs(120)),
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 40, 2);
        assert!(buffer_line(&buf, 1).contains("Refreshing..."));
    }

    #[test]
    fn test_message_rendered_left() {
        let widget = StatusBar {
            message: Some("Range applied".to_string()),
            is_error: false,
            last_refresh: None,
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 50, 2);
        assert!(buffer_line(&buf, 1).starts_with(" Range applied"));
    }

    #[test]
    fn test_error_message_prefixed_and_styled() {
        let widget = StatusBar {
            message: Some("backend unreachable".to_string()),
            is_error: true,
            last_refresh: None,
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 60, 2);
        let display = test_display();
        assert!(buffer_line(&buf, 1).contains("ERROR: backend unreachable"));
        assert_eq!(buf[(1, 1)].fg, display.theme.error_fg);
    }

    #[test]
    fn test_rule_connector_above_divider() {
        let widget = StatusBar {
            message: None,
            is_error: false,
            last_refresh: None,
            refresh_interval: 30,
        };
        let buf = render_widget(&widget, 40, 2);
        let rule = buffer_line(&buf, 0);
        let text = buffer_line(&buf, 1);
        let divider = text.find('│').unwrap();
        assert_eq!(rule.chars().nth(divider), Some('┬'));
    }
}
