/// Helpers for rendering widgets into off-screen buffers in tests

use ratatui::{buffer::Buffer, layout::Rect};

use super::RenderableWidget;
use crate::config::{Config, DisplayConfig};

/// Display config with unicode box characters and default theme
pub fn test_display() -> DisplayConfig {
    DisplayConfig::from_config(&Config::default())
}

/// Display config restricted to ASCII box characters
pub fn test_display_ascii() -> DisplayConfig {
    let mut config = Config::default();
    config.use_unicode = false;
    DisplayConfig::from_config(&config)
}

pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_display(widget, width, height, &test_display())
}

pub fn render_widget_with_display(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    display: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, display);
    buf
}

/// The text content of one buffer row, padding included
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// Full buffer content as newline-joined rows
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    (0..area.height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct Probe;

    impl RenderableWidget for Probe {
        fn render(&self, area: Rect, buf: &mut Buffer, _display: &DisplayConfig) {
            buf.set_string(area.x, area.y, "probe", Style::default());
        }
    }

    #[test]
    fn test_render_widget_into_buffer() {
        let buf = render_widget(&Probe, 8, 2);
        assert_eq!(buffer_line(&buf, 0), "probe   ");
        assert_eq!(buffer_line(&buf, 1), "        ");
    }

    #[test]
    fn test_buffer_to_string_joins_rows() {
        let buf = render_widget(&Probe, 6, 2);
        assert_eq!(buffer_to_string(&buf), "probe \n      ");
    }

    #[test]
    fn test_display_configs_differ_in_box_chars() {
        assert_eq!(test_display().box_chars.vertical, "│");
        assert_eq!(test_display_ascii().box_chars.vertical, "|");
    }
}
