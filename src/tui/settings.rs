use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config;
use crate::config::DisplayConfig;
use crate::types::SharedData;

/// Column width for setting keys
const KEY_WIDTH: usize = 20;

/// Render the settings tab: the effective configuration, read-only
pub fn render_content(f: &mut Frame, area: Rect, data: &SharedData, display: &DisplayConfig) {
    let cfg = &data.config;
    let rows: Vec<(&str, String)> = vec![
        ("Log level", cfg.log_level.clone()),
        ("Log file", cfg.log_file.clone()),
        ("Refresh interval", format!("{}s", cfg.refresh_interval)),
        ("Date format", cfg.date_format.clone()),
        ("Currency", cfg.currency.clone()),
        ("Use Unicode", cfg.use_unicode.to_string()),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            " Configuration",
            Style::default()
                .fg(display.theme.accent_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for (key, value) in rows {
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<width$}", key, width = KEY_WIDTH)),
            Span::styled(value, Style::default().fg(display.theme.today_fg)),
        ]));
    }
    lines.push(Line::raw(""));
    match config::get_config_path() {
        Some(path) => lines.push(Line::raw(format!(" File: {}", path.display()))),
        None => lines.push(Line::raw(" File: (no config directory)")),
    }
    lines.push(Line::raw(" Edit the file and restart to change settings"));

    f.render_widget(Paragraph::new(lines), area);
}
