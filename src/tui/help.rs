use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::DisplayConfig;

const BINDINGS: [(&str, &str); 14] = [
    ("1-5", "jump to tab"),
    ("Tab / Shift-Tab", "next / previous tab"),
    ("Down / j", "enter list, move down"),
    ("Up / k", "move up, exit list at the top"),
    ("Enter", "advance order / toggle item"),
    ("d", "open the date range selector (Orders)"),
    ("r", "refresh now"),
    ("q", "quit"),
    ("", ""),
    ("Enter", "  pick start, then end"),
    ("a", "  apply the range and close"),
    ("c", "  clear the selection"),
    ("[ / ]", "  previous / next month"),
    ("Esc / outside click", "  close without applying"),
];

pub fn render_content(f: &mut Frame, area: Rect, display: &DisplayConfig) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Key bindings",
            Style::default()
                .fg(display.theme.accent_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for (keys, what) in BINDINGS {
        if keys.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                " While the date range selector is open:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<22}", keys),
                Style::default().fg(display.theme.today_fg),
            ),
            Span::raw(what.to_string()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}
