use ratatui::{layout::Rect, Frame};

use super::app::{AppState, CurrentTab};
use super::widgets::{RenderableWidget, StatusBar, TabBar};
use super::{fleet, help, menu, orders, settings};
use crate::config::DisplayConfig;
use crate::types::SharedData;

const TAB_BAR_HEIGHT: u16 = 2;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Draw one frame: tab bar, active tab content, status bar. The popover, when
/// open, is drawn last by the orders view so it sits above the content.
pub fn draw(f: &mut Frame, app: &mut AppState, data: &SharedData, display: &DisplayConfig) {
    let area = f.area();
    if area.height < TAB_BAR_HEIGHT + STATUS_BAR_HEIGHT + 1 {
        return;
    }

    let tab_area = Rect { height: TAB_BAR_HEIGHT, ..area };
    let status_area = Rect {
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        height: STATUS_BAR_HEIGHT,
        ..area
    };
    let content_area = Rect {
        y: area.y + TAB_BAR_HEIGHT,
        height: area.height - TAB_BAR_HEIGHT - STATUS_BAR_HEIGHT,
        ..area
    };

    TabBar::new(app.current_tab, !app.subtab_focused()).render(tab_area, f.buffer_mut(), display);

    match app.current_tab {
        CurrentTab::Orders => {
            orders::view::render_content(f, content_area, &mut app.orders, data, display)
        }
        CurrentTab::Menu => menu::view::render_content(f, content_area, &app.menu, data, display),
        CurrentTab::Fleet => {
            fleet::view::render_content(f, content_area, &app.fleet, data, display)
        }
        CurrentTab::Help => help::render_content(f, content_area, display),
        CurrentTab::Settings => settings::render_content(f, content_area, data, display),
    }

    let status = StatusBar {
        message: data.error_message.clone(),
        is_error: data.error_message.is_some(),
        last_refresh: data.last_refresh,
        refresh_interval: data.config.refresh_interval,
    };
    status.render(status_area, f.buffer_mut(), display);
}
