use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use super::State;
use crate::formatting::format_date_range;
use crate::provider::MerchantDataProvider;
use crate::tui::datepicker::{
    is_outside_click, widget, DatePicker, PickerConfig, Selection, ViewMonth,
};
use crate::types::SharedDataHandle;

/// Handle a key on the orders tab. Returns false when the key should bubble
/// up to tab-level navigation.
pub async fn handle_key(
    key: KeyEvent,
    state: &mut State,
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) -> bool {
    if state.picker.is_some() {
        handle_picker_key(key, state, shared_data, refresh_tx).await;
        return true;
    }

    let order_count = shared_data.read().await.orders.len();

    match key.code {
        KeyCode::Char('d') => {
            open_picker(state, shared_data).await;
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if !state.subtab_focused {
                state.subtab_focused = true;
                state.clamp_selection(order_count);
            } else if state.selected_index + 1 < order_count {
                state.selected_index += 1;
            }
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if !state.subtab_focused {
                false
            } else if state.selected_index == 0 {
                state.subtab_focused = false;
                true
            } else {
                state.selected_index -= 1;
                true
            }
        }
        KeyCode::Enter => {
            if !state.subtab_focused {
                return false;
            }
            advance_selected(state, provider, shared_data, refresh_tx).await;
            true
        }
        KeyCode::Esc => {
            if state.subtab_focused {
                state.subtab_focused = false;
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

/// Handle a mouse press on the orders tab
pub async fn handle_mouse(
    mouse: MouseEvent,
    state: &mut State,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }

    if let Some(picker) = &mut state.picker {
        let Some(panel) = state.popover_area else {
            return false;
        };
        if panel.contains((mouse.column, mouse.row).into()) {
            if let Some(date) = widget::date_at(panel, picker.grid(), mouse.column, mouse.row) {
                picker.click(date);
            }
            return true;
        }
        let trigger = state.trigger_area.unwrap_or_default();
        if is_outside_click(mouse.column, mouse.row, trigger, panel) {
            // Dismissal without applying, the filter stays as it was
            state.close_picker();
            return true;
        }
        return false;
    }

    if let Some(trigger) = state.trigger_area {
        if trigger.contains((mouse.column, mouse.row).into()) {
            open_picker(state, shared_data).await;
            return true;
        }
    }
    false
}

async fn handle_picker_key(
    key: KeyEvent,
    state: &mut State,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) {
    let Some(picker) = &mut state.picker else {
        return;
    };
    match key.code {
        KeyCode::Esc => state.close_picker(),
        KeyCode::Left | KeyCode::Char('h') => picker.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => picker.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => picker.move_cursor(-7),
        KeyCode::Down | KeyCode::Char('j') => picker.move_cursor(7),
        KeyCode::Enter => picker.click_cursor(),
        KeyCode::Char('c') => picker.clear(),
        KeyCode::Char('[') => {
            picker.prev_month();
        }
        KeyCode::Char(']') => {
            picker.next_month();
        }
        KeyCode::Char('a') => apply_and_close(state, shared_data, refresh_tx).await,
        _ => {}
    }
}

/// Open the popover seeded with the currently applied filter
async fn open_picker(state: &mut State, shared_data: &SharedDataHandle) {
    let data = shared_data.read().await;
    let (start, end) = data.range;
    let config = PickerConfig {
        today: data.today,
        initial_month: Some(ViewMonth::containing(end)),
    };
    drop(data);
    state.picker = Some(DatePicker::new(config).with_selection(Selection::from_range(start, end)));
}

/// Commit the picker's range to the shared filter and close. The picker is
/// dropped before the refresh is requested, so a confirm fires exactly once.
async fn apply_and_close(
    state: &mut State,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) {
    let Some(picker) = state.picker.take() else {
        return;
    };
    state.popover_area = None;
    if let Some((start, end)) = picker.applied_range() {
        let mut data = shared_data.write().await;
        data.range = (start, end);
        let label = format_date_range(start, end, &data.config.date_format);
        data.error_message = None;
        tracing::info!(range = %label, "order filter applied");
        drop(data);
        let _ = refresh_tx.send(()).await;
    }
}

async fn advance_selected(
    state: &mut State,
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) {
    let order = {
        let data = shared_data.read().await;
        data.orders.get(state.selected_index).cloned()
    };
    let Some(order) = order else {
        return;
    };
    match provider.advance_order(order.id).await {
        Ok(Some(status)) => {
            tracing::info!(order = order.id, status = status.label(), "order advanced");
            let _ = refresh_tx.send(()).await;
        }
        Ok(None) => {}
        Err(err) => {
            shared_data.write().await.error_message = Some(err.to_string());
        }
    }
}
