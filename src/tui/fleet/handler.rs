use crossterm::event::{KeyCode, KeyEvent};

use super::State;
use crate::types::SharedDataHandle;

/// Handle a key on the fleet tab. Returns false when the key should bubble
/// up to tab-level navigation.
pub async fn handle_key(key: KeyEvent, state: &mut State, shared_data: &SharedDataHandle) -> bool {
    let slot_count = shared_data.read().await.slots.len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if !state.subtab_focused {
                state.subtab_focused = true;
                state.clamp_selection(slot_count);
            } else if state.selected_index + 1 < slot_count {
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
