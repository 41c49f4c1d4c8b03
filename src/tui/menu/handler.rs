use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use super::State;
use crate::provider::MerchantDataProvider;
use crate::types::SharedDataHandle;

/// Handle a key on the menu tab. Returns false when the key should bubble
/// up to tab-level navigation.
pub async fn handle_key(
    key: KeyEvent,
    state: &mut State,
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) -> bool {
    let item_count = shared_data.read().await.menu.len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if !state.subtab_focused {
                state.subtab_focused = true;
                state.clamp_selection(item_count);
            } else if state.selected_index + 1 < item_count {
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
            toggle_selected(state, provider, shared_data, refresh_tx).await;
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

async fn toggle_selected(
    state: &mut State,
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) {
    let item = {
        let data = shared_data.read().await;
        data.menu.get(state.selected_index).cloned()
    };
    let Some(item) = item else {
        return;
    };
    match provider.toggle_item_availability(item.id).await {
        Ok(Some(available)) => {
            tracing::info!(item = %item.name, available, "availability toggled");
            let _ = refresh_tx.send(()).await;
        }
        Ok(None) => {}
        Err(err) => {
            shared_data.write().await.error_message = Some(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::provider::MockProvider;
    use crate::types::SharedData;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tokio::sync::RwLock;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_enter_toggles_availability() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let provider: Arc<dyn MerchantDataProvider> = Arc::new(MockProvider::new(today));
        let shared = Arc::new(RwLock::new(SharedData::new(Config::default(), today)));
        let (tx, mut rx) = mpsc::channel(8);

        let menu = provider.menu_items().await.unwrap();
        let target = menu[0].clone();
        shared.write().await.menu = Arc::new(menu);

        let mut state = State::new();
        state.subtab_focused = true;
        handle_key(key(KeyCode::Enter), &mut state, &provider, &shared, &tx).await;

        assert!(rx.try_recv().is_ok());
        let after = provider.menu_items().await.unwrap();
        let updated = after.iter().find(|m| m.id == target.id).unwrap();
        assert_eq!(updated.available, !target.available);
    }

    #[tokio::test]
    async fn test_navigation_clamps_to_list() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let provider: Arc<dyn MerchantDataProvider> = Arc::new(MockProvider::new(today));
        let shared = Arc::new(RwLock::new(SharedData::new(Config::default(), today)));
        let (tx, _rx) = mpsc::channel(8);
        shared.write().await.menu = Arc::new(provider.menu_items().await.unwrap());
        let count = shared.read().await.menu.len();

        let mut state = State::new();
        for _ in 0..count + 5 {
            handle_key(key(KeyCode::Down), &mut state, &provider, &shared, &tx).await;
        }
        assert_eq!(state.selected_index, count - 1);
    }
}
