use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;

use crate::provider::MerchantDataProvider;
use crate::types::SharedDataHandle;

/// Fetch everything the dashboard shows for the applied range and update
/// shared state
pub async fn fetch_dashboard_data(
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
) {
    let (start, end) = shared_data.read().await.range;

    let orders = provider.orders_between(start, end).await;
    let menu = provider.menu_items().await;
    let slots = provider.slots_between(start, end).await;

    match (orders, menu, slots) {
        (Ok(orders), Ok(menu), Ok(slots)) => {
            let mut shared = shared_data.write().await;
            shared.orders = Arc::new(orders);
            shared.menu = Arc::new(menu);
            shared.slots = Arc::new(slots);
            shared.last_refresh = Some(SystemTime::now());
            shared.error_message = None;
        }
        (orders, menu, slots) => {
            let err = [
                orders.err().map(|e| format!("orders: {}", e)),
                menu.err().map(|e| format!("menu: {}", e)),
                slots.err().map(|e| format!("slots: {}", e)),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("; ");
            let mut shared = shared_data.write().await;
            shared.error_message = Some(format!("Fetch failed: {}", err));
        }
    }
}

/// Background task loop that periodically refreshes merchant data
pub async fn fetch_data_loop(
    provider: Arc<dyn MerchantDataProvider>,
    shared_data: SharedDataHandle,
    interval: u32,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval.max(1) as u64));
    interval_timer.tick().await; // First tick completes immediately

    loop {
        fetch_dashboard_data(&provider, &shared_data).await;

        // Wait for either the interval timer or a manual refresh signal
        tokio::select! {
            _ = interval_timer.tick() => {}
            _ = refresh_rx.recv() => {
                tracing::debug!("manual refresh requested");
            }
        }
    }
}
