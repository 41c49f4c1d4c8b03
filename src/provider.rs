use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::fixtures;
use crate::types::{DeliverySlot, MenuItem, Order, OrderId, OrderStatus};

/// Merchant data access, abstracting over a remote backend and the in-memory
/// mock. The TUI and the CLI commands only ever talk to this trait.
#[async_trait]
pub trait MerchantDataProvider: Send + Sync {
    /// Orders placed within the inclusive date range
    async fn orders_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Order>>;

    /// The full menu, all categories
    async fn menu_items(&self) -> Result<Vec<MenuItem>>;

    /// Delivery slots within the inclusive date range
    async fn slots_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DeliverySlot>>;

    /// Move an order one step along the pipeline.
    /// Returns the new status, or None if the order is terminal or unknown.
    async fn advance_order(&self, id: OrderId) -> Result<Option<OrderStatus>>;

    /// Toggle 86'd state for a menu item. Returns the new availability,
    /// or None if the item is unknown.
    async fn toggle_item_availability(&self, id: i64) -> Result<Option<bool>>;
}

struct MockState {
    orders: Vec<Order>,
    menu: Vec<MenuItem>,
    slots: Vec<DeliverySlot>,
}

/// In-memory provider seeded from deterministic fixtures.
///
/// `tick` simulates kitchen progress so the dashboard has something to show
/// between manual interactions.
pub struct MockProvider {
    state: RwLock<MockState>,
}

impl MockProvider {
    pub fn new(today: NaiveDate) -> Self {
        MockProvider {
            state: RwLock::new(MockState {
                orders: fixtures::sample_orders(today),
                menu: fixtures::sample_menu(),
                slots: fixtures::sample_slots(today),
            }),
        }
    }

    /// Advance the oldest active order one step, if any.
    /// Deterministic: repeated ticks drain the pipeline in placement order.
    pub async fn tick(&self) -> Option<OrderId> {
        let mut state = self.state.write().await;
        let candidate = state
            .orders
            .iter_mut()
            .filter(|o| !o.status.is_terminal())
            .min_by_key(|o| (o.placed, o.id))?;
        if let Some(next) = candidate.status.advance() {
            candidate.status = next;
            tracing::debug!(order = candidate.id, status = next.label(), "mock kitchen tick");
            return Some(candidate.id);
        }
        None
    }
}

#[async_trait]
impl MerchantDataProvider for MockProvider {
    async fn orders_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Order>> {
        let state = self.state.read().await;
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.placed >= start && o.placed <= end)
            .cloned()
            .collect();
        orders.sort_by_key(|o| (std::cmp::Reverse(o.placed), o.id));
        Ok(orders)
    }

    async fn menu_items(&self) -> Result<Vec<MenuItem>> {
        Ok(self.state.read().await.menu.clone())
    }

    async fn slots_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DeliverySlot>> {
        let state = self.state.read().await;
        let mut slots: Vec<DeliverySlot> = state
            .slots
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect();
        slots.sort_by(|a, b| (a.date, &a.window).cmp(&(b.date, &b.window)));
        Ok(slots)
    }

    async fn advance_order(&self, id: OrderId) -> Result<Option<OrderStatus>> {
        let mut state = self.state.write().await;
        let Some(order) = state.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        match order.status.advance() {
            Some(next) => {
                order.status = next;
                Ok(Some(next))
            }
            None => Ok(None),
        }
    }

    async fn toggle_item_availability(&self, id: i64) -> Result<Option<bool>> {
        let mut state = self.state.write().await;
        let Some(item) = state.menu.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        item.available = !item.available;
        Ok(Some(item.available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn provider() -> MockProvider {
        MockProvider::new(d(2025, 2, 10))
    }

    #[tokio::test]
    async fn test_orders_between_is_inclusive() {
        let p = provider();
        let orders = p.orders_between(d(2025, 2, 8), d(2025, 2, 10)).await.unwrap();
        assert!(!orders.is_empty());
        assert!(orders
            .iter()
            .all(|o| o.placed >= d(2025, 2, 8) && o.placed <= d(2025, 2, 10)));
    }

    #[tokio::test]
    async fn test_orders_between_sorted_newest_first() {
        let p = provider();
        let orders = p.orders_between(d(2025, 1, 20), d(2025, 2, 10)).await.unwrap();
        assert!(orders.windows(2).all(|w| w[0].placed >= w[1].placed));
    }

    #[tokio::test]
    async fn test_single_day_range() {
        let p = provider();
        let orders = p.orders_between(d(2025, 2, 10), d(2025, 2, 10)).await.unwrap();
        assert!(orders.iter().all(|o| o.placed == d(2025, 2, 10)));
    }

    #[tokio::test]
    async fn test_advance_order_steps_pipeline() {
        let p = provider();
        let orders = p.orders_between(d(2025, 2, 10), d(2025, 2, 10)).await.unwrap();
        let placed = orders
            .iter()
            .find(|o| o.status == OrderStatus::Placed)
            .expect("fixtures contain a freshly placed order");

        let next = p.advance_order(placed.id).await.unwrap();
        assert_eq!(next, Some(OrderStatus::Accepted));
    }

    #[tokio::test]
    async fn test_advance_unknown_order_is_none() {
        let p = provider();
        assert_eq!(p.advance_order(999_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_toggle_item_availability_flips() {
        let p = provider();
        let item = p.menu_items().await.unwrap()[0].clone();
        let flipped = p.toggle_item_availability(item.id).await.unwrap();
        assert_eq!(flipped, Some(!item.available));
    }

    #[tokio::test]
    async fn test_tick_advances_oldest_active_order() {
        let p = provider();
        let before: Vec<Order> = p.orders_between(d(2025, 1, 1), d(2025, 2, 10)).await.unwrap();
        let oldest_active = before
            .iter()
            .filter(|o| !o.status.is_terminal())
            .min_by_key(|o| (o.placed, o.id))
            .unwrap()
            .clone();

        let ticked = p.tick().await;
        assert_eq!(ticked, Some(oldest_active.id));
    }
}
