use chrono::NaiveDate;
use std::str::FromStr;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

use crate::config::Config;

pub type OrderId = i64;

/// Kitchen/delivery pipeline for an order.
///
/// `advance` walks the happy path one step at a time; `Delivered` and
/// `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Placed,
    Accepted,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Status keys accepted on the command line (`brigade orders --status ...`)
pub static STATUS_KEYS: phf::Map<&'static str, OrderStatus> = phf::phf_map! {
    "placed" => OrderStatus::Placed,
    "accepted" => OrderStatus::Accepted,
    "preparing" => OrderStatus::Preparing,
    "ready" => OrderStatus::Ready,
    "out-for-delivery" => OrderStatus::OutForDelivery,
    "delivered" => OrderStatus::Delivered,
    "cancelled" => OrderStatus::Cancelled,
};

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Next step along the pipeline, None for terminal states
    pub fn advance(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.advance().is_none()
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STATUS_KEYS
            .get(s.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("unknown order status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    /// Day the order was placed (time-of-day is not tracked here)
    pub placed: NaiveDate,
    pub item_count: u32,
    pub total_cents: i64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySlot {
    pub id: i64,
    pub date: NaiveDate,
    /// Human-readable delivery window, e.g. "11:00-13:00"
    pub window: String,
    pub courier: String,
    pub capacity: u32,
    pub booked: u32,
}

impl DeliverySlot {
    pub fn is_full(&self) -> bool {
        self.booked >= self.capacity
    }
}

/// Data shared between the TUI event loop and the background refresh task
#[derive(Clone)]
pub struct SharedData {
    pub orders: Arc<Vec<Order>>,
    pub menu: Arc<Vec<MenuItem>>,
    pub slots: Arc<Vec<DeliverySlot>>,
    pub config: Config,
    /// Reference date injected at the composition root; everything that
    /// compares against "today" uses this instead of reading the clock
    pub today: NaiveDate,
    /// Applied inclusive order/delivery filter, always start <= end
    pub range: (NaiveDate, NaiveDate),
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
}

impl SharedData {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        let start = today - chrono::Duration::days(6);
        SharedData {
            orders: Arc::new(Vec::new()),
            menu: Arc::new(Vec::new()),
            slots: Arc::new(Vec::new()),
            config,
            today,
            range: (start, today),
            last_refresh: None,
            error_message: None,
        }
    }
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;
