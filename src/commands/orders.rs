use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::DisplayConfig;
use crate::formatting::{format_date, format_date_range, format_header, format_money};
use crate::provider::MerchantDataProvider;
use crate::types::{Order, OrderStatus};

const ID_COL_WIDTH: usize = 6;
const DATE_COL_WIDTH: usize = 12;
const CUSTOMER_COL_WIDTH: usize = 18;
const ITEMS_COL_WIDTH: usize = 5;
const TOTAL_COL_WIDTH: usize = 10;

pub fn format_orders_table(
    orders: &[Order],
    range: (NaiveDate, NaiveDate),
    display: &DisplayConfig,
) -> String {
    let title = format!(
        "Orders {}",
        format_date_range(range.0, range.1, &display.date_format)
    );
    let mut output = format_header(&title, &display.box_chars);

    output.push_str(&format!(
        "{:<id$} {:<date$} {:<customer$} {:>items$} {:>total$}  Status\n",
        "Order",
        "Placed",
        "Customer",
        "Items",
        "Total",
        id = ID_COL_WIDTH,
        date = DATE_COL_WIDTH,
        customer = CUSTOMER_COL_WIDTH,
        items = ITEMS_COL_WIDTH,
        total = TOTAL_COL_WIDTH,
    ));

    for order in orders {
        output.push_str(&format!(
            "#{:<id$} {:<date$} {:<customer$} {:>items$} {:>total$}  {}\n",
            order.id,
            format_date(order.placed, &display.date_format),
            order.customer,
            order.item_count,
            format_money(order.total_cents, &display.currency),
            order.status.label(),
            id = ID_COL_WIDTH - 1,
            date = DATE_COL_WIDTH,
            customer = CUSTOMER_COL_WIDTH,
            items = ITEMS_COL_WIDTH,
            total = TOTAL_COL_WIDTH,
        ));
    }

    if orders.is_empty() {
        output.push_str("No orders in this range\n");
    } else {
        let total: i64 = orders.iter().map(|o| o.total_cents).sum();
        output.push_str(&format!(
            "\n{} orders, {}\n",
            orders.len(),
            format_money(total, &display.currency)
        ));
    }
    output
}

pub async fn execute(
    provider: &Arc<dyn MerchantDataProvider>,
    range: (NaiveDate, NaiveDate),
    status: Option<OrderStatus>,
    display: &DisplayConfig,
) -> Result<()> {
    let mut orders = provider.orders_between(range.0, range.1).await?;
    if let Some(status) = status {
        orders.retain(|o| o.status == status);
    }
    print!("{}", format_orders_table(&orders, range, display));
    Ok(())
}
