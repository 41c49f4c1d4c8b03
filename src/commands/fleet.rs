use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::DisplayConfig;
use crate::formatting::{format_date, format_date_range, format_header};
use crate::provider::MerchantDataProvider;
use crate::types::DeliverySlot;

const DATE_COL_WIDTH: usize = 12;
const WINDOW_COL_WIDTH: usize = 13;
const COURIER_COL_WIDTH: usize = 8;

pub fn format_fleet_table(
    slots: &[DeliverySlot],
    range: (NaiveDate, NaiveDate),
    display: &DisplayConfig,
) -> String {
    let title = format!(
        "Delivery slots {}",
        format_date_range(range.0, range.1, &display.date_format)
    );
    let mut output = format_header(&title, &display.box_chars);

    output.push_str(&format!(
        "{:<date$} {:<window$} {:<courier$} Load\n",
        "Date",
        "Window",
        "Courier",
        date = DATE_COL_WIDTH,
        window = WINDOW_COL_WIDTH,
        courier = COURIER_COL_WIDTH,
    ));

    for slot in slots {
        output.push_str(&format!(
            "{:<date$} {:<window$} {:<courier$} {}/{}{}\n",
            format_date(slot.date, &display.date_format),
            slot.window,
            slot.courier,
            slot.booked,
            slot.capacity,
            if slot.is_full() { "  FULL" } else { "" },
            date = DATE_COL_WIDTH,
            window = WINDOW_COL_WIDTH,
            courier = COURIER_COL_WIDTH,
        ));
    }

    if slots.is_empty() {
        output.push_str("No delivery slots in this range\n");
    }
    output
}

pub async fn execute(
    provider: &Arc<dyn MerchantDataProvider>,
    range: (NaiveDate, NaiveDate),
    display: &DisplayConfig,
) -> Result<()> {
    let slots = provider.slots_between(range.0, range.1).await?;
    print!("{}", format_fleet_table(&slots, range, display));
    Ok(())
}
