use std::sync::Arc;

use anyhow::Result;

use crate::config::DisplayConfig;
use crate::formatting::{format_header, format_money};
use crate::provider::MerchantDataProvider;
use crate::types::MenuItem;

const NAME_COL_WIDTH: usize = 26;
const PRICE_COL_WIDTH: usize = 10;

pub fn format_menu_table(items: &[MenuItem], display: &DisplayConfig) -> String {
    let mut output = String::new();
    let mut last_category: Option<&str> = None;

    for item in items {
        if last_category != Some(item.category.as_str()) {
            if last_category.is_some() {
                output.push('\n');
            }
            output.push_str(&format_header(&item.category, &display.box_chars));
            last_category = Some(item.category.as_str());
        }
        output.push_str(&format!(
            "{:<name$} {:>price$}  {}\n",
            item.name,
            format_money(item.price_cents, &display.currency),
            if item.available { "" } else { "86'd" },
            name = NAME_COL_WIDTH,
            price = PRICE_COL_WIDTH,
        ));
    }

    if items.is_empty() {
        output.push_str("Menu is empty\n");
    }
    output
}

pub async fn execute(provider: &Arc<dyn MerchantDataProvider>, display: &DisplayConfig) -> Result<()> {
    let items = provider.menu_items().await?;
    print!("{}", format_menu_table(&items, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixtures;

    #[test]
    fn test_groups_by_category_and_marks_unavailable() {
        let display = DisplayConfig::from_config(&Config::default());
        let table = format_menu_table(&fixtures::sample_menu(), &display);

        assert!(table.contains("Starters\n────────\n"));
        assert!(table.contains("Mains"));
        assert!(table.contains("86'd"));
        assert!(table.contains("16.50 EUR"));
    }
}
