use crate::model::{HighlightColor, ItemCategory, LineItem, ProcessedLineItem};

fn category_for(code: &str) -> ItemCategory {
    let code = code.to_uppercase();
    if code.starts_with("WTY") {
        ItemCategory::Warranty
    } else if code.starts_with("EW") {
        ItemCategory::ExtraWork
    } else {
        ItemCategory::Standard
    }
}

fn is_modified(item: &LineItem) -> bool {
    item.default_description.as_deref() != Some(item.description.as_str())
        || item.price != item.unit_price
}

pub fn trim_description(description: &str) -> &str {
    description
        .split("---")
        .next()
        .unwrap_or(description)
        .trim()
}

fn highlight_for(category: ItemCategory, quantity: f64, modified: bool) -> HighlightColor {
    if quantity == 0.0 {
        return HighlightColor::Red;
    }
    if modified {
        return HighlightColor::LightYellow;
    }

    match category {
        ItemCategory::Warranty => HighlightColor::Blue,
        ItemCategory::Standard => HighlightColor::Grey,
        ItemCategory::ExtraWork => HighlightColor::Orange,
    }
}

pub fn process_line_items(items: Vec<LineItem>) -> Vec<ProcessedLineItem> {
    let mut processed = items
        .into_iter()
        .map(|item| {
            let category = category_for(&item.code);
            let modified = category == ItemCategory::Standard && is_modified(&item);

            let final_description = if category == ItemCategory::Standard && !modified {
                trim_description(&item.description).to_string()
            } else {
                item.description.clone()
            };

            ProcessedLineItem {
                highlight_color: highlight_for(category, item.quantity, modified),
                final_description,
                category,
                modified,
                item,
            }
        })
        .collect::<Vec<ProcessedLineItem>>();

    processed.sort_by_key(|item| item.category);
    processed
}

pub fn contract_total(items: &[ProcessedLineItem], extracted_total: Option<f64>) -> f64 {
    let total = items.iter().map(|item| item.item.price).sum::<f64>();
    match extracted_total {
        Some(extracted) if total == 0.0 => extracted,
        _ => total,
    }
}
