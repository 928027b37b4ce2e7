//! Stock status derived from inventory thresholds.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use crate::net::types::InventoryItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
    Overstock,
}

impl StockStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of stock",
            Self::Low => "Low",
            Self::InStock => "In stock",
            Self::Overstock => "Overstock",
        }
    }

    /// BEM modifier for the badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::OutOfStock => "out",
            Self::Low => "low",
            Self::InStock => "ok",
            Self::Overstock => "over",
        }
    }

    #[must_use]
    pub fn needs_reorder(self) -> bool {
        matches!(self, Self::OutOfStock | Self::Low)
    }
}

/// Classify `quantity` against the reorder threshold and optional ceiling.
#[must_use]
pub fn stock_status(quantity: i64, min_threshold: i64, max_threshold: Option<i64>) -> StockStatus {
    if quantity <= 0 {
        StockStatus::OutOfStock
    } else if quantity <= min_threshold {
        StockStatus::Low
    } else if max_threshold.is_some_and(|max| quantity > max) {
        StockStatus::Overstock
    } else {
        StockStatus::InStock
    }
}

#[must_use]
pub fn item_status(item: &InventoryItem) -> StockStatus {
    stock_status(item.quantity, item.min_threshold, item.max_threshold)
}

/// Units to order to bring the item back up: to the ceiling when set,
/// otherwise to twice the reorder threshold. Zero when nothing is needed.
#[must_use]
pub fn reorder_quantity(item: &InventoryItem) -> i64 {
    if !item_status(item).needs_reorder() {
        return 0;
    }
    let target = item.max_threshold.unwrap_or(item.min_threshold.saturating_mul(2));
    target.saturating_sub(item.quantity.max(0)).max(0)
}

/// Items that need reordering, most urgent (lowest quantity) first.
#[must_use]
pub fn reorder_list(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let mut list: Vec<InventoryItem> = items
        .iter()
        .filter(|item| item_status(item).needs_reorder())
        .cloned()
        .collect();
    list.sort_by(|a, b| a.quantity.cmp(&b.quantity).then_with(|| a.name.cmp(&b.name)));
    list
}

/// Quantity after applying `delta`.
///
/// # Errors
///
/// Returns a message when the adjustment is zero or would leave negative stock.
pub fn apply_adjustment(quantity: i64, delta: i64) -> Result<i64, String> {
    if delta == 0 {
        return Err("Adjustment must not be zero.".to_owned());
    }
    let next = quantity.saturating_add(delta);
    if next < 0 {
        return Err(format!("Only {quantity} in stock; cannot remove {}.", delta.unsigned_abs()));
    }
    Ok(next)
}
