//! Presentation of order items: table rows and the SKU summary line.

use backer_track_business::format::{
    format_eta, format_eta_normalized, format_quantity, format_tracking, text_or_placeholder,
};
use backer_track_business::{OrderItem, StatusClass};
use console::{StyledObject, style};

use crate::table::TableRow;

/// One rendered line item. Cells may carry color codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub status: String,
    pub product: String,
    pub sku: String,
    pub quantity: String,
    pub tracking: String,
    pub eta: String,
}

impl OrderRow {
    /// Builds the row, marking the SKU cell when it is the highlighted one.
    pub fn new(item: &OrderItem, highlight_sku: &str) -> Self {
        let sku = text_or_placeholder(item.sku.as_deref());
        let sku = if item.matches_sku(highlight_sku) {
            style(format!("*{sku}")).magenta().bold().to_string()
        } else {
            sku.to_owned()
        };

        Self {
            status: styled_status(item.status.as_deref()),
            product: text_or_placeholder(item.product_name.as_deref()).to_owned(),
            sku,
            quantity: format_quantity(item),
            tracking: format_tracking(item),
            eta: format_eta_normalized(item),
        }
    }
}

impl TableRow for OrderRow {
    const HEADERS: &'static [&'static str] =
        &["Status", "Product", "SKU", "Qty", "Tracking", "ETA"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            self.product.clone(),
            self.sku.clone(),
            self.quantity.clone(),
            self.tracking.clone(),
            self.eta.clone(),
        ]
    }
}

/// `SKU: Status · Product ×Qty · Tracking · ETA ...` for the highlighted item.
pub fn sku_summary(sku: &str, item: &OrderItem) -> String {
    format!(
        "{}: {} · {} ×{} · {} · ETA {}",
        style(sku).magenta().bold(),
        styled_status(item.status.as_deref()),
        text_or_placeholder(item.product_name.as_deref()),
        format_quantity(item),
        format_tracking(item),
        format_eta(item),
    )
}

fn styled_status(status: Option<&str>) -> String {
    let text = text_or_placeholder(status);
    paint(StatusClass::classify(text), style(text)).to_string()
}

fn paint<D>(class: StatusClass, text: StyledObject<D>) -> StyledObject<D> {
    match class {
        StatusClass::Shipped => text.green(),
        StatusClass::Pending => text.yellow(),
        StatusClass::Other => text.cyan(),
    }
}
