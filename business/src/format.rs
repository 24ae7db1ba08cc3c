//! Display strings for order fields.
//!
//! Every formatter returns `"-"` for a value the endpoint left out, so the
//! table never has an empty cell.

use std::sync::LazyLock;

use regex::Regex;

use crate::OrderItem;

pub const PLACEHOLDER: &str = "-";

/// `2024年3月5日`, optionally padded with whitespace. ASCII digits only.
static CJK_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日\s*$")
        .expect("CJK date pattern is valid")
});

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed text, or `"-"` when missing or blank.
pub fn text_or_placeholder(value: Option<&str>) -> &str {
    present(value).unwrap_or(PLACEHOLDER)
}

/// Carrier-prefixed tracking number, the bare number, or `"-"`.
pub fn format_tracking(item: &OrderItem) -> String {
    match (
        present(item.tracking_number.as_deref()),
        present(item.carrier.as_deref()),
    ) {
        (None, _) => PLACEHOLDER.to_owned(),
        (Some(number), Some(carrier)) => format!("{carrier} {number}"),
        (Some(number), None) => number.to_owned(),
    }
}

/// Revised estimate if there is one, else the scheduled one, else `"-"`.
pub fn format_eta(item: &OrderItem) -> String {
    present(item.change_delivery_time.as_deref())
        .or_else(|| present(item.local_delivery_time.as_deref()))
        .unwrap_or(PLACEHOLDER)
        .to_owned()
}

/// Like [`format_eta`], with `YYYY年MM月DD日` rewritten to `YYYY-MM-DD`.
pub fn format_eta_normalized(item: &OrderItem) -> String {
    normalize_cjk_date(&format_eta(item))
}

/// Rewrites an exact `YYYY年M月D日` date to zero-padded `YYYY-MM-DD`.
///
/// Anything else, including full-width digits or a missing day, is returned
/// unchanged.
pub fn normalize_cjk_date(raw: &str) -> String {
    match CJK_DATE_RE.captures(raw) {
        Some(caps) => format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_owned(),
    }
}

pub fn format_quantity(item: &OrderItem) -> String {
    item.quantity
        .map(|q| q.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}
