//! Order lookup for crowdfunding backers.
//!
//! [`OrderTracker`] sends a backer's email and number to the tracking
//! endpoint and returns the parsed [`OrderResponse`] next to the raw JSON.
//! The [`format`] and [`status`] modules turn its line items into display
//! strings.

mod config;
mod credentials;
mod error;
pub mod format;
mod order;
pub mod status;
mod tracker;

pub use config::{
    DEFAULT_ENDPOINT_URL, DEFAULT_LOCALE, DEFAULT_REFERER, DEFAULT_SKU, TrackerConfig,
};
pub use credentials::Credentials;
pub use error::TrackError;
pub use order::{OrderItem, OrderResponse, TrackedOrder};
pub use status::StatusClass;
pub use tracker::OrderTracker;
