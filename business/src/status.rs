/// Lowercased statuses that mean "not on its way yet".
const PENDING_SYNONYMS: &[&str] = &["not ship", "not shipped", "waiting", "pending", "processing"];

/// Display class of a free-text fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Shipped,
    Pending,
    /// Anything unrecognized, including statuses the endpoint adds later.
    Other,
}

impl StatusClass {
    /// Total over all inputs; unknown text falls back to `Other`.
    pub fn classify(status: &str) -> Self {
        let normalized = status.trim().to_lowercase();
        if normalized == "shipped" {
            Self::Shipped
        } else if PENDING_SYNONYMS.contains(&normalized.as_str()) {
            Self::Pending
        } else {
            Self::Other
        }
    }
}
