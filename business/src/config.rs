/// Order-tracking endpoint used when no override is given.
pub const DEFAULT_ENDPOINT_URL: &str = "https://store.backerkit-orders.com/api/order/track";

/// Locale tag sent with every request; the endpoint answers in this language.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Referer the endpoint expects from its own tracking page.
pub const DEFAULT_REFERER: &str = "https://store.backerkit-orders.com/track";

/// SKU highlighted when the caller does not pick one.
pub const DEFAULT_SKU: &str = "PRT-X1-CORE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub endpoint_url: String,
    pub locale: String,
    pub referer: String,
}

impl TrackerConfig {
    /// Config pointing at a different endpoint, keeping the default headers.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }

    /// Headers sent alongside the JSON body.
    pub fn request_headers(&self) -> [(&'static str, &str); 2] {
        [
            ("accept-language", self.locale.as_str()),
            ("referer", self.referer.as_str()),
        ]
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            referer: DEFAULT_REFERER.to_owned(),
        }
    }
}
