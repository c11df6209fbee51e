use std::fmt::{Debug, Formatter};

use bon::Builder;

use crate::paths::PAYSTACK_BASE_URL;

/// A Paystack secret key.
///
/// The key is only ever rendered into the `Authorization` header; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: impl Into<String>) -> Self {
        Secret(secret.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(****)")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Secret(value.to_string())
    }
}

/// Client configuration.
#[derive(Builder, Debug, Clone)]
pub struct ClientConfig {
    /// Secret key sent as a bearer token on every request.
    #[builder(into)]
    pub secret: Secret,
    /// Prefix prepended to every endpoint path. Defaults to the live Paystack API.
    #[builder(into, default = PAYSTACK_BASE_URL.to_string())]
    pub base_url: String,
    /// Preconfigured HTTP client, e.g. with a timeout or proxy.
    pub http_client: Option<reqwest::Client>,
}
