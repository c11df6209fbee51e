use http::{
    HeaderMap, HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    config::{ClientConfig, Secret},
    errors::{Error, Result},
    query::Query,
    response::decode,
};

/// Authenticated transport shared by every feature handle.
///
/// Holds only immutable state: the base URL, the fixed header set and the HTTP client.
/// Cloning is cheap and clones may be used concurrently.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    headers: HeaderMap,
    client: reqwest::Client,
    #[cfg(feature = "tracing")]
    span: tracing::Span,
}

impl ApiClient {
    /// Creates a client for the live API. No request is made.
    pub fn new(secret: impl Into<Secret>) -> Result<Self> {
        Self::from_config(ClientConfig::builder().secret(secret).build())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let mut authorization =
            HeaderValue::try_from(format!("Bearer {}", config.secret.expose()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(ApiClient {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            headers,
            client: config.http_client.unwrap_or_default(),
            #[cfg(feature = "tracing")]
            span: tracing::debug_span!("paystack"),
        })
    }

    /// Records every request event of this client under `span`.
    #[cfg(feature = "tracing")]
    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The header set attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Builds `base + path + suffix + ?k=v&...`.
    ///
    /// Keys and values are not percent-encoded; see [`crate::query`].
    pub fn endpoint_url(&self, path: &str, query: Option<&Query>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            query.append_to(&mut url);
        }
        url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: Option<&Query>) -> Result<R> {
        self.send(Method::GET, self.endpoint_url(path, query), None)
            .await
    }

    pub async fn post<R, B>(&self, path: &str, body: &B) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.send(Method::POST, self.endpoint_url(path, None), Some(body))
            .await
    }

    pub async fn put<R, B>(&self, path: &str, body: &B) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.send(Method::PUT, self.endpoint_url(path, None), Some(body))
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.send(Method::DELETE, self.endpoint_url(path, None), None)
            .await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        #[cfg(feature = "tracing")]
        tracing::debug!(parent: &self.span, "Sending {method} {url}");

        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(parent: &self.span, "Request failed with status {status}");

            return Err(Error::from_status(status));
        }

        let body = response.bytes().await?;
        decode(&body)
    }
}
