//! Request gateway to the API
//!
//! The [Transport] trait is the seam between the client operations and the
//! network. [HttpTransport] is the real implementation and owns a pooled
//! `reqwest` blocking client configured once from a [Config].

// standard library
use std::time::Duration;

// internal modules
use crate::error::{Error, Result};
use crate::query::Query;

// external crates
use log::{debug, trace};
use serde::{Deserialize, Deserializer};

/// Base of the URL used to query the IAEA API
pub const BASE_URL: &str = "https://nds.iaea.org/relnsd/v1/data";

/// Identifying header sent with every request by default
///
/// The API rejects some generic agents, a desktop browser string is accepted.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:77.0) Gecko/20100101 Firefox/77.0";

/// Connection settings for [HttpTransport]
///
/// Can be built in code or deserialised, with any missing keys taking their
/// default values. The timeout is given in seconds.
///
/// ```rust
/// # use livechart_client::Config;
/// # use std::time::Duration;
/// let config = Config::from_json(r#"{ "timeout": 2.5 }"#).unwrap();
/// assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
/// assert_eq!(config.base_url, livechart_client::BASE_URL);
///
/// let config = Config::default().with_user_agent("my-analysis/0.1");
/// assert_eq!(config.user_agent, "my-analysis/0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint receiving every GET request
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Total time allowed per request, `None` leaves it to `reqwest`
    #[serde(deserialize_with = "seconds")]
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Read a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the endpoint
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn seconds<'de, D>(deserializer: D) -> core::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<f64>::deserialize(deserializer)?;
    match secs {
        Some(s) if !s.is_finite() || s < 0.0 => Err(serde::de::Error::custom(std::format!(
            "timeout must be a non-negative number of seconds, got {s}"
        ))),
        Some(s) => Duration::try_from_secs_f64(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Sends a query and returns the raw response body
pub trait Transport {
    /// Issue one GET request for the query
    ///
    /// Implementations return [Error::Transport] for non-success HTTP status
    /// codes and [Error::Unexpected] for any other failure.
    fn get(&self, query: &Query) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, query: &Query) -> Result<String> {
        (**self).get(query)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, query: &Query) -> Result<String> {
        (**self).get(query)
    }
}

/// HTTP transport over a reusable `reqwest` connection pool
///
/// The header and timeout are fixed when the transport is built and every
/// request reuses the same pool of keep-alive connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the connection context from a [Config]
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Endpoint receiving the requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn get(&self, query: &Query) -> Result<String> {
        debug!("GET {}?{query}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(query.params())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response.text()?;
        trace!("Received {} bytes", text.len());
        Ok(text)
    }
}
