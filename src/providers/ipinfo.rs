//! IP geolocation service using ipinfo.io.

use super::Lookup;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE_URL: &str = "https://ipinfo.io/";

/// Geolocation record returned by ipinfo.io.
///
/// Only `ip` is always present. Bogon (private or reserved) addresses come
/// back with `ip` and `bogon` set and nothing else.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Record {
  /// Resolved IP address
  pub ip: String,

  /// Reverse DNS name
  pub hostname: Option<String>,

  /// City name
  pub city: Option<String>,

  /// Region/State name
  pub region: Option<String>,

  /// Two-letter country code
  pub country: Option<String>,

  /// Postal code
  pub postal: Option<String>,

  /// Coordinates as "lat,lon"
  pub loc: Option<String>,

  /// Autonomous system and ISP, e.g. "AS15169 Google LLC"
  pub org: Option<String>,

  /// IANA time zone name
  pub timezone: Option<String>,

  #[serde(default)]
  pub bogon: bool,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to send request to {url}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("ipinfo request failed with status {status}: {message}")]
  Status { status: StatusCode, message: String },
  #[error("failed to decode ipinfo response")]
  Decode(#[source] reqwest::Error),
  #[error("{0:?} is not an address ipinfo can look up")]
  InvalidTarget(String),
}

/// Error payloads ipinfo sends alongside non-2xx statuses. Both the nested
/// `{"error": {"title", "message"}}` form and a bare string are in use.
#[derive(Deserialize)]
struct ErrorBody {
  error: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
  Text(String),
  Detailed {
    title: Option<String>,
    message: Option<String>,
  },
}

impl ErrorDetail {
  fn into_message(self) -> Option<String> {
    match self {
      Self::Text(text) => Some(text),
      Self::Detailed { title, message } => match (title, message) {
        (Some(t), Some(m)) => Some(format!("{t}: {m}")),
        (t, m) => m.or(t),
      },
    }
  }
}

fn error_message(body: &str) -> Option<String> {
  serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.error.into_message())
}

/// Builds the request URL. `None` asks for the caller's own address.
///
/// The IP is pushed as a single escaped path segment, so whatever the user
/// typed can never change the host or path the token is sent to. Dot-only
/// input is refused: URL normalisation would drop it (even percent-encoded)
/// and silently turn the request into an own-address lookup.
fn endpoint(
  base: &Url,
  ip: Option<&str>,
  token: Option<&str>,
) -> Result<Url, Error> {
  if let Some(ip) = ip.filter(|ip| ip.chars().all(|c| c == '.')) {
    return Err(Error::InvalidTarget(ip.to_string()));
  }
  let mut url = base.clone();
  if let Ok(mut segments) = url.path_segments_mut() {
    segments.pop_if_empty();
    segments.extend(ip);
    segments.push("json");
  }
  if let Some(token) = token {
    url.query_pairs_mut().append_pair("token", token);
  }
  Ok(url)
}

/// Strips the token before a URL ends up in logs or error messages.
fn redacted(url: &Url) -> String {
  let mut shown = url.clone();
  shown.set_query(None);
  shown.to_string()
}

/// ipinfo.io client over a shared `reqwest::Client`.
pub struct Client {
  http: reqwest::Client,
  base: Url,
  token: Option<String>,
}

impl Client {
  #[must_use]
  pub fn new(http: reqwest::Client, token: Option<String>) -> Self {
    Self {
      http,
      base: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
      token,
    }
  }

  #[cfg(test)]
  fn with_base(mut self, base: Url) -> Self {
    self.base = base;
    self
  }

  /// Fetches the record for `ip`, or for the caller when `ip` is `None`.
  ///
  /// # Errors
  /// - Input that cannot form a lookup path (only dots)
  /// - Failed HTTP request
  /// - Non-success status code (the API's own message is kept when present)
  /// - Deserialization error
  pub async fn fetch(&self, ip: Option<&str>) -> Result<Record, Error> {
    let url = endpoint(&self.base, ip, self.token.as_deref())?;
    let shown = redacted(&url);
    log::debug!("GET {shown}");

    let response = self
      .http
      .get(url)
      .send()
      .await
      .map_err(|source| Error::Request {
        url: shown.clone(),
        source,
      })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let message = error_message(&body)
        .unwrap_or_else(|| "Unknown API error".to_string());
      return Err(Error::Status { status, message });
    }

    let record = response.json::<Record>().await.map_err(Error::Decode)?;
    log::debug!("ipinfo answered for {}", record.ip);
    Ok(record)
  }
}

impl Lookup for Client {
  async fn lookup(&self, ip: Option<&str>) -> Result<Record, Error> {
    self.fetch(ip).await
  }
}
