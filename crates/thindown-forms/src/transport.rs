//! Delivery of validated payloads to the site's form endpoints.

use std::{future::Future, time::Duration};

use reqwest::{Client, header};
use serde::Serialize;

use crate::error::SubmissionError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Sends one validated payload to one endpoint.
///
/// Implementations make exactly one attempt per call: no retry, no backoff,
/// no queue. Any outcome other than an HTTP 2xx is a [`SubmissionError`].
pub trait SubmissionTransport: Send + Sync {
  /// POST `payload` as JSON to `endpoint` (a site-relative path such as
  /// `/api/contact`). The response body is ignored.
  fn submit<'a, D>(
    &'a self,
    endpoint: &'static str,
    payload: &'a D,
  ) -> impl Future<Output = Result<(), SubmissionError>> + Send + 'a
  where
    D: Serialize + Sync + ?Sized;
}

// ─── HTTP implementation ─────────────────────────────────────────────────────

/// Where the form endpoints live.
#[derive(Debug, Clone)]
pub struct TransportConfig {
  /// Site root, e.g. `https://thindown.us`.
  pub base_url: String,
  /// Applies to the whole request, connect included.
  pub timeout:  Duration,
}

impl Default for TransportConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:3000".to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Posts submissions over HTTP.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: Client,
  config: TransportConfig,
}

impl HttpTransport {
  pub fn new(config: TransportConfig) -> Result<Self, reqwest::Error> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &TransportConfig { &self.config }

  fn url(&self, endpoint: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
  }
}

impl SubmissionTransport for HttpTransport {
  fn submit<'a, D>(
    &'a self,
    endpoint: &'static str,
    payload: &'a D,
  ) -> impl Future<Output = Result<(), SubmissionError>> + Send + 'a
  where
    D: Serialize + Sync + ?Sized,
  {
    async move {
      let body = serde_json::to_vec(payload)
        .map_err(|source| SubmissionError::Payload { endpoint, source })?;
      let url = self.url(endpoint);
      tracing::debug!(%url, bytes = body.len(), "posting submission");

      let resp = self
        .client
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|source| SubmissionError::Network { endpoint, source })?;

      let status = resp.status();
      if !status.is_success() {
        return Err(SubmissionError::Status { endpoint, status: status.as_u16() });
      }
      tracing::debug!(%url, %status, "submission accepted");
      Ok(())
    }
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
  };

  use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
  };
  use tokio::net::TcpListener;

  use super::*;

  /// What the stub endpoint saw.
  #[derive(Debug, Clone, Default)]
  pub(crate) struct Seen {
    pub requests: Vec<(String, Option<String>, serde_json::Value)>,
  }

  #[derive(Clone)]
  struct Stub {
    reply: StatusCode,
    seen:  Arc<Mutex<Seen>>,
  }

  async fn record(
    State(stub): State<Stub>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: String,
  ) -> StatusCode {
    let content_type = headers
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    stub.seen.lock().unwrap().requests.push((uri.path().to_string(), content_type, json));
    stub.reply
  }

  /// Serve both form endpoints on an ephemeral port, replying `reply`.
  pub(crate) async fn stub_site(reply: StatusCode) -> (SocketAddr, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let app = Router::new()
      .route("/api/contact", post(record))
      .route("/api/sample-request", post(record))
      .with_state(Stub { reply, seen: seen.clone() });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (addr, seen)
  }

  pub(crate) fn transport_for(addr: SocketAddr) -> HttpTransport {
    HttpTransport::new(TransportConfig {
      base_url: format!("http://{addr}/"),
      timeout:  Duration::from_secs(5),
    })
    .unwrap()
  }

  #[tokio::test]
  async fn posts_json_to_endpoint() {
    let (addr, seen) = stub_site(StatusCode::OK).await;
    let transport = transport_for(addr);

    transport
      .submit("/api/contact", &serde_json::json!({ "firstName": "Jane" }))
      .await
      .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.requests.len(), 1);
    let (path, content_type, body) = &seen.requests[0];
    assert_eq!(path, "/api/contact");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["firstName"], "Jane");
  }

  #[tokio::test]
  async fn any_2xx_is_success() {
    let (addr, _) = stub_site(StatusCode::NO_CONTENT).await;
    assert!(transport_for(addr).submit("/api/sample-request", &serde_json::json!({})).await.is_ok());
  }

  #[tokio::test]
  async fn non_2xx_is_an_error() {
    let (addr, seen) = stub_site(StatusCode::INTERNAL_SERVER_ERROR).await;
    let err = transport_for(addr)
      .submit("/api/contact", &serde_json::json!({}))
      .await
      .unwrap_err();
    assert!(matches!(err, SubmissionError::Status { status: 500, .. }), "{err}");
    assert_eq!(seen.lock().unwrap().requests.len(), 1);
  }

  #[tokio::test]
  async fn unknown_path_is_an_error() {
    let (addr, _) = stub_site(StatusCode::OK).await;
    let err = transport_for(addr)
      .submit("/api/newsletter", &serde_json::json!({}))
      .await
      .unwrap_err();
    assert!(matches!(err, SubmissionError::Status { status: 404, .. }));
  }

  #[tokio::test]
  async fn connection_refused_is_a_network_error() {
    // Grab a free port, then close it again.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport_for(addr)
      .submit("/api/contact", &serde_json::json!({}))
      .await
      .unwrap_err();
    assert!(matches!(err, SubmissionError::Network { .. }), "{err}");
  }

  #[test]
  fn base_url_trailing_slash_is_ignored() {
    let transport = HttpTransport::new(TransportConfig {
      base_url: "https://thindown.us/".into(),
      ..TransportConfig::default()
    })
    .unwrap();
    assert_eq!(transport.url("/api/contact"), "https://thindown.us/api/contact");
  }
}
