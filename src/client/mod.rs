//! Hetzner Cloud API client.
//!
//! Thin HTTP layer: bearer-token auth, envelope unwrapping, error mapping.
//! The client is constructed once at startup and shared read-only behind an
//! `Arc`; handlers receive it by injection, so tests can point the endpoint
//! at a local HTTP double.

pub mod resources;

use crate::types::{ApiConfig, Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Error envelope the API wraps failures in.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    code: String,
    message: String,
}

/// HTTP client for the cloud API.
#[derive(Debug, Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CloudClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::configuration("token contains invalid header characters"))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    /// Perform one request. Returns `Ok(None)` for 404, the decoded body
    /// for success, and a `Remote` error decoded from the API's error
    /// envelope otherwise.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "api request");
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(decode_api_error(status, &text));
        }

        if text.is_empty() {
            return Ok(Some(Value::Null));
        }
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| Error::remote("malformed_response", e.to_string()))?;
        Ok(Some(value))
    }

    /// GET a collection, unwrapping the `{key: [...]}` envelope.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>> {
        let body = self
            .send(Method::GET, path, None)
            .await?
            .ok_or_else(|| Error::not_found(path.to_string()))?;
        member(body, key)
    }

    /// GET a single resource, unwrapping the `{key: {...}}` envelope.
    /// `Ok(None)` when the resource does not exist.
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Option<T>> {
        match self.send(Method::GET, path, None).await? {
            Some(body) => Ok(Some(member(body, key)?)),
            None => Ok(None),
        }
    }

    /// Resolve a resource by ID or name: numeric input is a direct lookup,
    /// anything else goes through the collection's `?name=` filter.
    pub async fn get_by_id_or_name<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: &str,
        id_or_name: &str,
    ) -> Result<Option<T>> {
        if id_or_name.parse::<i64>().is_ok() {
            self.get_one(&format!("{collection}/{id_or_name}"), key).await
        } else {
            let matches: Vec<T> = self
                .get_list(&format!("{collection}?name={id_or_name}"), collection)
                .await?;
            Ok(matches.into_iter().next())
        }
    }

    /// POST a creation request, returning the raw response body (some
    /// endpoints return more than one top-level key, e.g. firewall
    /// creation returns the firewall plus its apply actions).
    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        let body = to_body(body)?;
        self.send(Method::POST, path, Some(&body))
            .await?
            .ok_or_else(|| Error::not_found(path.to_string()))
    }

    /// PUT an update request, unwrapping the `{key: {...}}` envelope.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let body = to_body(body)?;
        let response = self
            .send(Method::PUT, path, Some(&body))
            .await?
            .ok_or_else(|| Error::not_found(path.to_string()))?;
        member(response, key)
    }

    /// DELETE a resource. A 404 here is surfaced as `NotFound` — deletion
    /// of something that does not exist is an error, not a no-op.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None)
            .await?
            .ok_or_else(|| Error::not_found(path.to_string()))?;
        Ok(())
    }
}

fn to_body(body: &impl Serialize) -> Result<Value> {
    serde_json::to_value(body).map_err(Error::from)
}

/// Extract and decode one member of a response envelope.
fn member<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| Error::remote("malformed_response", format!("missing '{key}' in response")))?;
    serde_json::from_value(value)
        .map_err(|e| Error::remote("malformed_response", e.to_string()))
}

fn decode_api_error(status: StatusCode, text: &str) -> Error {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(body) => Error::remote(body.error.code, body.error.message),
        Err(_) => Error::remote(
            status.as_str().to_string(),
            if text.is_empty() {
                status.to_string()
            } else {
                text.to_string()
            },
        ),
    }
}
