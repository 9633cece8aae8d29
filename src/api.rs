use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

use crate::coerce::id_string;
use crate::config::Config;
use crate::credentials::CredentialProvider;
use crate::envelope::{self, decode_items, is_recognizable, unwrap_collection, unwrap_record};
use crate::error::{ApiError, Result};
use crate::resolver::EndpointResolver;
use crate::transport::{ApiRequest, Method, Transport};

/// Where a REST resource lives and how its responses are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path below the API base, e.g. `reward-history`
    pub path: &'static str,
    /// Key wrapping the list in `data.<key>` or `<key>`
    pub collection_key: &'static str,
    /// Key wrapping a single record in `data.<key>` or `<key>`
    pub record_key: &'static str,
    /// Field that must echo the requested id
    pub id_field: &'static str,
}

impl Resource {
    pub fn record_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, encode(id.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    Collection,
    Detail,
}

pub fn build_query_params(params: &[(&str, Option<String>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", encode(key), encode(v))))
        .collect();

    if query_parts.is_empty() {
        String::new()
    } else {
        format!("?{}", query_parts.join("&"))
    }
}

/// Admin API client. Every call walks the resolver's candidate URLs in order
/// and stops at the first acceptable response; requests are never issued
/// concurrently and a failed candidate is never retried.
pub struct AdminClient<T, C> {
    transport: T,
    credentials: C,
    resolver: EndpointResolver,
    fetch_limit: u32,
}

impl<T: Transport, C: CredentialProvider> AdminClient<T, C> {
    pub fn new(transport: T, credentials: C, resolver: EndpointResolver) -> Self {
        Self {
            transport,
            credentials,
            resolver,
            fetch_limit: crate::constants::DEFAULT_FETCH_LIMIT,
        }
    }

    pub fn from_config(transport: T, credentials: C, config: &Config) -> Self {
        Self::new(transport, credentials, EndpointResolver::from_config(config))
            .with_fetch_limit(config.fetch_limit)
    }

    pub fn with_fetch_limit(mut self, fetch_limit: u32) -> Self {
        self.fetch_limit = fetch_limit.max(1);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self, with_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if with_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.credentials.bearer_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    async fn get_json(&self, path: &str, key: &str, id_field: &str, mode: FetchMode) -> Result<Value> {
        let mut last_error: Option<ApiError> = None;

        for url in self.resolver.candidates(path) {
            let request = ApiRequest {
                method: Method::Get,
                url: url.clone(),
                headers: self.headers(false),
                body: None,
            };

            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(%url, error = %e, "endpoint unreachable");
                    last_error = Some(e.into());
                    continue;
                }
            };

            if response.status == 404 && mode == FetchMode::Detail {
                warn!(%url, "record not found");
                return Err(ApiError::NotFound { url });
            }

            if response.status != 200 {
                warn!(%url, status = response.status, "endpoint returned error status");
                last_error = Some(ApiError::HttpStatus {
                    status: response.status,
                    url,
                });
                continue;
            }

            let body: Value = match serde_json::from_str(&response.body) {
                Ok(body) => body,
                Err(e) => {
                    warn!(%url, error = %e, "endpoint returned invalid JSON");
                    last_error = Some(e.into());
                    continue;
                }
            };

            let recognizable = is_recognizable(&body, key)
                || (mode == FetchMode::Detail && body.get(id_field).is_some());
            if !recognizable {
                warn!(%url, "endpoint returned unexpected shape");
                last_error = Some(ApiError::Envelope { url });
                continue;
            }

            debug!(%url, "endpoint accepted");
            return Ok(body);
        }

        Err(last_error.unwrap_or(ApiError::NoEndpoint))
    }

    /// Fetches every record of a resource, capped by the configured limit.
    #[instrument(skip(self))]
    pub async fn fetch_collection<R: DeserializeOwned>(&self, resource: &Resource) -> Result<Vec<R>> {
        let query = build_query_params(&[
            ("limit", Some(self.fetch_limit.to_string())),
            ("offset", Some("0".to_string())),
        ]);
        let path = format!("{}{}", resource.path, query);
        self.fetch_list_at(&path, resource.collection_key).await
    }

    /// Fetches a list at an arbitrary path, e.g. `users/7/referrals`.
    #[instrument(skip(self))]
    pub async fn fetch_list_at<R: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<R>> {
        let body = self.get_json(path, key, "id", FetchMode::Collection).await?;
        let items = unwrap_collection(&body, key);
        Ok(decode_items(items, key))
    }

    /// Fetches one record and checks that it is the one that was asked for.
    #[instrument(skip(self))]
    pub async fn fetch_record<R: DeserializeOwned>(&self, resource: &Resource, id: &str) -> Result<R> {
        let path = resource.record_path(id);
        let body = self
            .get_json(&path, resource.record_key, resource.id_field, FetchMode::Detail)
            .await?;

        let record = unwrap_record(&body, resource.record_key)
            .ok_or_else(|| ApiError::Envelope { url: path.clone() })?;

        let found = record
            .get(resource.id_field)
            .and_then(id_string)
            .unwrap_or_else(|| "none".to_string());
        if found != id.trim() {
            return Err(ApiError::IdMismatch {
                expected: id.trim().to_string(),
                found,
            });
        }

        Ok(serde_json::from_value(record)?)
    }

    /// Sends a `DELETE` or `PATCH` to each candidate until one succeeds.
    #[instrument(skip(self))]
    pub async fn mutate(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        let payload = body.map(|b| b.to_string());
        let mut last_error: Option<ApiError> = None;

        for url in self.resolver.candidates(path) {
            let request = ApiRequest {
                method,
                url: url.clone(),
                headers: self.headers(payload.is_some()),
                body: payload.clone(),
            };

            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(%url, error = %e, "endpoint unreachable");
                    last_error = Some(e.into());
                    continue;
                }
            };

            if !response.is_success() {
                warn!(%url, status = response.status, "mutation rejected");
                last_error = Some(ApiError::HttpStatus {
                    status: response.status,
                    url,
                });
                continue;
            }

            let rejected = serde_json::from_str::<Value>(&response.body)
                .ok()
                .is_some_and(|v| v.get("success").is_some() && !envelope::is_success(&v));
            if rejected {
                warn!(%url, "mutation reported success: false");
                last_error = Some(ApiError::Envelope { url });
                continue;
            }

            debug!(%url, "{} succeeded", method.as_str());
            return Ok(());
        }

        Err(last_error.unwrap_or(ApiError::NoEndpoint))
    }

    pub async fn delete(&self, resource: &Resource, id: &str) -> Result<()> {
        self.mutate(Method::Delete, &resource.record_path(id), None).await
    }

    pub async fn set_active(&self, resource: &Resource, id: &str, active: bool) -> Result<()> {
        let body = serde_json::json!({ "is_active": if active { 1 } else { 0 } });
        self.mutate(Method::Patch, &resource.record_path(id), Some(body))
            .await
    }
}
