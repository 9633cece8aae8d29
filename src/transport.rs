//! The seam between the API client and whatever actually speaks HTTP.

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and reports the status and raw body. Non-2xx statuses
/// are not errors at this layer.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(feature = "native")]
pub use native::HttpTransport;

#[cfg(feature = "native")]
mod native {
    use reqwest::Client;
    use tracing::debug;

    use super::{ApiRequest, ApiResponse, Method, Transport};
    use crate::error::TransportError;

    /// `reqwest` backed transport for native builds.
    #[derive(Clone, Default)]
    pub struct HttpTransport {
        http: Client,
    }

    impl HttpTransport {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Transport for HttpTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.http.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            debug!("{} {} -> {}", request.method.as_str(), request.url, status);

            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;

            Ok(ApiResponse { status, body })
        }
    }
}
