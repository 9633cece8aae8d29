use std::future::Future;

use rewards_admin::constants::{
    ENV_API_BASE_URL, ENV_ENDPOINT_TEMPLATES, ENV_FETCH_LIMIT, ERR_MUTATION_FAILED,
};
use rewards_admin::credentials::{StoredToken, TokenStore};
use rewards_admin::{AdminClient, ApiRequest, ApiResponse, Config, Result, Transport, TransportError};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub type Client = AdminClient<FetchTransport, StoredToken<BrowserStorage>>;

/// `window.fetch` transport. Cookies are always sent along.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        use web_sys::{RequestCredentials, RequestInit, RequestMode};

        let fail = |msg: &str| TransportError(msg.to_string());

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);

        let headers = web_sys::Headers::new().map_err(|_| fail("Failed to create headers"))?;
        for (name, value) in &request.headers {
            headers
                .set(name, value)
                .map_err(|_| fail("Failed to set header"))?;
        }
        opts.set_headers(&headers);

        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let window = web_sys::window().ok_or_else(|| fail("No window"))?;
        let req = web_sys::Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|_| fail("Failed to create request"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|_| fail("Fetch failed"))?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| fail("Invalid response"))?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(|_| fail("Failed to get text"))?)
            .await
            .map_err(|_| fail("Failed to read text"))?;

        Ok(ApiResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// Browser storage searched for a bearer token.
#[derive(Clone, Copy, PartialEq)]
pub enum BrowserStorage {
    Local,
    Session,
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = match self {
            BrowserStorage::Local => window.local_storage(),
            BrowserStorage::Session => window.session_storage(),
        }
        .ok()??;
        storage.get_item(key).ok()?
    }
}

// Base URL and templates are fixed at build time
pub fn config() -> Config {
    let lookup = |key: &str| {
        let value = match key {
            ENV_API_BASE_URL => option_env!("REWARDS_API_BASE_URL"),
            ENV_ENDPOINT_TEMPLATES => option_env!("REWARDS_ENDPOINT_TEMPLATES"),
            ENV_FETCH_LIMIT => option_env!("REWARDS_FETCH_LIMIT"),
            _ => None,
        };
        value.map(str::to_string)
    };

    Config::from_lookup(lookup).unwrap_or_else(|e| {
        warn!(error = %e, "invalid build-time configuration, using defaults");
        Config::default()
    })
}

pub fn client() -> Client {
    let credentials = StoredToken::new(vec![BrowserStorage::Local, BrowserStorage::Session]);
    AdminClient::from_config(FetchTransport, credentials, &config())
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Awaits a mutation and reports the outcome in a native alert. Returns
/// whether the page should refetch.
pub async fn run_action(action: impl Future<Output = Result<()>>, success: &str) -> bool {
    match action.await {
        Ok(()) => {
            alert(success);
            true
        }
        Err(e) => {
            warn!(error = %e, "action failed");
            alert(ERR_MUTATION_FAILED);
            false
        }
    }
}
