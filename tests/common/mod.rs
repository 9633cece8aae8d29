use std::collections::HashMap;
use std::sync::Mutex;

use axum::Router;
use rewards_admin::{
    AdminClient, ApiRequest, ApiResponse, EndpointResolver, Transport, TransportError,
    credentials::{Anonymous, StaticToken},
};
use serde_json::{Value, json};

pub const TEST_BASE: &str = "http://api.test";

#[derive(Clone)]
enum Reply {
    Respond(u16, String),
    Unreachable(String),
}

/// In-memory transport answering from a fixed URL -> reply table and
/// recording every request it sees. Unknown URLs are unreachable.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: Value) -> Self {
        self.respond_raw(url, status, &body.to_string())
    }

    pub fn respond_raw(self, url: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .insert(url.to_string(), Reply::Respond(status, body.to_string()));
        self
    }

    pub fn unreachable(self, url: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .insert(url.to_string(), Reply::Unreachable("connection refused".to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Reply::Unreachable(format!("no route to {}", request.url)));
        self.requests.lock().expect("requests lock").push(request);

        match reply {
            Reply::Respond(status, body) => Ok(ApiResponse { status, body }),
            Reply::Unreachable(reason) => Err(TransportError(reason)),
        }
    }
}

pub fn default_resolver() -> EndpointResolver {
    EndpointResolver::new(
        TEST_BASE,
        vec![
            "{base}/{path}".to_string(),
            "/api/{path}".to_string(),
            "/{path}".to_string(),
        ],
    )
}

#[allow(dead_code)]
pub fn scripted_client(transport: ScriptedTransport) -> AdminClient<ScriptedTransport, Anonymous> {
    AdminClient::new(transport, Anonymous, default_resolver())
}

#[allow(dead_code)]
pub fn scripted_client_with_token(
    transport: ScriptedTransport,
    token: &str,
) -> AdminClient<ScriptedTransport, StaticToken> {
    AdminClient::new(transport, StaticToken(token.to_string()), default_resolver())
}

/// Collection URL for the primary candidate, including the default query.
#[allow(dead_code)]
pub fn list_url(path: &str) -> String {
    format!("{}/{}?limit=1000&offset=0", TEST_BASE, path)
}

/// Serves `router` on an ephemeral local port and returns its origin.
#[allow(dead_code)]
pub async fn spawn_backend(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

#[allow(dead_code)]
pub fn campaign_json(id: i64, title: &str, campaign_type: &str, active: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "campaign_type": campaign_type,
        "is_active": if active { 1 } else { 0 },
        "reward_count": "3",
        "total_spins": 120,
        "max_attempts_per_interval": "2",
        "start_date": "2024-01-01",
        "end_date": "2024-12-31",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

#[allow(dead_code)]
pub fn history_json(id: i64, user_name: &str, credit_debit: &str, amount: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "user_name": user_name,
        "user_email": format!("{}@example.com", user_name.to_lowercase()),
        "reward_type": "cashback",
        "reward_name": "Weekly Spin",
        "amount": amount,
        "credit_debit": credit_debit,
        "transaction_number": format!("TXN-{}", id),
        "store_name": "Corner Store",
        "created_at": created_at
    })
}
