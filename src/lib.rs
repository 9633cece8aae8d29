pub mod api;
pub mod campaigns;
pub mod coerce;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod list_view;
pub mod models;
pub mod page_state;
pub mod resolver;
pub mod reward_history;
pub mod rewards;
pub mod settlements;
pub mod transactions;
pub mod transport;
pub mod users;

// Re-export types at crate root for convenient importing
pub use crate::api::{AdminClient, Resource};
pub use crate::config::Config;
pub use crate::error::{ApiError, ConfigError, Result, TransportError};
pub use crate::list_view::{ListState, ListView, derive_view};
pub use crate::page_state::{ErrorInfo, PageState};
pub use crate::resolver::EndpointResolver;
pub use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[cfg(feature = "native")]
pub use crate::transport::HttpTransport;
