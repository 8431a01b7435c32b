//! Weaver client: backend wire protocol and request dispatch.
mod api;
mod client;
mod dispatch;
mod types;

pub use api::ApiRequest;
pub use client::{Backend, ClientSettings, ReqwestBackend, DEFAULT_BASE_URL};
pub use dispatch::ClientHandle;
pub use types::{ApiError, ApiOutput, ClientEvent, FailureKind, RequestId};
