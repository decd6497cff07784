//! HTTP surfaces: direct API and slash-command endpoint.

pub mod links;
pub mod meet_api;
pub mod slack_command;
pub mod slack_message;

use crate::ports::CommandPort;
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;

pub use links::{DEFAULT_BASE_MEET_URL, MeetLinks};

/// Shared handler state.
pub struct AppState {
    pub commands: Arc<dyn CommandPort>,
    pub links: MeetLinks,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/meet", get(meet_api::get_meet).post(meet_api::save_meet))
        .route("/api/slack/meet", post(slack_command::slack_command))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
}
