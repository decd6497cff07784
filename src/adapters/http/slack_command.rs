//! Slash-command endpoint. Form-encoded request in, block-kit JSON out.

use super::AppState;
use super::slack_message::{CommandContext, SlackMessage, render_outcome};
use crate::usecases::parse_command;
use axum::{Form, Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Channel names the chat platform sends for conversations that have no usable name.
const UNNAMED_CHANNELS: [&str; 2] = ["directmessage", "privategroup"];

/// Slash-command form. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct SlackCommandForm {
    #[serde(default)]
    pub team_domain: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub response_url: Option<String>,
}

/// Alias to fall back on when the command names none: the channel name,
/// unless it is a direct message or private group placeholder.
pub fn channel_default_alias(channel_name: Option<&str>) -> Option<&str> {
    let name = channel_name?.trim();
    if name.is_empty()
        || UNNAMED_CHANNELS
            .iter()
            .any(|sentinel| name.eq_ignore_ascii_case(sentinel))
    {
        return None;
    }
    Some(name)
}

/// POST /api/slack/meet
pub async fn slack_command(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SlackCommandForm>,
) -> Json<SlackMessage> {
    let text = form.text.as_deref().unwrap_or_default();
    let group = form.team_domain.as_deref().unwrap_or_default();
    let ctx = CommandContext {
        channel_id: form.channel_id.clone().unwrap_or_default(),
        user_name: form.user_name.clone().unwrap_or_default(),
        command: form.command.clone().unwrap_or_default(),
    };

    let intent = parse_command(text);
    info!(
        group,
        channel = form.channel_name.as_deref().unwrap_or_default(),
        user = %ctx.user_name,
        operation = ?intent.operation,
        "slash command"
    );

    let default_alias = channel_default_alias(form.channel_name.as_deref());
    match state.commands.resolve(intent, group, default_alias).await {
        Ok(outcome) => {
            debug!(
                group,
                alias = outcome.alias().unwrap_or_default(),
                kind = ?outcome.kind(),
                "slash command resolved"
            );
            Json(render_outcome(&outcome, &state.links, &ctx))
        }
        Err(e) => {
            error!(group, error = %e, "slash command failed");
            Json(SlackMessage::failure(ctx.channel_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_default_alias() {
        assert_eq!(channel_default_alias(Some("general")), Some("general"));
        assert_eq!(channel_default_alias(Some("directmessage")), None);
        assert_eq!(channel_default_alias(Some("DirectMessage")), None);
        assert_eq!(channel_default_alias(Some("privategroup")), None);
        assert_eq!(channel_default_alias(Some("  ")), None);
        assert_eq!(channel_default_alias(None), None);
    }
}
