//! Block-kit response payload for the slash command, and outcome -> message rendering.

use super::links::MeetLinks;
use crate::domain::{Outcome, OutcomeKind, ValidationError};
use serde::Serialize;

const DEFAULT_COMMAND: &str = "/meet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to everyone in the channel.
    InChannel,
    /// Visible only to the caller.
    Ephemeral,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    pub channel: String,
    pub response_type: ResponseType,
    pub blocks: Vec<MessageBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: MessageBlockText,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBlockText {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: String,
}

impl SlackMessage {
    pub fn new(channel: impl Into<String>, response_type: ResponseType) -> Self {
        Self {
            channel: channel.into(),
            response_type,
            blocks: Vec::new(),
        }
    }

    /// Append a `section` block with mrkdwn text.
    pub fn add_section(&mut self, markdown: impl Into<String>) -> &mut Self {
        self.blocks.push(MessageBlock {
            block_type: "section".to_string(),
            text: MessageBlockText {
                text_type: "mrkdwn".to_string(),
                text: markdown.into(),
            },
        });
        self
    }

    /// Generic failure shown when the directory is unreachable.
    pub fn failure(channel: impl Into<String>) -> Self {
        let mut msg = Self::new(channel, ResponseType::Ephemeral);
        msg.add_section("*Failed*. The meeting room directory is unavailable right now, please try again later.");
        msg
    }
}

/// Who asked, and where. Copied from the slash-command form.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub channel_id: String,
    pub user_name: String,
    pub command: String,
}

impl CommandContext {
    fn command(&self) -> &str {
        if self.command.trim().is_empty() {
            DEFAULT_COMMAND
        } else {
            self.command.trim()
        }
    }
}

/// Render an outcome. Found/Created/Updated go to the channel; everything else is ephemeral.
pub fn render_outcome(outcome: &Outcome, links: &MeetLinks, ctx: &CommandContext) -> SlackMessage {
    let response_type = match outcome.kind() {
        OutcomeKind::Found | OutcomeKind::Created | OutcomeKind::Updated => {
            ResponseType::InChannel
        }
        _ => ResponseType::Ephemeral,
    };
    let mut msg = SlackMessage::new(ctx.channel_id.as_str(), response_type);

    match outcome {
        Outcome::Found { alias, code } => {
            msg.add_section(format!(
                "Meeting room for `{}` is {}",
                alias,
                links.link(code)
            ));
        }
        Outcome::NotFound { alias } => {
            msg.add_section(format!(
                "Sorry, no meeting room was configured for `{}` yet.",
                alias
            ));
        }
        Outcome::Created { alias, code } => {
            msg.add_section(format!(
                "@{} has set the meeting room for `{}` to {}.",
                ctx.user_name,
                alias,
                links.link(code)
            ));
        }
        Outcome::Updated {
            alias,
            code,
            previous_code,
        } => {
            msg.add_section(format!(
                "@{} has updated the meeting room for `{}` to {}.",
                ctx.user_name,
                alias,
                links.link(code)
            ));
            msg.add_section(format!("Previously: {}", links.link(previous_code)));
        }
        Outcome::Unchanged { alias, code } => {
            msg.add_section(format!(
                "Well, `{}` has been configured as the meeting room for `{}` before. But, thanks for your effort!",
                code, alias
            ));
        }
        Outcome::ConflictNeedsForce { alias } => {
            msg.add_section(format!(
                "Oops, the meeting room for `{}` has been configured before. If you want to update it, please include `force` parameter in the end of the command.",
                alias
            ));
        }
        Outcome::Invalid(err) => {
            msg.add_section(validation_message(*err));
        }
        Outcome::Help => {
            msg.add_section(help_text(ctx.command()));
        }
    }
    msg
}

fn validation_message(err: ValidationError) -> &'static str {
    match err {
        ValidationError::AliasRequired => {
            "*Failed*. You need to include `room-alias` as parameter in the command."
        }
        ValidationError::CodeRequired => {
            "*Failed*. You need to include `room-code` as parameter in the command."
        }
        ValidationError::GroupRequired => {
            "*Failed*. The request did not say which workspace it came from."
        }
    }
}

fn help_text(command: &str) -> String {
    let lines = [
        "*Description*".to_string(),
        format!("`{command}` is a simple command to get or set a meeting room which associates to certain channel or an alias."),
        String::new(),
        "*GET Usage*".to_string(),
        format!("  - `{command}`              : display meeting room for current *public* channel"),
        format!("  - `{command} [room-alias]` : display meeting room by the alias. The alias could be the channel name."),
        String::new(),
        "*SET Usage*".to_string(),
        format!("  - `{command} set [room-code]`  : set meeting room for current *public* channel"),
        format!("  - `{command} set [room-code] [room-alias]` : set meeting room with an alias. The alias could be the channel name."),
        String::new(),
        "*Note*: If the meeting room for the channel/alias exist, you need to add `force` parameter in the end of the command to update the value.".to_string(),
        String::new(),
        "*HELP Usage*".to_string(),
        format!("  - `{command} help`         : display help"),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CommandContext {
        CommandContext {
            channel_id: "C123".into(),
            user_name: "ana".into(),
            command: "/meet".into(),
        }
    }

    fn first_text(msg: &SlackMessage) -> &str {
        &msg.blocks[0].text.text
    }

    #[test]
    fn test_payload_shape() {
        let outcome = Outcome::Found {
            alias: "standup".into(),
            code: "abc".into(),
        };
        let msg = render_outcome(&outcome, &MeetLinks::default(), &ctx());
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["channel"], "C123");
        assert_eq!(json["response_type"], "in_channel");
        assert_eq!(json["blocks"][0]["type"], "section");
        assert_eq!(json["blocks"][0]["text"]["type"], "mrkdwn");
        assert_eq!(
            json["blocks"][0]["text"]["text"],
            "Meeting room for `standup` is https://meet.google.com/abc"
        );
    }

    #[test]
    fn test_response_type_mapping() {
        let links = MeetLinks::default();
        let cases = [
            (
                Outcome::Found {
                    alias: "a".into(),
                    code: "X".into(),
                },
                ResponseType::InChannel,
            ),
            (
                Outcome::Created {
                    alias: "a".into(),
                    code: "X".into(),
                },
                ResponseType::InChannel,
            ),
            (
                Outcome::Updated {
                    alias: "a".into(),
                    code: "Y".into(),
                    previous_code: "X".into(),
                },
                ResponseType::InChannel,
            ),
            (Outcome::NotFound { alias: "a".into() }, ResponseType::Ephemeral),
            (
                Outcome::Unchanged {
                    alias: "a".into(),
                    code: "X".into(),
                },
                ResponseType::Ephemeral,
            ),
            (
                Outcome::ConflictNeedsForce { alias: "a".into() },
                ResponseType::Ephemeral,
            ),
            (
                Outcome::Invalid(ValidationError::AliasRequired),
                ResponseType::Ephemeral,
            ),
            (Outcome::Help, ResponseType::Ephemeral),
        ];
        for (outcome, expected) in cases {
            let msg = render_outcome(&outcome, &links, &ctx());
            assert_eq!(msg.response_type, expected, "{:?}", outcome);
        }
    }

    #[test]
    fn test_updated_mentions_user_and_previous_link() {
        let outcome = Outcome::Updated {
            alias: "standup".into(),
            code: "new".into(),
            previous_code: "old".into(),
        };
        let msg = render_outcome(&outcome, &MeetLinks::new("https://m.test"), &ctx());
        assert_eq!(
            first_text(&msg),
            "@ana has updated the meeting room for `standup` to https://m.test/new."
        );
        assert_eq!(msg.blocks[1].text.text, "Previously: https://m.test/old");
    }

    #[test]
    fn test_help_uses_invoked_command_name() {
        let mut ctx = ctx();
        ctx.command = "/room".into();
        let msg = render_outcome(&Outcome::Help, &MeetLinks::default(), &ctx);
        assert!(first_text(&msg).contains("`/room set [room-code]`"));

        ctx.command = String::new();
        let msg = render_outcome(&Outcome::Help, &MeetLinks::default(), &ctx);
        assert!(first_text(&msg).contains("`/meet help`"));
    }

    #[test]
    fn test_validation_messages() {
        let msg = render_outcome(
            &Outcome::Invalid(ValidationError::CodeRequired),
            &MeetLinks::default(),
            &ctx(),
        );
        assert!(first_text(&msg).contains("`room-code`"));
    }
}
