//! Slash-command text -> `Intent`.
//!
//! Grammar (whitespace-delimited, keywords case-insensitive):
//! - `force` anywhere sets `force_update` and is dropped before positional parsing
//! - ``                   -> get, empty alias
//! - `help ...`           -> help
//! - `set [code] [alias]` -> set
//! - `<alias> ...`        -> get
//!
//! Tokens past the positional slots are discarded. Parsing never fails.

use crate::domain::{Intent, Operation};

const FORCE_TOKEN: &str = "force";
const SET_KEYWORD: &str = "set";
const HELP_KEYWORD: &str = "help";

pub fn parse_command(raw: &str) -> Intent {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let force_update = tokens.iter().any(|t| t.eq_ignore_ascii_case(FORCE_TOKEN));
    let rest: Vec<&str> = tokens
        .into_iter()
        .filter(|t| !t.eq_ignore_ascii_case(FORCE_TOKEN))
        .collect();

    let slot = |i: usize| rest.get(i).copied().unwrap_or_default().to_string();

    let (operation, alias, code) = match rest.first() {
        None => (Operation::Get, String::new(), String::new()),
        Some(t) if t.eq_ignore_ascii_case(HELP_KEYWORD) => {
            (Operation::Help, String::new(), String::new())
        }
        Some(t) if t.eq_ignore_ascii_case(SET_KEYWORD) => (Operation::Set, slot(2), slot(1)),
        Some(alias) => (Operation::Get, alias.to_string(), String::new()),
    };

    Intent {
        operation,
        alias,
        code,
        force_update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_with_code_alias_and_force() {
        let intent = parse_command("set ABC123 room1 force");
        assert_eq!(intent, Intent::set("room1", "ABC123", true));
    }

    #[test]
    fn test_force_is_position_independent() {
        let intent = parse_command("FORCE set ABC123 room1");
        assert_eq!(intent, Intent::set("room1", "ABC123", true));

        let intent = parse_command("set force ABC123");
        assert_eq!(intent, Intent::set("", "ABC123", true));
    }

    #[test]
    fn test_bare_alias_is_get() {
        assert_eq!(parse_command("room1"), Intent::get("room1"));
        assert_eq!(parse_command("room1 extra tokens"), Intent::get("room1"));
    }

    #[test]
    fn test_empty_and_whitespace_are_get_without_alias() {
        assert_eq!(parse_command(""), Intent::get(""));
        assert_eq!(parse_command("   \t  "), Intent::get(""));
    }

    #[test]
    fn test_help_ignores_remaining_tokens() {
        let intent = parse_command("help anything");
        assert_eq!(intent.operation, Operation::Help);
        assert!(intent.alias.is_empty());

        assert_eq!(parse_command("HeLp").operation, Operation::Help);
    }

    #[test]
    fn test_set_without_code_yields_empty_code() {
        let intent = parse_command("set");
        assert_eq!(intent, Intent::set("", "", false));
    }

    #[test]
    fn test_keywords_case_insensitive_values_preserved() {
        let intent = parse_command("  SET   AbC-dEf   Standup  ");
        assert_eq!(intent, Intent::set("Standup", "AbC-dEf", false));
    }

    #[test]
    fn test_only_force_token_is_get_without_alias() {
        let intent = parse_command("force");
        assert_eq!(intent.operation, Operation::Get);
        assert!(intent.alias.is_empty());
        assert!(intent.force_update);
    }
}
