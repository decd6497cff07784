//! Direct API: `GET|POST /api/meet?alias=&group=`. Plain-text responses.
//!
//! No command parsing here; the query names the entry and the JSON body carries the code.

use super::AppState;
use crate::domain::{DomainError, Intent, Outcome, ValidationError};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, de};
use std::sync::Arc;
use tracing::{error, info};

type ApiResponse = (StatusCode, String);

#[derive(Debug, Default, Deserialize)]
pub struct MeetQuery {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl MeetQuery {
    /// Both parameters, non-blank, or a 400.
    fn require(&self) -> Result<(&str, &str), ApiResponse> {
        let alias = self.alias.as_deref().map(str::trim).unwrap_or_default();
        let group = self.group.as_deref().map(str::trim).unwrap_or_default();
        if alias.is_empty() || group.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                "Both \"alias\" and \"group\" parameters are required.".to_string(),
            ));
        }
        Ok((alias, group))
    }
}

/// POST body. `force` takes a JSON bool or the strings "true"/"false".
#[derive(Debug, Default, Deserialize)]
pub struct SaveMeetRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_force")]
    pub force: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForceFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_force<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Option::<ForceFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(ForceFlag::Bool(b)) => Ok(b),
        Some(ForceFlag::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid force value \"{}\", expected \"true\" or \"false\"",
                other
            ))),
        },
    }
}

impl SaveMeetRequest {
    /// Parse the raw body. An empty body is a request without a code.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| format!("Invalid request body: {}", e))
    }
}

fn storage_failure(e: DomainError) -> ApiResponse {
    error!(error = %e, "directory request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "The meeting room directory is unavailable right now, please try again later.".to_string(),
    )
}

/// GET /api/meet
pub async fn get_meet(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MeetQuery>,
) -> ApiResponse {
    let (alias, group) = match query.require() {
        Ok(params) => params,
        Err(resp) => return resp,
    };
    info!(alias, group, "meet lookup");

    let outcome = match state
        .commands
        .resolve(Intent::get(alias), group, None)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return storage_failure(e),
    };

    match outcome {
        Outcome::Found { code, .. } => (StatusCode::OK, state.links.link(&code)),
        Outcome::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            "Meeting room was not found. Please make sure you have included the correct values for alias and group.".to_string(),
        ),
        other => unexpected(other),
    }
}

/// POST /api/meet
pub async fn save_meet(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MeetQuery>,
    body: Bytes,
) -> ApiResponse {
    let (alias, group) = match query.require() {
        Ok(params) => params,
        Err(resp) => return resp,
    };
    let request = match SaveMeetRequest::from_body(&body) {
        Ok(request) => request,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg),
    };
    let code = request.code.as_deref().map(str::trim).unwrap_or_default();
    info!(alias, group, force = request.force, "meet save");

    let intent = Intent::set(alias, code, request.force);
    let outcome = match state.commands.resolve(intent, group, None).await {
        Ok(outcome) => outcome,
        Err(e) => return storage_failure(e),
    };

    // Any existing entry needs force on this surface, even when the code is the same.
    match outcome {
        Outcome::Unchanged { alias, .. } if !request.force => already_exists(&alias),
        Outcome::Created { alias, code }
        | Outcome::Updated { alias, code, .. }
        | Outcome::Unchanged { alias, code } => (
            StatusCode::OK,
            format!(
                "Meet code \"{}\" has been saved for alias \"{}\"",
                code, alias
            ),
        ),
        Outcome::ConflictNeedsForce { alias } => already_exists(&alias),
        Outcome::Invalid(ValidationError::CodeRequired) => (
            StatusCode::BAD_REQUEST,
            "Meet code is required.".to_string(),
        ),
        other => unexpected(other),
    }
}

fn already_exists(alias: &str) -> ApiResponse {
    (
        StatusCode::BAD_REQUEST,
        format!(
            "Meeting room for \"{}\" already exists. Please include \"force\": \"true\" if you want to replace the code.",
            alias
        ),
    )
}

fn unexpected(outcome: Outcome) -> ApiResponse {
    match outcome {
        Outcome::Invalid(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        other => {
            error!(outcome = ?other, "unexpected outcome for direct API");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected result.".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_accepts_bool_and_strings() {
        let req = SaveMeetRequest::from_body(br#"{"code":"abc","force":"TRUE"}"#).unwrap();
        assert_eq!(req.code.as_deref(), Some("abc"));
        assert!(req.force);

        let req = SaveMeetRequest::from_body(br#"{"code":"abc","force":true}"#).unwrap();
        assert!(req.force);

        let req = SaveMeetRequest::from_body(br#"{"code":"abc","force":"false"}"#).unwrap();
        assert!(!req.force);

        let req = SaveMeetRequest::from_body(br#"{"code":"abc"}"#).unwrap();
        assert!(!req.force);

        let req = SaveMeetRequest::from_body(br#"{"code":"abc","force":null}"#).unwrap();
        assert!(!req.force);
    }

    #[test]
    fn test_rejects_invalid_force_and_code_types() {
        assert!(SaveMeetRequest::from_body(br#"{"code":"abc","force":"yes"}"#).is_err());
        assert!(SaveMeetRequest::from_body(br#"{"code":42}"#).is_err());
        assert!(SaveMeetRequest::from_body(b"not json").is_err());
    }

    #[test]
    fn test_empty_body_has_no_code() {
        let req = SaveMeetRequest::from_body(b"  \n").unwrap();
        assert!(req.code.is_none());
        assert!(!req.force);
    }

    #[test]
    fn test_query_requires_both_params() {
        let query = MeetQuery {
            alias: Some("a".into()),
            group: None,
        };
        let (status, _) = query.require().unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let query = MeetQuery {
            alias: Some(" a ".into()),
            group: Some("g".into()),
        };
        assert_eq!(query.require().unwrap(), ("a", "g"));
    }
}
