// Legacy time-tracking (TM) bridge
//
// Plain-text request/response surface for the legacy desktop client. The
// proprietary login/session scheme is handled upstream; the client arrives
// with an X-TM-Token header carrying its employee id. Responses are the
// protocol's fixed strings, never JSON, and the only error channel is the
// "Not logged in" reply.

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use uuid::Uuid;
use workbench_core::Status;

use crate::attendance::AppState;

const TOKEN_HEADER: &str = "x-tm-token";
const NOT_LOGGED_IN: &str = "Not logged in";

/// Source tag for events written by the legacy client
const TM_SOURCE: &str = "tm";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/tm/status", get(tm_status))
        .route("/tm/action", post(tm_action))
        .with_state(state)
}

/// Map an internal status to the protocol's fixed response strings.
pub fn protocol_reply(status: Status) -> &'static str {
    match status {
        Status::Come | Status::Awake => "Here",
        Status::Away => "Away",
        Status::Leave => "Out",
    }
}

/// Map a legacy action verb to the status it requests.
pub fn action_status(action: &str) -> Option<Status> {
    match action {
        "come" => Some(Status::Come),
        "awake" => Some(Status::Awake),
        "away" => Some(Status::Away),
        "go" => Some(Status::Leave),
        _ => None,
    }
}

fn employee_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// GET /tm/status - the legacy "where am I" poll
///
/// Repeated polls are reads, never transitions.
async fn tm_status(State(state): State<AppState>, headers: HeaderMap) -> String {
    let Some(employee_id) = employee_from_headers(&headers) else {
        return NOT_LOGGED_IN.to_string();
    };
    match state.service.current_status(employee_id).await {
        Ok(Some(current)) => protocol_reply(current.status).to_string(),
        Ok(None) => NOT_LOGGED_IN.to_string(),
        Err(e) => {
            tracing::error!("TM status read failed: {}", e);
            NOT_LOGGED_IN.to_string()
        }
    }
}

/// POST /tm/action - explicit come/away/awake/go from the client
///
/// The reply is always the resulting status string; a same-status action is
/// harmless and answered with the current string.
async fn tm_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> String {
    let Some(employee_id) = employee_from_headers(&headers) else {
        return NOT_LOGGED_IN.to_string();
    };
    let Some(status) = action_status(body.trim()) else {
        return NOT_LOGGED_IN.to_string();
    };
    match state
        .service
        .set_status(employee_id, status, TM_SOURCE, None)
        .await
    {
        Ok(Some(change)) => protocol_reply(change.status).to_string(),
        Ok(None) => NOT_LOGGED_IN.to_string(),
        Err(e) => {
            tracing::error!("TM action failed: {}", e);
            NOT_LOGGED_IN.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_strings_are_fixed() {
        assert_eq!(protocol_reply(Status::Come), "Here");
        assert_eq!(protocol_reply(Status::Awake), "Here");
        assert_eq!(protocol_reply(Status::Away), "Away");
        assert_eq!(protocol_reply(Status::Leave), "Out");
    }

    #[test]
    fn legacy_verbs_map_to_statuses() {
        assert_eq!(action_status("come"), Some(Status::Come));
        assert_eq!(action_status("awake"), Some(Status::Awake));
        assert_eq!(action_status("away"), Some(Status::Away));
        assert_eq!(action_status("go"), Some(Status::Leave));
        assert_eq!(action_status("dance"), None);
    }
}
