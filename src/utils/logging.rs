use serde::Serialize;
use tracing::{Level, debug};

/// Logs a request payload as pretty JSON at DEBUG.
///
/// Serialization is skipped entirely unless DEBUG is enabled for this module.
pub(crate) fn debug_payload<T: Serialize>(route: &str, id: Option<i64>, payload: &T) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let pretty = serde_json::to_string_pretty(payload)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
    match id {
        Some(id) => debug!(route, id, "payload:\n{pretty}"),
        None => debug!(route, "payload:\n{pretty}"),
    }
}
