use crate::registry::SYSTEM_NAME;

/// Desktop notification after an export; failures only log.
pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname("tatva-tokens")
        .summary(&format!("{SYSTEM_NAME} tokens exported"))
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}
