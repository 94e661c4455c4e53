use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!("CMD_START: {} by {}({}) in chat {}", command, user, user_id, chat_id);
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: u64, chat_id: i64, outcome: &str) {
    info!(
        "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, outcome
    );
}

/// Logs a command that ended in an expected refusal (no session, unregistered, ...)
pub fn log_command_rejected(command: &str, user: &str, user_id: u64, chat_id: i64, reason: &str) {
    warn!(
        "CMD_REJECTED: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, reason
    );
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs session store transitions
pub fn log_session_event(event: &str, user_key: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("SESSION: {} for {} - {}", event, user_key, d),
        None => debug!("SESSION: {} for {}", event, user_key),
    }
}

pub fn log_form_request(url: &str, display_name: &str) {
    debug!("FORM: POST {} for {}", url, display_name);
}

pub fn log_form_error(url: &str, display_name: &str, error: &str) {
    error!("FORM_ERROR: POST {} for {} failed: {}", url, display_name, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
