use crate::bot::BotContext;
use crate::error::SessionError;
use crate::services::users::UserKey;
use crate::utils::datetime::{format_datetime, format_duration};
use crate::utils::feedback::Reply;
use crate::utils::logging::log_session_event;

pub fn handle_on(ctx: &BotContext, user: &UserKey) -> Reply {
    match ctx.sessions.begin(user.clone()) {
        Ok(started) => {
            log_session_event("begin", &user.to_string(), Some(&format_datetime(&started.started_at)));
            Reply::TimerStarted
        }
        Err(SessionError::AlreadyActive) => Reply::AlreadyActive,
        Err(SessionError::NoActiveSession) => Reply::NoActiveSession,
    }
}

/// Closes the session and submits it. The session is consumed before the
/// registration check, so an unregistered user never reaches the form.
///
/// `/on` and `/abort` only touch the store and stay synchronous; this is the
/// one transition that waits on the network.
pub async fn handle_off(ctx: &BotContext, user: &UserKey) -> Reply {
    let span = match ctx.sessions.end(user) {
        Ok(span) => span,
        Err(_) => return Reply::NoActiveSession,
    };
    log_session_event("end", &user.to_string(), Some(&format_duration(span.duration())));

    let Some(display_name) = ctx.users.display_name(user) else {
        log_session_event("discard_unregistered", &user.to_string(), None);
        return Reply::Unregistered {
            contact: ctx.registration_contact.clone(),
        };
    };

    match ctx
        .submitter
        .submit(display_name, &span.started_at, &span.ended_at)
        .await
    {
        Ok(()) => Reply::Submitted,
        Err(e) => {
            tracing::warn!("Form submission for {} failed: {}", user, e);
            Reply::SubmissionFailed
        }
    }
}

/// Discards the open session. Unregistered users keep theirs.
pub fn handle_abort(ctx: &BotContext, user: &UserKey) -> Reply {
    if !ctx.sessions.is_active(user) {
        return Reply::NoActiveSession;
    }

    if !ctx.users.is_registered(user) {
        return Reply::Unregistered {
            contact: ctx.registration_contact.clone(),
        };
    }

    match ctx.sessions.abort(user) {
        Ok(cancelled) => {
            log_session_event("abort", &user.to_string(), Some(&format_datetime(&cancelled.started_at)));
            Reply::Cancelled
        }
        Err(_) => Reply::NoActiveSession,
    }
}
