use teloxide::prelude::*;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::{CommandFeedback, Reply};

/// Plain text gets a reply. Unknown `/commands`, including ones addressed to
/// other bots, are ignored.
pub fn is_free_text(text: &str) -> bool {
    !text.trim_start().starts_with('/')
}

/// Any text message that is not a command
pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);
    tracing::debug!("Unrecognised message from {} in chat {}", user_id, msg.chat.id.0);

    CommandFeedback::new(bot, msg.chat.id)
        .send(&Reply::NotUnderstood)
        .await?;

    Ok(())
}
