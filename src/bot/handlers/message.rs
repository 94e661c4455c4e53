use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use crate::bot::commands::{timer, Command};
use crate::bot::handlers::HandlerResult;
use crate::bot::BotContext;
use crate::utils::feedback::{CommandFeedback, FeedbackType, Reply};
use crate::utils::logging::{
    log_command_error, log_command_rejected, log_command_start, log_command_success,
};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.clone());
    let display_user = username.as_deref().unwrap_or("unknown");

    log_command_start(cmd.name(), display_user, user_id, chat_id);

    let reply = dispatch_command(&ctx, &cmd, user_id, username.as_deref()).await;

    match reply.feedback_type() {
        FeedbackType::Success | FeedbackType::Info => {
            log_command_success(cmd.name(), display_user, user_id, chat_id, reply.outcome())
        }
        FeedbackType::Warning => {
            log_command_rejected(cmd.name(), display_user, user_id, chat_id, reply.outcome())
        }
        FeedbackType::Error => {
            log_command_error(cmd.name(), display_user, user_id, chat_id, reply.outcome())
        }
    }

    CommandFeedback::new(bot, msg.chat.id).send(&reply).await?;
    Ok(())
}

/// Resolves a command to its reply without touching Telegram.
pub async fn dispatch_command(
    ctx: &BotContext,
    cmd: &Command,
    user_id: u64,
    username: Option<&str>,
) -> Reply {
    match cmd {
        Command::Start => Reply::Welcome {
            bot_name: ctx.bot_name.clone(),
        },
        Command::Help => Reply::Help(Command::descriptions().to_string()),
        Command::On | Command::Off | Command::Abort => {
            let Some(user) = ctx.key_strategy.key_for(user_id, username) else {
                return Reply::MissingUsername;
            };

            match cmd {
                Command::On => timer::handle_on(ctx, &user),
                Command::Off => timer::handle_off(ctx, &user).await,
                _ => timer::handle_abort(ctx, &user),
            }
        }
    }
}
