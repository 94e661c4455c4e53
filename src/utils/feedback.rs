use teloxide::prelude::*;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

/// Every reply the bot can send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Welcome { bot_name: String },
    Help(String),
    TimerStarted,
    AlreadyActive,
    NoActiveSession,
    Submitted,
    SubmissionFailed,
    Unregistered { contact: String },
    Cancelled,
    MissingUsername,
    NotUnderstood,
}

impl Reply {
    pub fn text(&self) -> String {
        match self {
            Reply::Welcome { bot_name } => {
                format!("Welcome to {bot_name}! Send /help to see available commands.")
            }
            Reply::Help(commands) => commands.clone(),
            Reply::TimerStarted => {
                "Timer started. Use /off to stop the timer or /abort to cancel the timer.".to_string()
            }
            Reply::AlreadyActive => "You already have an active session.".to_string(),
            Reply::NoActiveSession => {
                "You don't have an active session. Use /on to start the timer.".to_string()
            }
            Reply::Submitted => "Form submitted successfully!".to_string(),
            Reply::SubmissionFailed => "Failed to submit the form. Please try again.".to_string(),
            Reply::Unregistered { contact } => format!(
                "You are not registered yet. Contact {contact} to register before you can use this bot."
            ),
            Reply::Cancelled => "Your session has been cancelled. Use /on to start a new timer.".to_string(),
            Reply::MissingUsername => "You need a Telegram username to use this bot.".to_string(),
            Reply::NotUnderstood => {
                "I'm sorry, I don't understand that command. Send /help to see available commands.".to_string()
            }
        }
    }

    pub fn feedback_type(&self) -> FeedbackType {
        match self {
            Reply::TimerStarted | Reply::Submitted | Reply::Cancelled => FeedbackType::Success,
            Reply::AlreadyActive
            | Reply::NoActiveSession
            | Reply::Unregistered { .. }
            | Reply::MissingUsername => FeedbackType::Warning,
            Reply::SubmissionFailed => FeedbackType::Error,
            Reply::Welcome { .. } | Reply::Help(_) | Reply::NotUnderstood => FeedbackType::Info,
        }
    }

    /// Short tag for log lines
    pub fn outcome(&self) -> &'static str {
        match self {
            Reply::Welcome { .. } => "welcome",
            Reply::Help(_) => "help",
            Reply::TimerStarted => "timer_started",
            Reply::AlreadyActive => "already_active",
            Reply::NoActiveSession => "no_active_session",
            Reply::Submitted => "submitted",
            Reply::SubmissionFailed => "submission_failed",
            Reply::Unregistered { .. } => "unregistered",
            Reply::Cancelled => "cancelled",
            Reply::MissingUsername => "missing_username",
            Reply::NotUnderstood => "not_understood",
        }
    }
}

/// Sends replies into one chat
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Replies are plain text, no parse mode
    pub async fn send(&self, reply: &Reply) -> ResponseResult<Message> {
        self.bot.send_message(self.chat_id, reply.text()).await
    }
}
