pub mod timer;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "List of commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show available commands")]
    Help,
    #[command(description = "Start timer")]
    On,
    #[command(description = "End timer and submit the attendance form")]
    Off,
    #[command(description = "Cancel ongoing timer")]
    Abort,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Help => "/help",
            Command::On => "/on",
            Command::Off => "/off",
            Command::Abort => "/abort",
        }
    }
}
