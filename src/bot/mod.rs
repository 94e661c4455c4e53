pub mod commands;
pub mod handlers;

use std::sync::Arc;

use crate::config::Config;
use crate::services::form::FormSubmitter;
use crate::services::session_store::SessionStore;
use crate::services::timezone::Clock;
use crate::services::users::{SessionKeyStrategy, UserDirectory};

/// Everything a command handler needs, shared by all dispatcher tasks
#[derive(Clone)]
pub struct BotContext {
    pub sessions: SessionStore,
    pub users: Arc<UserDirectory>,
    pub submitter: FormSubmitter,
    pub key_strategy: SessionKeyStrategy,
    pub registration_contact: String,
    pub bot_name: String,
}

impl BotContext {
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self, reqwest::Error> {
        let submitter = FormSubmitter::new(config.form_url.clone(), config.form_field_ids.clone())?;

        Ok(Self {
            sessions: SessionStore::new(clock),
            users: Arc::new(config.users.clone()),
            submitter,
            key_strategy: config.session_key,
            registration_contact: config.registration_contact.clone(),
            bot_name: config.bot_name.clone(),
        })
    }
}
