use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;
use std::env;

use crate::services::form::FormFieldIds;
use crate::services::timezone::singapore_offset;
use crate::services::users::{SessionKeyStrategy, UserDirectory};
use crate::utils::validation::{
    parse_utc_offset, validate_form_field_ids, validate_form_url, validate_user_directory,
};

pub const DEFAULT_REGISTRATION_CONTACT: &str = "the bot administrator";
pub const DEFAULT_BOT_NAME: &str = "Attendance Bot";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub form_url: String,
    pub form_field_ids: FormFieldIds,
    pub users: UserDirectory,
    pub session_key: SessionKeyStrategy,
    pub utc_offset: FixedOffset,
    pub registration_contact: String,
    pub bot_name: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let form_url = env::var("FORM_URL")
            .map_err(|_| anyhow!("FORM_URL must be set"))?
            .trim()
            .to_string();
        validate_form_url(&form_url)?;

        let field_ids_json = env::var("FORM_FIELD_IDS")
            .map_err(|_| anyhow!("FORM_FIELD_IDS must be set"))?;
        let form_field_ids: FormFieldIds = serde_json::from_str(&field_ids_json)
            .context("FORM_FIELD_IDS must be a JSON object with all eleven field ids")?;
        validate_form_field_ids(&form_field_ids)?;

        let mapping_json = env::var("USER_NAME_MAPPING")
            .map_err(|_| anyhow!("USER_NAME_MAPPING must be set"))?;
        let users = UserDirectory::from_json(&mapping_json)?;
        validate_user_directory(&users)?;

        let session_key = match env::var("SESSION_KEY") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => SessionKeyStrategy::default(),
        };

        let utc_offset = match env::var("UTC_OFFSET") {
            Ok(value) if !value.trim().is_empty() => parse_utc_offset(&value)?,
            _ => singapore_offset(),
        };

        let registration_contact = non_empty_var("REGISTRATION_CONTACT")
            .unwrap_or_else(|| DEFAULT_REGISTRATION_CONTACT.to_string());
        let bot_name = non_empty_var("BOT_NAME")
            .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string());

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            form_url,
            form_field_ids,
            users,
            session_key,
            utc_offset,
            registration_contact,
            bot_name,
            http_port,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
