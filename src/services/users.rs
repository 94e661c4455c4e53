use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Identity a session is stored under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserKey {
    Username(String),
    Id(u64),
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Username(name) => write!(f, "{name}"),
            UserKey::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Which part of a Telegram identity keys sessions and registrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionKeyStrategy {
    #[default]
    Username,
    UserId,
}

impl SessionKeyStrategy {
    /// Builds the key for a sender. Users without a username cannot be keyed
    /// under the username strategy.
    pub fn key_for(&self, user_id: u64, username: Option<&str>) -> Option<UserKey> {
        match self {
            SessionKeyStrategy::Username => username
                .filter(|name| !name.is_empty())
                .map(|name| UserKey::Username(name.to_string())),
            SessionKeyStrategy::UserId => Some(UserKey::Id(user_id)),
        }
    }
}

impl FromStr for SessionKeyStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "username" => Ok(SessionKeyStrategy::Username),
            "id" | "user_id" | "userid" => Ok(SessionKeyStrategy::UserId),
            other => Err(anyhow!("Invalid SESSION_KEY '{}': expected 'username' or 'id'", other)),
        }
    }
}

/// Registered users and the names written into the form
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Parses a JSON object of `user key -> display name`
    pub fn from_json(json: &str) -> Result<Self> {
        let names: HashMap<String, String> =
            serde_json::from_str(json).context("USER_NAME_MAPPING must be a JSON object of strings")?;
        Ok(Self::new(names))
    }

    pub fn display_name(&self, key: &UserKey) -> Option<&str> {
        self.names.get(&key.to_string()).map(String::as_str)
    }

    pub fn is_registered(&self, key: &UserKey) -> bool {
        self.display_name(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
