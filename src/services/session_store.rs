use chrono::{DateTime, Duration, FixedOffset};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SessionError;
use crate::services::timezone::Clock;
use crate::services::users::UserKey;

/// A session that was just opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Started {
    pub started_at: DateTime<FixedOffset>,
}

/// A session that was discarded without submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled {
    pub started_at: DateTime<FixedOffset>,
}

/// A finished session, ready to be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSpan {
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
}

impl SessionSpan {
    pub fn duration(&self) -> Duration {
        self.ended_at - self.started_at
    }
}

/// Open sessions keyed by user.
///
/// Cloning is cheap and every clone shares the same table. Each operation
/// does its check and its write under a single lock acquisition.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<UserKey, DateTime<FixedOffset>>>>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    /// Opens a session stamped with the current time.
    pub fn begin(&self, user: UserKey) -> Result<Started, SessionError> {
        let now = self.clock.now();
        match self.lock().entry(user) {
            Entry::Occupied(_) => Err(SessionError::AlreadyActive),
            Entry::Vacant(slot) => {
                slot.insert(now);
                Ok(Started { started_at: now })
            }
        }
    }

    /// Closes the session and returns its start paired with the current time.
    pub fn end(&self, user: &UserKey) -> Result<SessionSpan, SessionError> {
        let started_at = self.lock().remove(user).ok_or(SessionError::NoActiveSession)?;
        Ok(SessionSpan {
            started_at,
            ended_at: self.clock.now(),
        })
    }

    pub fn abort(&self, user: &UserKey) -> Result<Cancelled, SessionError> {
        self.lock()
            .remove(user)
            .map(|started_at| Cancelled { started_at })
            .ok_or(SessionError::NoActiveSession)
    }

    pub fn is_active(&self, user: &UserKey) -> bool {
        self.lock().contains_key(user)
    }

    pub fn started_at(&self, user: &UserKey) -> Option<DateTime<FixedOffset>> {
        self.lock().get(user).copied()
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<UserKey, DateTime<FixedOffset>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
