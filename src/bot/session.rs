// src/bot/session.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::consts::SESSION_TTL_SECS;
use crate::store::UserId;

/// Where a user is in the two-step name search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingNameTop10,
    AwaitingNameRange,
}

/// Per-user conversation state. Entries expire after `ttl`, and expired ones
/// are pruned whenever a new state is set, so abandoned searches don't pile up.
pub struct Sessions {
    states: Mutex<HashMap<UserId, (ChatState, Instant)>>,
    ttl: Duration,
}

impl Default for Sessions {
    fn default() -> Self {
        Self::with_ttl(Duration::from_secs(SESSION_TTL_SECS))
    }
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { states: Mutex::new(HashMap::new()), ttl }
    }

    fn fresh(&self, entry: &(ChatState, Instant)) -> Option<ChatState> {
        (entry.1.elapsed() < self.ttl).then_some(entry.0)
    }

    pub fn get(&self, user: UserId) -> ChatState {
        let map = self.states.lock().unwrap_or_else(|p| p.into_inner());
        map.get(&user).and_then(|e| self.fresh(e)).unwrap_or_default()
    }

    pub fn set(&self, user: UserId, state: ChatState) {
        let mut map = self.states.lock().unwrap_or_else(|p| p.into_inner());
        let ttl = self.ttl;
        map.retain(|_, (_, at)| at.elapsed() < ttl);
        if state == ChatState::Idle {
            map.remove(&user);
        } else {
            map.insert(user, (state, Instant::now()));
        }
    }

    /// Current state, resetting the user to `Idle`.
    pub fn take(&self, user: UserId) -> ChatState {
        let mut map = self.states.lock().unwrap_or_else(|p| p.into_inner());
        map.remove(&user).and_then(|e| self.fresh(&e)).unwrap_or_default()
    }

    /// Users with a pending search (expired entries not yet pruned included).
    pub fn pending(&self) -> usize {
        self.states.lock().unwrap_or_else(|p| p.into_inner()).len()
    }
}
