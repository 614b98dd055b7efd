// src/bot/dispatch.rs
use std::sync::Arc;

use crate::config::consts::{DEFAULT_LIMIT, RANGE_END, RANGE_START, SEARCH_TOP_LIMIT, TOP5_LIMIT};
use crate::scrape::Fetcher;
use crate::store::{SubscriberStore, UserId};

use super::commands::Command;
use super::replies;
use super::session::{ChatState, Sessions};

/// Prefix of the callback data carried by top-5 buttons.
pub const TOP5_PREFIX: &str = "top5_";

/// Something a user sent us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Incoming {
    Message { user: UserId, text: String },
    /// An inline button was pressed; `data` is the button's payload.
    Callback { user: UserId, data: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Button>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), buttons: Vec::new() }
    }
}

/// Routes commands, callbacks and search answers to the fetcher and store.
/// Never fails: every error ends up as a plain reply and a log line.
pub struct Dispatcher {
    fetcher: Arc<Fetcher>,
    store: Arc<SubscriberStore>,
    sessions: Sessions,
}

impl Dispatcher {
    pub fn new(fetcher: Arc<Fetcher>, store: Arc<SubscriberStore>) -> Self {
        Self { fetcher, store, sessions: Sessions::new() }
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    pub fn handle(&self, incoming: Incoming) -> Reply {
        match incoming {
            Incoming::Message { user, text } => self.on_message(user, &text),
            Incoming::Callback { user, data } => self.on_callback(user, &data),
        }
    }

    fn on_message(&self, user: UserId, text: &str) -> Reply {
        // Commands win over a pending search; the pending state is kept.
        if let Some(cmd) = Command::parse(text) {
            return self.on_command(user, cmd);
        }

        match self.sessions.take(user) {
            ChatState::AwaitingNameTop10 => self.search_top(text),
            ChatState::AwaitingNameRange => self.search_range(text),
            ChatState::Idle => Reply::text(replies::WELCOME),
        }
    }

    fn on_command(&self, user: UserId, cmd: Command) -> Reply {
        logd!("user {user}: {cmd:?}");
        match cmd {
            Command::Start | Command::Help => Reply::text(replies::WELCOME),
            Command::Prices => self.prices(),
            Command::Top5 => self.top5_menu(),
            Command::Search10 => {
                self.sessions.set(user, ChatState::AwaitingNameTop10);
                Reply::text(replies::ASK_NAME_TOP10)
            }
            Command::Search100 => {
                self.sessions.set(user, ChatState::AwaitingNameRange);
                Reply::text(replies::ASK_NAME_RANGE)
            }
            Command::Subscribe => match self.store.add(user) {
                Ok(_) => Reply::text(replies::SUBSCRIBED),
                Err(e) => {
                    loge!("subscribe {user}: {e}");
                    Reply::text(replies::STORE_FAILED)
                }
            },
            Command::Unsubscribe => match self.store.remove(user) {
                Ok(_) => Reply::text(replies::UNSUBSCRIBED),
                Err(e) => {
                    loge!("unsubscribe {user}: {e}");
                    Reply::text(replies::STORE_FAILED)
                }
            },
            Command::Unknown(_) => Reply::text(replies::UNKNOWN_COMMAND),
        }
    }

    fn on_callback(&self, user: UserId, data: &str) -> Reply {
        let Some(name) = data.strip_prefix(TOP5_PREFIX) else {
            logw!("user {user}: unexpected callback {data:?}");
            return Reply::text(replies::UNKNOWN_COMMAND);
        };

        match self.fetcher.fetch_top(DEFAULT_LIMIT) {
            Ok(records) if records.is_empty() => Reply::text(replies::NO_DATA),
            // Button payloads carry the exact listed name.
            Ok(records) => match records.iter().find(|r| r.name == name) {
                Some(r) => Reply::text(replies::coin_card(r)),
                None => Reply::text(replies::COIN_NOT_FOUND),
            },
            Err(e) => {
                loge!("top5 callback: {e}");
                Reply::text(replies::NO_DATA)
            }
        }
    }

    fn prices(&self) -> Reply {
        match self.fetcher.fetch_top(DEFAULT_LIMIT) {
            Ok(records) if !records.is_empty() => Reply::text(replies::price_list(&records)),
            Ok(_) => Reply::text(replies::NO_DATA),
            Err(e) => {
                loge!("prices: {e}");
                Reply::text(replies::NO_DATA)
            }
        }
    }

    fn top5_menu(&self) -> Reply {
        match self.fetcher.fetch_top(TOP5_LIMIT) {
            Ok(records) if !records.is_empty() => Reply {
                text: s!(replies::SELECT_COIN),
                buttons: records
                    .iter()
                    .map(|r| Button { text: r.name.clone(), data: join!(TOP5_PREFIX, &r.name) })
                    .collect(),
            },
            Ok(_) => Reply::text(replies::NO_DATA),
            Err(e) => {
                loge!("top5: {e}");
                Reply::text(replies::NO_DATA)
            }
        }
    }

    fn search_top(&self, name: &str) -> Reply {
        match self.fetcher.find_by_name_in_top(name.trim(), SEARCH_TOP_LIMIT) {
            Ok(Some(r)) => Reply::text(replies::search_hit(&r)),
            Ok(None) => Reply::text(replies::NOT_IN_TOP10),
            Err(e) => {
                loge!("search top {SEARCH_TOP_LIMIT} for {name:?}: {e}");
                Reply::text(replies::NO_DATA)
            }
        }
    }

    fn search_range(&self, name: &str) -> Reply {
        match self.fetcher.find_by_name_in_range(name.trim(), RANGE_START, RANGE_END) {
            Ok(Some(r)) => Reply::text(replies::range_hit(&r)),
            Ok(None) => Reply::text(replies::NOT_IN_RANGE),
            Err(e) => {
                loge!("search ranks {RANGE_START}-{RANGE_END} for {name:?}: {e}");
                Reply::text(replies::NO_DATA)
            }
        }
    }
}
