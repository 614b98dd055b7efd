// src/notify.rs
use std::error::Error;
use std::io::Write;
use std::sync::Mutex;

use crate::bot::replies;
use crate::config::consts::DEFAULT_LIMIT;
use crate::scrape::Fetcher;
use crate::store::{SubscriberStore, UserId};

pub type SendError = Box<dyn Error + Send + Sync>;

/// Outbound delivery to one user. Chat clients implement this.
pub trait Notifier: Send + Sync {
    fn send(&self, user: UserId, text: &str) -> Result<(), SendError>;
}

/// Prints deliveries to a writer (stdout by default) and logs them.
pub struct LogNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl LogNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: Mutex::new(std::io::stdout()) }
    }
}

impl<W: Write + Send> LogNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|p| p.into_inner())
    }
}

impl<W: Write + Send> Notifier for LogNotifier<W> {
    fn send(&self, user: UserId, text: &str) -> Result<(), SendError> {
        let mut out = self.out.lock().map_err(|_| "notifier writer poisoned")?;
        writeln!(out, "-> {user}\n{text}\n")?;
        logf!("Delivered digest to {user}");
        Ok(())
    }
}

/// What one digest run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigestReport {
    pub subscribers: usize,
    pub delivered: usize,
    pub failed: usize,
    /// No data to send (fetch error or empty listing); nothing was sent.
    pub skipped: bool,
}

/// Fetch the top listing once and send it to every subscriber.
/// A failed delivery is logged and the rest still go out.
pub fn send_digest(fetcher: &Fetcher, store: &SubscriberStore, notifier: &dyn Notifier) -> DigestReport {
    let subscribers = match store.list() {
        Ok(ids) => ids,
        Err(e) => {
            loge!("Error while sending daily updates: cannot read subscribers: {e}");
            return DigestReport { skipped: true, ..Default::default() };
        }
    };
    let mut report = DigestReport { subscribers: subscribers.len(), ..Default::default() };
    if subscribers.is_empty() {
        logf!("Digest: no subscribers");
        return report;
    }

    let records = match fetcher.fetch_top(DEFAULT_LIMIT) {
        Ok(r) if !r.is_empty() => r,
        Ok(_) => {
            logw!("Digest: listing empty, nothing sent");
            report.skipped = true;
            return report;
        }
        Err(e) => {
            loge!("Error while sending daily updates: {e}");
            report.skipped = true;
            return report;
        }
    };

    let message = replies::digest(&records);
    for user in subscribers {
        match notifier.send(user, &message) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                loge!("Digest delivery to {user} failed: {e}");
                report.failed += 1;
            }
        }
    }
    logf!("Digest: {}/{} delivered", report.delivered, report.subscribers);
    report
}
