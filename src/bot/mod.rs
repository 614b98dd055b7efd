// src/bot/mod.rs
//! Platform-neutral chat glue: command parsing, the two-step search
//! conversation, reply text. A chat client feeds `Incoming` values in and
//! delivers the `Reply` values that come out.
mod commands;
mod dispatch;
pub mod replies;
mod session;

pub use commands::Command;
pub use dispatch::{Button, Dispatcher, Incoming, Reply, TOP5_PREFIX};
pub use session::{ChatState, Sessions};
