//! Signal quote bot.
//!
//! Incoming events are normalized to text, matched against the command
//! table and dispatched; handlers change state through a
//! [`quote_store::StateStore`] and return reply payloads that are sent back
//! decorated with the bot label.

pub mod bot;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod reply;

pub use bot::Bot;
pub use dispatcher::{Dispatcher, Reply};
pub use error::{AppError, AppResult};
