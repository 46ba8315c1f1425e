//! Signal CLI REST API client.

mod client;
mod error;
mod receiver;
mod rich_text;
mod types;

pub use client::SignalClient;
pub use error::SignalError;
pub use receiver::MessageReceiver;
pub use rich_text::{RichText, Span};
pub use types::*;
