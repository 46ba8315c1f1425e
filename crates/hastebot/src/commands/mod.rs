//! Bot command handlers and the command table.

mod quote_count;
mod random_quote;
mod submit_quote;
mod toggle;

pub use quote_count::QuoteCountHandler;
pub use random_quote::RandomQuoteHandler;
pub use submit_quote::SubmitQuoteHandler;
pub use toggle::ToggleHandler;

use crate::error::AppResult;
use crate::matcher;
use async_trait::async_trait;
use quote_store::StateStore;
use std::sync::Arc;

/// Which gate a command sits behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Only the bot's own account may run these.
    Admin,
    /// Only run in conversations where the bot is enabled.
    Quotes,
}

/// Everything a handler knows about the message it runs for.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub sender_id: String,
    pub conversation_id: String,
    pub is_admin: bool,
    pub is_enabled: bool,
    /// Normalized message text, original case.
    pub text: String,
}

impl CommandContext {
    pub fn allows(&self, section: Section) -> bool {
        match section {
            Section::Admin => self.is_admin,
            Section::Quotes => self.is_enabled,
        }
    }
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name, used in logs.
    fn name(&self) -> &str;

    fn section(&self) -> Section;

    /// Trigger patterns (see [`crate::matcher`]).
    fn patterns(&self) -> &[&'static str];

    /// Check if this handler matches the message text.
    fn matches(&self, text: &str) -> bool {
        matcher::matches(text, self.patterns())
    }

    /// Execute the command. `None` means no reply.
    async fn execute(&self, ctx: &CommandContext) -> AppResult<Option<String>>;
}

/// The command table in priority order.
///
/// Within a section the first matching handler wins.
pub fn command_table(store: Arc<dyn StateStore>) -> Vec<Box<dyn CommandHandler>> {
    vec![
        Box::new(ToggleHandler::on(store.clone())),
        Box::new(ToggleHandler::off(store.clone())),
        Box::new(QuoteCountHandler::new(store.clone())),
        Box::new(RandomQuoteHandler::new(store.clone())),
        Box::new(SubmitQuoteHandler::new(store)),
    ]
}
