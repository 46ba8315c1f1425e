//! Reports how many quotes are stored and pending.

use crate::commands::{CommandContext, CommandHandler, Section};
use crate::error::AppResult;
use async_trait::async_trait;
use quote_store::StateStore;
use std::sync::Arc;

pub struct QuoteCountHandler {
    store: Arc<dyn StateStore>,
}

impl QuoteCountHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler for QuoteCountHandler {
    fn name(&self) -> &str {
        "quote count"
    }

    fn section(&self) -> Section {
        Section::Quotes
    }

    fn patterns(&self) -> &[&'static str] {
        &["?quote", "? quote", "quote?", "!quote count"]
    }

    async fn execute(&self, _ctx: &CommandContext) -> AppResult<Option<String>> {
        let quotes = self.store.quotes().await?;
        let pending = self.store.pending().await?;

        Ok(Some(format!(
            "has {} quotes available and {} pending.",
            quotes.len(),
            pending.len()
        )))
    }
}
