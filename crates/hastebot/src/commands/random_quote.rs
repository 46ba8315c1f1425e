//! Replies with a random stored quote.

use crate::commands::{CommandContext, CommandHandler, Section};
use crate::error::AppResult;
use async_trait::async_trait;
use quote_store::StateStore;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::warn;

pub struct RandomQuoteHandler {
    store: Arc<dyn StateStore>,
}

impl RandomQuoteHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler for RandomQuoteHandler {
    fn name(&self) -> &str {
        "random quote"
    }

    fn section(&self) -> Section {
        Section::Quotes
    }

    fn patterns(&self) -> &[&'static str] {
        &["!quote", "! quote", "quote!"]
    }

    async fn execute(&self, ctx: &CommandContext) -> AppResult<Option<String>> {
        let quotes = self.store.quotes().await?;

        // An empty collection still gets a reply, just without a quote
        if quotes.is_empty() {
            warn!("No stored quotes to pick from in {}", ctx.conversation_id);
        }
        let quote = quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default();

        Ok(Some(quote))
    }
}
