//! Collects submitted quotes into the pending list.

use crate::commands::{CommandContext, CommandHandler, Section};
use crate::error::AppResult;
use async_trait::async_trait;
use quote_store::StateStore;
use std::sync::Arc;
use tracing::{debug, info};

const KEYWORD: &str = "quote";

/// Strip the leading keyword from a submission, keeping the rest as typed.
fn quote_body(text: &str) -> &str {
    let text = text.trim();
    match text.get(..KEYWORD.len()) {
        Some(head) if head.eq_ignore_ascii_case(KEYWORD) => text[KEYWORD.len()..].trim(),
        _ => text,
    }
}

pub struct SubmitQuoteHandler {
    store: Arc<dyn StateStore>,
}

impl SubmitQuoteHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler for SubmitQuoteHandler {
    fn name(&self) -> &str {
        "submit quote"
    }

    fn section(&self) -> Section {
        Section::Quotes
    }

    fn patterns(&self) -> &[&'static str] {
        &[KEYWORD]
    }

    /// Everything after the `quote` keyword is the quote; duplicates are accepted silently.
    async fn execute(&self, ctx: &CommandContext) -> AppResult<Option<String>> {
        let body = quote_body(&ctx.text);
        if body.is_empty() {
            debug!("Empty quote submission from {}", ctx.sender_id);
            return Ok(None);
        }

        if !self.store.add_pending(body).await? {
            debug!("Duplicate pending quote from {}", ctx.sender_id);
            return Ok(None);
        }

        let pending = self.store.pending().await?;
        info!(
            "New pending quote from {} in {} ({} pending)",
            ctx.sender_id,
            ctx.conversation_id,
            pending.len()
        );

        Ok(Some(format!("has {} new quotes pending.", pending.len())))
    }
}
