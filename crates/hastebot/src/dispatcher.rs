//! Turns incoming events into state changes and replies.

use crate::commands::{command_table, CommandContext, CommandHandler, Section};
use crate::normalize::normalize;
use quote_store::StateStore;
use signal_client::IncomingEvent;
use std::sync::Arc;
use tracing::{debug, error, info};

/// A reply payload for a conversation, before decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub conversation_id: String,
    pub payload: String,
}

pub struct Dispatcher {
    store: Arc<dyn StateStore>,
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Dispatcher {
    /// Dispatcher with the standard command table.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let handlers = command_table(store.clone());
        Self::with_handlers(store, handlers)
    }

    pub fn with_handlers(
        store: Arc<dyn StateStore>,
        handlers: Vec<Box<dyn CommandHandler>>,
    ) -> Self {
        Self { store, handlers }
    }

    pub fn handlers(&self) -> &[Box<dyn CommandHandler>] {
        &self.handlers
    }

    /// Build the command context for an event.
    ///
    /// Enablement is read once here, before any command runs.
    pub async fn context(
        &self,
        event: &IncomingEvent,
    ) -> Result<CommandContext, quote_store::StoreError> {
        let is_enabled = self.store.is_enabled(&event.conversation_id).await?;

        Ok(CommandContext {
            sender_id: event.sender_id.clone(),
            conversation_id: event.conversation_id.clone(),
            is_admin: event.sender_id == event.self_account_id,
            is_enabled,
            text: normalize(&event.segments),
        })
    }

    /// Handlers that fire for a context: at most one per open section.
    pub fn select(&self, ctx: &CommandContext) -> Vec<&dyn CommandHandler> {
        [Section::Admin, Section::Quotes]
            .into_iter()
            .filter(|section| ctx.allows(*section))
            .filter_map(|section| {
                self.handlers
                    .iter()
                    .filter(|h| h.section() == section)
                    .find(|h| h.matches(&ctx.text))
                    .map(|h| &**h as &dyn CommandHandler)
            })
            .collect()
    }

    /// Run every applicable command for one event.
    ///
    /// A failing command is logged and produces no reply; it does not stop
    /// the other section from running.
    pub async fn dispatch(&self, event: &IncomingEvent) -> Vec<Reply> {
        let ctx = match self.context(event).await {
            Ok(ctx) => ctx,
            Err(e) => {
                error!("Failed to read state for {}: {}", event.conversation_id, e);
                return Vec::new();
            }
        };

        debug!(
            "{} {}",
            ctx.sender_id,
            serde_json::to_string(&ctx.text).unwrap_or_default()
        );

        let mut replies = Vec::new();
        for handler in self.select(&ctx) {
            info!("Running '{}' in {}", handler.name(), ctx.conversation_id);
            match handler.execute(&ctx).await {
                Ok(Some(payload)) => replies.push(Reply {
                    conversation_id: ctx.conversation_id.clone(),
                    payload,
                }),
                Ok(None) => {}
                Err(e) => error!("Command '{}' failed: {}", handler.name(), e),
            }
        }
        replies
    }
}
