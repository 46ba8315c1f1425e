//! Admin commands that switch the bot on or off in a conversation.

use crate::commands::{CommandContext, CommandHandler, Section};
use crate::error::AppResult;
use async_trait::async_trait;
use quote_store::StateStore;
use std::sync::Arc;
use tracing::info;

const ON_PATTERNS: &[&str] = &["!bot on", "! bot on"];
const OFF_PATTERNS: &[&str] = &["!bot off", "! bot off"];

pub struct ToggleHandler {
    store: Arc<dyn StateStore>,
    enable: bool,
}

impl ToggleHandler {
    pub fn on(store: Arc<dyn StateStore>) -> Self {
        Self { store, enable: true }
    }

    pub fn off(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            enable: false,
        }
    }
}

#[async_trait]
impl CommandHandler for ToggleHandler {
    fn name(&self) -> &str {
        if self.enable {
            "bot on"
        } else {
            "bot off"
        }
    }

    fn section(&self) -> Section {
        Section::Admin
    }

    fn patterns(&self) -> &[&'static str] {
        if self.enable {
            ON_PATTERNS
        } else {
            OFF_PATTERNS
        }
    }

    async fn execute(&self, ctx: &CommandContext) -> AppResult<Option<String>> {
        if self.enable {
            let changed = self.store.enable(&ctx.conversation_id).await?;
            info!("Enabled in {} (changed={})", ctx.conversation_id, changed);
            Ok(Some("is now enabled.".into()))
        } else {
            let changed = self.store.disable(&ctx.conversation_id).await?;
            info!("Disabled in {} (changed={})", ctx.conversation_id, changed);
            Ok(Some("is now disabled.".into()))
        }
    }
}
