//! Common test utilities for integration tests.

use async_trait::async_trait;
use mockall::mock;
use quote_store::{StateStore, StoreError};
use signal_client::{segments_from_text, IncomingEvent};

pub const BOT_ACCOUNT: &str = "+15555555555";
pub const USER: &str = "+14155551234";
pub const GROUP: &str = "group-1";

/// An event in `GROUP` sent by `sender`.
pub fn event_from(sender: &str, text: &str) -> IncomingEvent {
    IncomingEvent {
        self_account_id: BOT_ACCOUNT.to_string(),
        conversation_id: GROUP.to_string(),
        sender_id: sender.to_string(),
        segments: segments_from_text(text),
        timestamp: 1677652288000,
    }
}

pub fn admin_event(text: &str) -> IncomingEvent {
    event_from(BOT_ACCOUNT, text)
}

pub fn user_event(text: &str) -> IncomingEvent {
    event_from(USER, text)
}

pub fn unavailable() -> StoreError {
    StoreError::Unavailable(std::io::Error::new(
        std::io::ErrorKind::Other,
        "disk unavailable",
    ))
}

mock! {
    pub Store {}

    #[async_trait]
    impl StateStore for Store {
        async fn is_enabled(&self, conversation_id: &str) -> Result<bool, StoreError>;
        async fn enable(&self, conversation_id: &str) -> Result<bool, StoreError>;
        async fn disable(&self, conversation_id: &str) -> Result<bool, StoreError>;
        async fn quotes(&self) -> Result<Vec<String>, StoreError>;
        async fn pending(&self) -> Result<Vec<String>, StoreError>;
        async fn add_pending(&self, text: &str) -> Result<bool, StoreError>;
        async fn import_quotes(&self, quotes: Vec<String>) -> Result<usize, StoreError>;
    }
}
