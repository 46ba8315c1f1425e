//! Persisted bot state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Everything the bot persists, stored as one JSON document.
///
/// Missing keys load as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateData {
    /// Conversations the bot answers in.
    #[serde(rename = "BOT_CONVERSATIONS", default)]
    pub bot_conversations: BTreeSet<String>,

    /// Quotes available to `!quote`.
    #[serde(rename = "QUOTES_STORED", default)]
    pub quotes_stored: Vec<String>,

    /// Submitted quotes awaiting review, without duplicates.
    #[serde(rename = "QUOTES_PENDING", default)]
    pub quotes_pending: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StateData {
    pub fn is_enabled(&self, conversation_id: &str) -> bool {
        self.bot_conversations.contains(conversation_id)
    }

    /// Returns true if the conversation was not enabled before.
    pub fn enable(&mut self, conversation_id: &str) -> bool {
        let changed = self.bot_conversations.insert(conversation_id.to_string());
        self.touch(changed);
        changed
    }

    /// Returns true if the conversation was enabled before.
    pub fn disable(&mut self, conversation_id: &str) -> bool {
        let changed = self.bot_conversations.remove(conversation_id);
        self.touch(changed);
        changed
    }

    /// Append a pending quote unless the exact text is already pending.
    pub fn add_pending(&mut self, text: &str) -> bool {
        if self.quotes_pending.iter().any(|q| q == text) {
            return false;
        }
        self.quotes_pending.push(text.to_string());
        self.touch(true);
        true
    }

    /// Append quotes that were not stored before this import, in order.
    ///
    /// Repeats inside one import are kept, so a quote listed twice in the
    /// seed file is drawn twice as often.
    pub fn import_quotes<I>(&mut self, quotes: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let existing: HashSet<String> = self.quotes_stored.iter().cloned().collect();
        let before = self.quotes_stored.len();
        let fresh = quotes.into_iter().filter(|quote| !existing.contains(quote));
        self.quotes_stored.extend(fresh);
        let added = self.quotes_stored.len() - before;
        self.touch(added > 0);
        added
    }

    fn touch(&mut self, changed: bool) {
        if changed {
            self.updated_at = Some(Utc::now());
        }
    }
}

/// Layout of a seed quotes file: `{ "quotes": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteFile {
    #[serde(default)]
    pub quotes: Vec<String>,
}
