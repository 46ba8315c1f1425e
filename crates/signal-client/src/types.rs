//! Signal API types and the parsed chat events handed to the bot.

use serde::{Deserialize, Serialize};

/// Incoming Signal envelope as returned by `/v1/receive`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
    pub account: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub source: String,
    #[serde(rename = "sourceNumber")]
    pub source_number: Option<String>,
    #[serde(rename = "sourceName")]
    pub source_name: Option<String>,
    pub timestamp: i64,
    #[serde(rename = "dataMessage")]
    pub data_message: Option<DataMessage>,
    #[serde(rename = "syncMessage")]
    pub sync_message: Option<SyncMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataMessage {
    pub message: Option<String>,
    pub timestamp: i64,
    #[serde(rename = "groupInfo")]
    pub group_info: Option<GroupInfo>,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
    #[serde(default)]
    pub mentions: Vec<serde_json::Value>,
    pub sticker: Option<serde_json::Value>,
}

/// Messages the account owner sent from another linked device.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncMessage {
    #[serde(rename = "sentMessage")]
    pub sent_message: Option<SentMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub destination: Option<String>,
    #[serde(rename = "destinationNumber")]
    pub destination_number: Option<String>,
    pub message: Option<String>,
    pub timestamp: i64,
    #[serde(rename = "groupInfo")]
    pub group_info: Option<GroupInfo>,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
    #[serde(default)]
    pub mentions: Vec<serde_json::Value>,
    pub sticker: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    #[serde(rename = "groupId")]
    pub group_id: String,
}

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub number: String,
    pub recipients: Vec<String>,
    pub text_mode: TextMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Normal,
    Styled,
}

/// One piece of a received message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSegment {
    Text(String),
    LineBreak,
    /// Attachments, stickers, mentions and anything else without literal text.
    Other,
}

/// Split a message body into text and line-break segments.
pub fn segments_from_text(body: &str) -> Vec<MessageSegment> {
    let mut segments = Vec::new();
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            segments.push(MessageSegment::LineBreak);
        }
        if !line.is_empty() {
            segments.push(MessageSegment::Text(line.to_string()));
        }
    }
    segments
}

/// A chat message event, parsed once from the raw envelope.
#[derive(Debug, Clone)]
pub struct IncomingEvent {
    /// The bot's own account (the number this client receives for).
    pub self_account_id: String,
    /// Group id for group messages, otherwise the direct-message peer.
    pub conversation_id: String,
    pub sender_id: String,
    pub segments: Vec<MessageSegment>,
    pub timestamp: i64,
}

impl IncomingEvent {
    /// Build an event from an envelope.
    ///
    /// Returns `None` for envelopes that carry no chat message (receipts,
    /// typing indicators, sync messages other than sent messages).
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let envelope = &msg.envelope;

        if let Some(data) = &envelope.data_message {
            let sender = envelope
                .source_number
                .clone()
                .unwrap_or_else(|| envelope.source.clone());
            let conversation_id = data
                .group_info
                .as_ref()
                .map(|g| g.group_id.clone())
                .unwrap_or_else(|| sender.clone());

            return Some(Self {
                self_account_id: msg.account.clone(),
                conversation_id,
                sender_id: sender,
                segments: collect_segments(
                    data.message.as_deref(),
                    &data.attachments,
                    &data.mentions,
                    data.sticker.is_some(),
                ),
                timestamp: data.timestamp,
            });
        }

        let sent = envelope.sync_message.as_ref()?.sent_message.as_ref()?;
        let conversation_id = match &sent.group_info {
            Some(group) => group.group_id.clone(),
            None => sent
                .destination_number
                .clone()
                .or_else(|| sent.destination.clone())?,
        };

        Some(Self {
            self_account_id: msg.account.clone(),
            conversation_id,
            sender_id: msg.account.clone(),
            segments: collect_segments(
                sent.message.as_deref(),
                &sent.attachments,
                &sent.mentions,
                sent.sticker.is_some(),
            ),
            timestamp: sent.timestamp,
        })
    }
}

fn collect_segments(
    body: Option<&str>,
    attachments: &[serde_json::Value],
    mentions: &[serde_json::Value],
    has_sticker: bool,
) -> Vec<MessageSegment> {
    let mut segments = body.map(segments_from_text).unwrap_or_default();
    let others = attachments.len() + mentions.len() + usize::from(has_sticker);
    segments.extend(std::iter::repeat(MessageSegment::Other).take(others));
    segments
}
