use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Unique within one negotiation session (monotonic counter).
pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Vendor,
    Buyer,
}

/// One line of the negotiation transcript.
///
/// Messages are append-only for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: MessageId,
    pub speaker: Speaker,
    pub original_text: String,
    pub translated_text: String,
    pub timestamp: DateTime<Utc>,
    /// Language the message was spoken in.
    pub language: Language,
}

impl ConversationMessage {
    /// Text shown to the vendor: their own words as typed, the buyer's in translation.
    pub fn display_text(&self) -> &str {
        match self.speaker {
            Speaker::Vendor => &self.original_text,
            Speaker::Buyer => &self.translated_text,
        }
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// The assistant's current counter-offer advice. Replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationSuggestion {
    pub counter_offer: u32,
    pub reasoning: String,
    /// In `[0, 1]`.
    pub confidence: f32,
    pub language: Language,
}

impl NegotiationSuggestion {
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// Phrase the counter-offer as a ready-to-send vendor reply.
    pub fn as_reply(&self) -> String {
        format!("₹{} चाहिए", self.counter_offer)
    }
}
