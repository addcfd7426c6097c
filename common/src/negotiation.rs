//! Scripted two-party negotiation.
//!
//! A vendor (Hindi) and a buyer (Tamil) trade messages over a tomato lot.
//! Two independent scripts write into the same transcript:
//!
//! - the demo sequencer: clear, buyer asks for ₹25 after 500 ms, a ₹29
//!   counter-offer suggestion arrives 1000 ms later;
//! - free-text replies: the vendor's message is appended at once and a
//!   canned buyer acknowledgement follows 2000 ms later.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::advisory::{fair_price_shield, FairPriceShield};
use crate::commodity::Commodity;
use crate::conversation::{ConversationMessage, MessageId, NegotiationSuggestion, Speaker};
use crate::language::Language;
use crate::price::PriceBook;
use crate::timeline::{Reducer, Transition};

pub const DEMO_BUYER_DELAY: Duration = Duration::from_millis(500);
pub const DEMO_SUGGESTION_DELAY: Duration = Duration::from_millis(1000);
pub const BUYER_REPLY_DELAY: Duration = Duration::from_millis(2000);

pub const DEMO_COUNTER_OFFER: u32 = 29;
pub const DEMO_CONFIDENCE: f32 = 0.92;

/// Standing buyer offer shown against the fair price shield.
pub const OPENING_BUYER_OFFER: u32 = 25;

#[derive(Debug, Clone, PartialEq)]
pub enum NegotiationEvent {
    /// Start (or ignore, if already running) the scripted demo.
    StartDemo,
    DemoBuyerTurn,
    DemoSuggestion,
    InputChanged(String),
    SendMessage,
    BuyerReply,
    /// Copy the current counter-offer into the input box.
    UseSuggestion,
    ToggleVision(bool),
    ConnectivityChanged { offline: bool },
}

/// Snapshot of one negotiation session.
#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationState {
    pub vendor_language: Language,
    pub buyer_language: Language,
    pub commodity: Commodity,
    pub buyer_offer: Option<u32>,
    pub messages: Vec<ConversationMessage>,
    pub suggestion: Option<NegotiationSuggestion>,
    pub input: String,
    pub demo_running: bool,
    pub vision_mode: bool,
    pub offline: bool,
    next_id: MessageId,
}

impl Default for NegotiationState {
    fn default() -> Self {
        Self::new(Language::Hindi, Language::Tamil, Commodity::Tomato)
    }
}

impl NegotiationState {
    /// An empty session with no transcript yet.
    pub fn new(vendor_language: Language, buyer_language: Language, commodity: Commodity) -> Self {
        Self {
            vendor_language,
            buyer_language,
            commodity,
            buyer_offer: Some(OPENING_BUYER_OFFER),
            messages: Vec::new(),
            suggestion: None,
            input: String::new(),
            demo_running: false,
            vision_mode: false,
            offline: false,
            next_id: 1,
        }
    }

    /// The session as the screen first shows it: a short exchange already
    /// under way and an opening suggestion.
    pub fn opening(now: DateTime<Utc>) -> Self {
        let mut state = Self::default();
        let buyer = state.buyer_language;
        let vendor = state.vendor_language;
        state.push(Speaker::Buyer, "₹25 முடியுமா?", "₹25 हो सकता है?", buyer, now);
        state.push(Speaker::Vendor, "₹30 चाहिए", "₹30 வேண்டும்", vendor, now);
        state.push(Speaker::Buyer, "₹27 கொடுக்கிறேன்", "₹27 दे रहा हूं", buyer, now);
        state.suggestion = Some(NegotiationSuggestion {
            counter_offer: DEMO_COUNTER_OFFER,
            reasoning: "मार्केट औसत ₹32/kg है। ₹27 कम है। ₹29 फेयर प्राइस है।".into(),
            confidence: 0.85,
            language: Language::Hindi,
        });
        state
    }

    /// Shield verdict for the buyer's standing offer, if there is one.
    pub fn shield(&self, book: &PriceBook) -> Option<FairPriceShield> {
        self.buyer_offer
            .map(|offer| fair_price_shield(book.get(self.commodity), Some(offer)))
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    fn push(
        &mut self,
        speaker: Speaker,
        original: impl Into<String>,
        translated: impl Into<String>,
        language: Language,
        now: DateTime<Utc>,
    ) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ConversationMessage {
            id,
            speaker,
            original_text: original.into(),
            translated_text: translated.into(),
            timestamp: now,
            language,
        });
    }
}

impl Reducer for NegotiationState {
    type Event = NegotiationEvent;

    fn reduce(
        &self,
        event: NegotiationEvent,
        now: DateTime<Utc>,
    ) -> Transition<Self, NegotiationEvent> {
        let mut next = self.clone();
        match event {
            NegotiationEvent::StartDemo => {
                if self.demo_running {
                    tracing::debug!("demo already running, ignoring trigger");
                    return Transition::to(next);
                }
                next.messages.clear();
                next.suggestion = None;
                next.demo_running = true;
                Transition::to(next)
                    .with_effect(DEMO_BUYER_DELAY, NegotiationEvent::DemoBuyerTurn)
            }
            NegotiationEvent::DemoBuyerTurn => {
                if !self.demo_running {
                    return Transition::to(next);
                }
                next.push(
                    Speaker::Buyer,
                    "₹25 possible?",
                    "क्या ₹25 हो सकता है?",
                    Language::English,
                    now,
                );
                Transition::to(next)
                    .with_effect(DEMO_SUGGESTION_DELAY, NegotiationEvent::DemoSuggestion)
            }
            NegotiationEvent::DemoSuggestion => {
                if !self.demo_running {
                    return Transition::to(next);
                }
                next.suggestion = Some(NegotiationSuggestion {
                    counter_offer: DEMO_COUNTER_OFFER,
                    reasoning: "Counter with ₹29/kg. Do not go below ₹27/kg.".into(),
                    confidence: DEMO_CONFIDENCE,
                    language: Language::Hindi,
                });
                next.demo_running = false;
                Transition::to(next)
            }
            NegotiationEvent::InputChanged(text) => {
                next.input = text;
                Transition::to(next)
            }
            NegotiationEvent::SendMessage => {
                if !self.can_send() {
                    return Transition::to(next);
                }
                let original = std::mem::take(&mut next.input);
                let translated = format!("[{}: {}]", self.buyer_language.english_name(), original);
                let vendor = self.vendor_language;
                next.push(Speaker::Vendor, original, translated, vendor, now);
                Transition::to(next).with_effect(BUYER_REPLY_DELAY, NegotiationEvent::BuyerReply)
            }
            NegotiationEvent::BuyerReply => {
                let buyer = self.buyer_language;
                next.push(Speaker::Buyer, "₹28 ஓகே", "₹28 ठीक है", buyer, now);
                Transition::to(next)
            }
            NegotiationEvent::UseSuggestion => {
                if let Some(suggestion) = &self.suggestion {
                    next.input = suggestion.as_reply();
                }
                Transition::to(next)
            }
            NegotiationEvent::ToggleVision(enabled) => {
                next.vision_mode = enabled;
                Transition::to(next)
            }
            NegotiationEvent::ConnectivityChanged { offline } => {
                next.offline = offline;
                Transition::to(next)
            }
        }
    }
}
