//! Plain-text rendering of cards and transcripts.

use mandi_common::advisory::{
    fair_price_shield, reasoning, FairPriceShield, PriceGuidance, Severity, SevenDayOutlook,
};
use mandi_common::commodity::Commodity;
use mandi_common::conversation::{ConversationMessage, NegotiationSuggestion, Speaker};
use mandi_common::i18n::labels;
use mandi_common::language::Language;
use mandi_common::price::{format_rate, PriceRecord};
use serde::Serialize;

/// Everything the advisory screen knows about one commodity.
#[derive(Debug, Serialize)]
pub struct AdviceReport<'a> {
    pub commodity: Commodity,
    pub name: &'static str,
    pub record: &'a PriceRecord,
    pub reasoning: String,
    pub guidance: PriceGuidance,
    pub shield: FairPriceShield,
    pub outlook: SevenDayOutlook,
}

impl<'a> AdviceReport<'a> {
    pub fn new(
        commodity: Commodity,
        record: &'a PriceRecord,
        offer: Option<u32>,
        language: Language,
    ) -> Self {
        Self {
            commodity,
            name: commodity.display_name(language),
            record,
            reasoning: reasoning(record),
            guidance: PriceGuidance::for_record(record),
            shield: fair_price_shield(record, offer),
            outlook: SevenDayOutlook::for_record(record),
        }
    }

    pub fn lines(&self, language: Language) -> Vec<String> {
        let labels = labels(language);
        let record = self.record;
        let guidance = &self.guidance;
        let mut lines = vec![
            format!("{} {}", self.commodity.emoji(), self.commodity.label(language)),
            format!(
                "  {} {} ({} - {})",
                labels.todays_price,
                format_rate(record.modal, record.unit),
                format_rate(record.minimum, record.unit),
                format_rate(record.maximum, record.unit),
            ),
            format!(
                "  {} {} {}  ·  {} · {}",
                record.trend.icon(),
                record.change_label(),
                record.trend,
                record.market,
                record.updated_label(),
            ),
            format!("  {}", self.reasoning),
            format!(
                "  {}: {} · floor {}",
                labels.example_suggested,
                format_rate(guidance.opening, guidance.unit),
                format_rate(guidance.floor, guidance.unit),
            ),
        ];
        lines.extend(shield_lines(&self.shield));
        lines.push(format!(
            "  {} {}: {}",
            self.outlook.icon(),
            labels.forecast_outlook,
            self.outlook.label()
        ));
        lines
    }
}

pub fn price_line(commodity: Commodity, record: &PriceRecord, language: Language) -> String {
    format!(
        "{} {:<24} {:>14}  {} {:>6}",
        commodity.emoji(),
        commodity.label(language),
        format_rate(record.modal, record.unit),
        record.trend.icon(),
        record.change_label(),
    )
}

pub fn shield_lines(shield: &FairPriceShield) -> Vec<String> {
    let marker = match shield.severity() {
        Some(Severity::High) => "🚨",
        Some(Severity::Medium) => "⚠️",
        None => "🛡️",
    };
    let mut lines = vec![format!("  {marker} {}", shield.message())];
    if let Some(recommendation) = shield.recommendation() {
        lines.push(format!("     {recommendation}"));
    }
    lines
}

pub fn message_line(message: &ConversationMessage) -> String {
    let who = match message.speaker {
        Speaker::Vendor => "vendor",
        Speaker::Buyer => "buyer ",
    };
    format!(
        "[{}] {who}: {}  ({})",
        message.time_label(),
        message.display_text(),
        message.original_text
    )
}

pub fn suggestion_line(suggestion: &NegotiationSuggestion) -> String {
    format!(
        "💡 ₹{} ({}%) {}",
        suggestion.counter_offer,
        suggestion.confidence_percent(),
        suggestion.reasoning
    )
}
