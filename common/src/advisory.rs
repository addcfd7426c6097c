//! Price advice derived from a single [`PriceRecord`].
//!
//! Everything here is a pure function of fixture data: the market reasoning
//! line, the fair price shield floor and the small helpers the screens show
//! around them.

use serde::Serialize;

use crate::commodity::Commodity;
use crate::price::{format_rate, PriceBook, PriceRecord, PriceUnit, Trend};

/// How far below the modal price the shield floor may sit.
pub const SHIELD_MODAL_MARGIN: u32 = 5;

/// Gap below the floor beyond which a low offer counts as high severity.
pub const SHIELD_HIGH_SEVERITY_GAP: u32 = 3;

/// Which reasoning branch a record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketOutlook {
    /// Rising by more than 5%.
    StrongDemand,
    /// Falling by more than 3%.
    Falling,
    Steady,
    /// Weak movement either way.
    Drifting(DemandLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    High,
    Low,
    Stable,
}

impl DemandLevel {
    fn from_trend(trend: Trend) -> Self {
        match trend {
            Trend::Up => DemandLevel::High,
            Trend::Down => DemandLevel::Low,
            Trend::Stable => DemandLevel::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DemandLevel::High => "high",
            DemandLevel::Low => "low",
            DemandLevel::Stable => "stable",
        }
    }
}

impl MarketOutlook {
    /// First matching rule wins.
    pub fn classify(record: &PriceRecord) -> Self {
        let change = record.change_percent.abs();
        match record.trend {
            Trend::Up if change > 5.0 => MarketOutlook::StrongDemand,
            Trend::Down if change > 3.0 => MarketOutlook::Falling,
            Trend::Stable => MarketOutlook::Steady,
            trend => MarketOutlook::Drifting(DemandLevel::from_trend(trend)),
        }
    }
}

/// One-line market reasoning for a quote.
pub fn reasoning(record: &PriceRecord) -> String {
    let avg = format_rate(record.modal, record.unit);
    let change = record.change_percent;
    match MarketOutlook::classify(record) {
        MarketOutlook::StrongDemand => {
            format!("Market avg {avg}, strong demand ({change:+.1}%), good time to sell.")
        }
        MarketOutlook::Falling => {
            format!("Market avg {avg}, prices falling ({change:.1}%), hold firm on price.")
        }
        MarketOutlook::Steady => {
            format!("Market avg {avg}, steady demand ({change:+.1}%), fair negotiation range.")
        }
        MarketOutlook::Drifting(demand) => format!(
            "Market avg {avg}, nearby mandi demand {} ({change:+.1}%), trending {}.",
            demand.as_str(),
            record.trend
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// Outcome of checking a (possibly absent) buyer offer against the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ShieldVerdict {
    /// No offer on the table; plain advice.
    Advisory,
    OfferAcceptable { offer: u32 },
    OfferTooLow { offer: u32, severity: Severity },
}

/// Floor-price protection for the seller. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FairPriceShield {
    pub safe_minimum: u32,
    pub market_average: u32,
    pub unit: PriceUnit,
    #[serde(flatten)]
    pub verdict: ShieldVerdict,
}

impl FairPriceShield {
    pub fn show_warning(&self) -> bool {
        matches!(self.verdict, ShieldVerdict::OfferTooLow { .. })
    }

    pub fn severity(&self) -> Option<Severity> {
        match self.verdict {
            ShieldVerdict::OfferTooLow { severity, .. } => Some(severity),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        let floor = format_rate(self.safe_minimum, self.unit);
        match self.verdict {
            ShieldVerdict::Advisory => {
                format!("Never sell below {floor} - AI protects your earnings.")
            }
            ShieldVerdict::OfferAcceptable { offer } => format!(
                "Buyer offer of {} is within the safe mandi range.",
                format_rate(offer, self.unit)
            ),
            ShieldVerdict::OfferTooLow { .. } => "Buyer offer is below safe mandi rate.".to_string(),
        }
    }

    /// Only present when the warning is shown.
    pub fn recommendation(&self) -> Option<String> {
        self.show_warning().then(|| {
            format!(
                "Recommended minimum: {}.",
                format_rate(self.safe_minimum, self.unit)
            )
        })
    }
}

/// The lowest price a seller should accept: the mandi minimum, or modal less
/// a small margin when that is higher.
pub fn safe_minimum(record: &PriceRecord) -> u32 {
    record
        .minimum
        .max(record.modal.saturating_sub(SHIELD_MODAL_MARGIN))
}

/// Check an optional buyer offer against the floor.
///
/// Both comparisons are strict: an offer equal to the floor is safe, and an
/// offer exactly [`SHIELD_HIGH_SEVERITY_GAP`] below it is medium severity.
pub fn fair_price_shield(record: &PriceRecord, buyer_offer: Option<u32>) -> FairPriceShield {
    let floor = safe_minimum(record);
    let verdict = match buyer_offer {
        None => ShieldVerdict::Advisory,
        Some(offer) if offer < floor => {
            let severity = if offer < floor.saturating_sub(SHIELD_HIGH_SEVERITY_GAP) {
                Severity::High
            } else {
                Severity::Medium
            };
            ShieldVerdict::OfferTooLow { offer, severity }
        }
        Some(offer) => ShieldVerdict::OfferAcceptable { offer },
    };
    FairPriceShield {
        safe_minimum: floor,
        market_average: record.modal,
        unit: record.unit,
        verdict,
    }
}

/// Opening and floor quotes for the home screen's AI suggestion card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceGuidance {
    pub market_average: u32,
    /// Do not go below this.
    pub floor: u32,
    /// Start the negotiation here.
    pub opening: u32,
    pub unit: PriceUnit,
}

impl PriceGuidance {
    pub fn for_record(record: &PriceRecord) -> Self {
        Self {
            market_average: record.modal,
            floor: record.modal.saturating_sub(2),
            opening: record.modal + 1,
            unit: record.unit,
        }
    }
}

/// Rising/falling/steady counts over a set of commodities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarketSummary {
    pub rising: usize,
    pub falling: usize,
    pub steady: usize,
}

impl MarketSummary {
    pub fn of(book: &PriceBook, commodities: &[Commodity]) -> Self {
        commodities
            .iter()
            .fold(MarketSummary::default(), |mut summary, &commodity| {
                match book.get(commodity).trend {
                    Trend::Up => summary.rising += 1,
                    Trend::Down => summary.falling += 1,
                    Trend::Stable => summary.steady += 1,
                }
                summary
            })
    }
}

/// Vision-mode seven day outlook. A fixed nudge per trend, not a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SevenDayOutlook {
    pub percent: i8,
    pub trend: Trend,
}

impl SevenDayOutlook {
    pub fn for_record(record: &PriceRecord) -> Self {
        let percent = match record.trend {
            Trend::Up => 5,
            Trend::Down => -3,
            Trend::Stable => 2,
        };
        Self {
            percent,
            trend: record.trend,
        }
    }

    pub fn label(&self) -> String {
        format!("{:+}%", self.percent)
    }

    pub fn icon(&self) -> &'static str {
        match self.trend {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Stable => "📊",
        }
    }
}
