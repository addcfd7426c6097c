use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commodity::Commodity;

/// Fixture data shipped with the app (mock Agmarknet snapshot).
const FIXTURE_JSON: &str = include_str!("../fixtures/prices.json");

/// Direction of the day-on-day price movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Stable => "➡️",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a mandi quotes its price in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceUnit {
    #[serde(rename = "₹/kg")]
    PerKg,
    #[serde(rename = "₹/quintal")]
    PerQuintal,
    #[serde(rename = "₹/dozen")]
    PerDozen,
}

impl PriceUnit {
    /// The quantity part only, e.g. `kg`.
    pub fn per(self) -> &'static str {
        match self {
            PriceUnit::PerKg => "kg",
            PriceUnit::PerQuintal => "quintal",
            PriceUnit::PerDozen => "dozen",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹/{}", self.per())
    }
}

/// Format a rupee amount against a unit, e.g. `₹32/kg`.
pub fn format_rate(amount: u32, unit: PriceUnit) -> String {
    format!("₹{amount}/{}", unit.per())
}

/// One day's quote for a commodity at a single mandi.
///
/// Invariant (checked when the book is loaded): `minimum <= modal <= maximum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub minimum: u32,
    pub maximum: u32,
    /// Most commonly transacted price of the day.
    pub modal: u32,
    pub unit: PriceUnit,
    pub market: String,
    /// Local market time of the quote.
    pub last_updated: NaiveDateTime,
    pub trend: Trend,
    /// Signed day-on-day change in percent.
    pub change_percent: f64,
}

impl PriceRecord {
    fn validate(&self, commodity: Commodity) -> Result<(), FixtureError> {
        if !(self.minimum <= self.modal && self.modal <= self.maximum) {
            return Err(FixtureError::PriceOrder {
                commodity,
                minimum: self.minimum,
                modal: self.modal,
                maximum: self.maximum,
            });
        }
        if !self.change_percent.is_finite() {
            return Err(FixtureError::NonFiniteChange(commodity));
        }
        Ok(())
    }

    /// Signed change with one decimal place, e.g. `+8.5%`.
    pub fn change_label(&self) -> String {
        format!("{:+.1}%", self.change_percent)
    }

    /// Quote time as shown on price cards, e.g. `09:10 AM`.
    pub fn updated_label(&self) -> String {
        self.last_updated.format("%I:%M %p").to_string()
    }
}

/// Errors raised while loading the fixture price book.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("price fixture is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("price fixture has no entry for {0}")]
    Missing(Commodity),
    #[error("{commodity}: expected minimum <= modal <= maximum, got {minimum} / {modal} / {maximum}")]
    PriceOrder {
        commodity: Commodity,
        minimum: u32,
        modal: u32,
        maximum: u32,
    },
    #[error("{0}: change percent is not a finite number")]
    NonFiniteChange(Commodity),
}

/// Read-only price store, one record per commodity.
///
/// Built once at startup; every lookup afterwards is total.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBook {
    records: [PriceRecord; Commodity::COUNT],
}

impl PriceBook {
    /// Load the bundled fixture.
    pub fn load() -> Result<Self, FixtureError> {
        Self::from_json(FIXTURE_JSON)
    }

    /// Parse and validate a fixture document keyed by commodity id.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let mut by_commodity: BTreeMap<Commodity, PriceRecord> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(Commodity::COUNT);
        for commodity in Commodity::ALL {
            let record = by_commodity
                .remove(&commodity)
                .ok_or(FixtureError::Missing(commodity))?;
            record.validate(commodity)?;
            records.push(record);
        }

        let records: [PriceRecord; Commodity::COUNT] = records
            .try_into()
            .map_err(|_| FixtureError::Missing(Commodity::Tomato))?;
        tracing::debug!(count = Commodity::COUNT, "price book loaded");
        Ok(Self { records })
    }

    pub fn get(&self, commodity: Commodity) -> &PriceRecord {
        &self.records[commodity.index()]
    }

    /// All records in [`Commodity::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Commodity, &PriceRecord)> {
        Commodity::ALL.into_iter().zip(self.records.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixture_loads() {
        let book = PriceBook::load().unwrap();
        let tomato = book.get(Commodity::Tomato);
        assert_eq!(tomato.minimum, 28);
        assert_eq!(tomato.modal, 32);
        assert_eq!(tomato.maximum, 35);
        assert_eq!(tomato.unit, PriceUnit::PerKg);
        assert_eq!(tomato.trend, Trend::Up);
        assert_eq!(book.get(Commodity::Wheat).unit, PriceUnit::PerQuintal);
        assert_eq!(book.get(Commodity::Banana).unit, PriceUnit::PerDozen);
    }

    #[test]
    fn every_fixture_record_is_ordered() {
        let book = PriceBook::load().unwrap();
        for (commodity, record) in book.iter() {
            assert!(
                record.minimum <= record.modal && record.modal <= record.maximum,
                "{commodity} breaks min <= modal <= max"
            );
        }
    }

    #[test]
    fn missing_commodity_is_rejected() {
        let json = r#"{"tomato": {"minimum": 1, "maximum": 3, "modal": 2, "unit": "₹/kg",
            "market": "X", "last_updated": "2024-01-26T09:10:00", "trend": "up", "change_percent": 1.0}}"#;
        let err = PriceBook::from_json(json).unwrap_err();
        assert!(matches!(err, FixtureError::Missing(Commodity::Onion)));
    }

    #[test]
    fn unordered_prices_are_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(FIXTURE_JSON).unwrap();
        doc["potato"]["modal"] = serde_json::json!(99);
        let err = PriceBook::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::PriceOrder { commodity: Commodity::Potato, modal: 99, .. }
        ));
    }

    #[test]
    fn unknown_commodity_key_is_a_parse_error() {
        let mut doc: serde_json::Value = serde_json::from_str(FIXTURE_JSON).unwrap();
        doc["mango"] = doc["banana"].clone();
        let err = PriceBook::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn labels() {
        let book = PriceBook::load().unwrap();
        let onion = book.get(Commodity::Onion);
        assert_eq!(onion.change_label(), "-3.2%");
        assert_eq!(onion.updated_label(), "09:15 AM");
        assert_eq!(format_rate(onion.modal, onion.unit), "₹25/kg");
        assert_eq!(PriceUnit::PerQuintal.to_string(), "₹/quintal");
    }
}
