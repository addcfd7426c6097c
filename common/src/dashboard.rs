use chrono::{DateTime, Utc};

use crate::advisory::MarketSummary;
use crate::commodity::Commodity;
use crate::i18n::labels;
use crate::language::Language;
use crate::price::PriceBook;
use crate::timeline::{Reducer, Transition};

/// Commodities listed on the dashboard, in display order.
pub const MAIN_COMMODITIES: [Commodity; 4] = [
    Commodity::Tomato,
    Commodity::Onion,
    Commodity::Potato,
    Commodity::Wheat,
];

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SelectLanguage(Language),
    ToggleVision(bool),
    ConnectivityChanged { offline: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub language: Language,
    pub vision_mode: bool,
    pub offline: bool,
    /// Last time connectivity (and so the data source) changed.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            language: Language::Hindi,
            vision_mode: false,
            offline: false,
            refreshed_at: None,
        }
    }
}

impl DashboardState {
    pub fn status_text(&self) -> &'static str {
        let labels = labels(self.language);
        if self.offline {
            labels.status_offline
        } else {
            labels.status_online
        }
    }

    pub fn summary(&self, book: &PriceBook) -> MarketSummary {
        MarketSummary::of(book, &MAIN_COMMODITIES)
    }
}

impl Reducer for DashboardState {
    type Event = DashboardEvent;

    fn reduce(&self, event: DashboardEvent, now: DateTime<Utc>) -> Transition<Self, DashboardEvent> {
        let mut next = self.clone();
        match event {
            DashboardEvent::SelectLanguage(language) => next.language = language,
            DashboardEvent::ToggleVision(enabled) => next.vision_mode = enabled,
            DashboardEvent::ConnectivityChanged { offline } => {
                if offline != self.offline {
                    next.refreshed_at = Some(now);
                }
                next.offline = offline;
            }
        }
        Transition::to(next)
    }
}
