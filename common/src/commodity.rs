use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Produce tracked by the fixture price book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commodity {
    Tomato,
    Onion,
    Potato,
    Wheat,
    Rice,
    Chillies,
    Bhindi,
    Banana,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown commodity: {0}")]
pub struct UnknownCommodity(pub String);

/// Display names, one row per commodity in [`Commodity::ALL`] order and one
/// column per language in [`Language::ALL`] order.
const DISPLAY_NAMES: [[&str; Language::COUNT]; Commodity::COUNT] = [
    ["टमाटर", "Tomato", "தக்காளி", "టమాటో", "টমেটো", "ટમેટા", "टोमॅटो", "ਟਮਾਟਰ", "टमाटर"],
    ["प्याज", "Onion", "வெங்காயம்", "ఉల్లిపాయ", "পেঁয়াজ", "ડુંગળી", "कांदा", "ਪਿਆਜ਼", "प्याज"],
    ["आलू", "Potato", "உருளைக்கிழங்கு", "బంగాళాదుంప", "আলু", "બટાકા", "बटाटा", "ਆਲੂ", "आलू"],
    ["गेहूं", "Wheat", "கோதுமை", "గోధుమ", "গম", "ઘઉં", "गहू", "ਕਣਕ", "गेहूं"],
    ["चावल", "Rice", "அரிசி", "బియ్యం", "চাল", "ચોખા", "तांदूळ", "ਚਾਵਲ", "चावल"],
    ["मिर्च", "Chillies", "மிளகாய்", "మిర్చి", "মরিচ", "મરચું", "मिरची", "ਮਿਰਚ", "मिर्च"],
    ["भिंडी", "Bhindi", "வெண்டைக்காய்", "బెండకాయ", "ঢেঁড়স", "ભીંડા", "भेंडी", "ਭਿੰਡੀ", "भिंडी"],
    ["केला", "Banana", "வாழைப்பழம்", "అరటిపండు", "কলা", "કેળું", "केळी", "ਕੇਲਾ", "केला"],
];

impl Commodity {
    pub const COUNT: usize = 8;

    pub const ALL: [Commodity; Commodity::COUNT] = [
        Commodity::Tomato,
        Commodity::Onion,
        Commodity::Potato,
        Commodity::Wheat,
        Commodity::Rice,
        Commodity::Chillies,
        Commodity::Bhindi,
        Commodity::Banana,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase identifier, matching the fixture keys.
    pub fn id(self) -> &'static str {
        match self {
            Commodity::Tomato => "tomato",
            Commodity::Onion => "onion",
            Commodity::Potato => "potato",
            Commodity::Wheat => "wheat",
            Commodity::Rice => "rice",
            Commodity::Chillies => "chillies",
            Commodity::Bhindi => "bhindi",
            Commodity::Banana => "banana",
        }
    }

    pub fn from_id(id: &str) -> Option<Commodity> {
        Commodity::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn display_name(self, language: Language) -> &'static str {
        DISPLAY_NAMES[self.index()][language.index()]
    }

    /// Dropdown label: local name followed by the English name.
    pub fn label(self, language: Language) -> String {
        format!(
            "{} ({})",
            self.display_name(language),
            self.display_name(Language::English)
        )
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Commodity::Tomato => "🍅",
            Commodity::Onion => "🧅",
            Commodity::Potato => "🥔",
            Commodity::Wheat => "🌾",
            Commodity::Rice => "🍚",
            Commodity::Chillies => "🌶️",
            Commodity::Bhindi => "🥬",
            Commodity::Banana => "🍌",
        }
    }

    /// Every name this commodity goes by, across all languages.
    pub fn all_names(self) -> impl Iterator<Item = &'static str> {
        DISPLAY_NAMES[self.index()].into_iter()
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name(Language::English))
    }
}

impl FromStr for Commodity {
    type Err = UnknownCommodity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Commodity::from_id(&s.trim().to_lowercase()).ok_or_else(|| UnknownCommodity(s.to_string()))
    }
}
