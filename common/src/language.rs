use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the assistant can speak and display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "gu")]
    Gujarati,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "pa")]
    Punjabi,
    #[serde(rename = "bho")]
    Bhojpuri,
}

/// A language code that is not one of the supported nine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const COUNT: usize = 9;

    pub const ALL: [Language; Language::COUNT] = [
        Language::Hindi,
        Language::English,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
        Language::Gujarati,
        Language::Marathi,
        Language::Punjabi,
        Language::Bhojpuri,
    ];

    /// Position in [`Language::ALL`]; used to index per-language tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// ISO-639 style code (`bho` is ISO-639-3).
    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Bengali => "bn",
            Language::Gujarati => "gu",
            Language::Marathi => "mr",
            Language::Punjabi => "pa",
            Language::Bhojpuri => "bho",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Resolve a code, treating anything unrecognised as English.
    ///
    /// This is the demo's fallback policy for scripted content; callers that
    /// need to reject bad input should use [`Language::from_code`] or `FromStr`.
    pub fn from_code_or_english(code: &str) -> Language {
        Language::from_code(code).unwrap_or(Language::English)
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी",
            Language::English => "English",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Bengali => "বাংলা",
            Language::Gujarati => "ગુજરાતી",
            Language::Marathi => "मराठी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
            Language::Bhojpuri => "भोजपुरी",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Bengali => "Bengali",
            Language::Gujarati => "Gujarati",
            Language::Marathi => "Marathi",
            Language::Punjabi => "Punjabi",
            Language::Bhojpuri => "Bhojpuri",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            _ => "🇮🇳",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts either the language code or the English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == needle || lang.english_name().to_lowercase() == needle)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
