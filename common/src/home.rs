//! Home screen: ask for a price by voice or by picking a commodity.

use chrono::{DateTime, Utc};

use crate::commodity::Commodity;
use crate::i18n::labels;
use crate::language::Language;
use crate::timeline::{Reducer, Transition};
use crate::voice::{detect_commodity, Transcript, VoiceError, VoiceSimulator};

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    SelectLanguage(Language),
    /// `None` clears the selection (the dropdown placeholder).
    SelectCommodity(Option<Commodity>),
    MicPressed,
    VoiceRecognized(Transcript),
    /// Fill in the demo question without using the microphone.
    TryDemoQuery,
    ToggleVision(bool),
    ConnectivityChanged { offline: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub language: Language,
    pub commodity: Option<Commodity>,
    pub listening: bool,
    pub last_voice_input: Option<String>,
    pub vision_mode: bool,
    pub offline: bool,
    pub last_error: Option<VoiceError>,
    voice: VoiceSimulator,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(VoiceSimulator::default())
    }
}

impl HomeState {
    pub fn new(voice: VoiceSimulator) -> Self {
        Self {
            language: Language::Hindi,
            commodity: Some(Commodity::Tomato),
            listening: false,
            last_voice_input: None,
            vision_mode: false,
            offline: false,
            last_error: None,
            voice,
        }
    }

    pub fn voice(&self) -> &VoiceSimulator {
        &self.voice
    }
}

impl Reducer for HomeState {
    type Event = HomeEvent;

    fn reduce(&self, event: HomeEvent, _now: DateTime<Utc>) -> Transition<Self, HomeEvent> {
        let mut next = self.clone();
        match event {
            HomeEvent::SelectLanguage(language) => {
                next.language = language;
                Transition::to(next)
            }
            HomeEvent::SelectCommodity(commodity) => {
                next.commodity = commodity;
                Transition::to(next)
            }
            HomeEvent::MicPressed => {
                if self.listening {
                    return Transition::to(next);
                }
                match self.voice.begin(self.language) {
                    Ok(pending) => {
                        next.listening = true;
                        next.last_voice_input = None;
                        next.last_error = None;
                        Transition::to(next).with_effect(
                            pending.delay,
                            HomeEvent::VoiceRecognized(pending.transcript),
                        )
                    }
                    Err(err) => {
                        tracing::warn!(%err, "voice input unavailable");
                        next.listening = false;
                        next.last_error = Some(err);
                        Transition::to(next)
                    }
                }
            }
            HomeEvent::VoiceRecognized(transcript) => {
                next.listening = false;
                next.commodity = Some(detect_commodity(&transcript.text).unwrap_or(Commodity::Tomato));
                next.last_voice_input = Some(transcript.text);
                Transition::to(next)
            }
            HomeEvent::TryDemoQuery => {
                next.last_voice_input = Some(labels(self.language).demo_query.to_string());
                next.commodity = Some(Commodity::Tomato);
                Transition::to(next)
            }
            HomeEvent::ToggleVision(enabled) => {
                next.vision_mode = enabled;
                Transition::to(next)
            }
            HomeEvent::ConnectivityChanged { offline } => {
                next.offline = offline;
                Transition::to(next)
            }
        }
    }
}
