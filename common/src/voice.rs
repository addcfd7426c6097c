use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commodity::Commodity;
use crate::language::Language;
use crate::timeline::Timer;

/// Simulated recognition latency.
pub const RECOGNITION_LATENCY: Duration = Duration::from_millis(1500);

/// Confidence reported for every scripted transcript.
pub const MOCK_CONFIDENCE: f32 = 0.95;

/// Kinds of voice failure. Only `Recognition` is raised by the simulator;
/// the rest are reserved for a real speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceErrorKind {
    Network,
    Permission,
    Recognition,
    Timeout,
}

impl fmt::Display for VoiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceErrorKind::Network => write!(f, "network"),
            VoiceErrorKind::Permission => write!(f, "permission"),
            VoiceErrorKind::Recognition => write!(f, "recognition"),
            VoiceErrorKind::Timeout => write!(f, "timeout"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
pub struct VoiceError {
    pub kind: VoiceErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl VoiceError {
    fn unsupported() -> Self {
        Self {
            kind: VoiceErrorKind::Recognition,
            message: "Voice recognition not supported in this browser".into(),
            retryable: false,
        }
    }
}

/// Result of the host's one-time speech recognition probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechCapability {
    #[default]
    Available,
    Unavailable,
}

impl SpeechCapability {
    pub fn from_probe(supported: bool) -> Self {
        if supported {
            SpeechCapability::Available
        } else {
            SpeechCapability::Unavailable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub confidence: f32,
    pub language: Language,
}

/// A recognition that has been started and will complete after `delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRecognition {
    pub delay: Duration,
    pub transcript: Transcript,
}

/// The sentence a user is pretended to have said, per language.
pub fn scripted_transcript(language: Language) -> &'static str {
    match language {
        Language::Hindi => "टमाटर का भाव क्या है",
        Language::English => "What is tomato price",
        Language::Tamil => "தக்காளி விலை என்ன",
        Language::Telugu => "టమాటో ధర ఎంత",
        Language::Bengali => "টমেটোর দাম কত",
        Language::Gujarati => "ટમેટાની કિંમત કેટલી છે",
        Language::Marathi => "टोमॅटोची किंमत काय आहे",
        Language::Punjabi => "ਟਮਾਟਰ ਦੀ ਕੀਮਤ ਕੀ ਹੈ",
        Language::Bhojpuri => "टमाटर के भाव का बा",
    }
}

/// Transcript lookup by raw language code; unknown codes get English.
pub fn scripted_transcript_for_code(code: &str) -> &'static str {
    scripted_transcript(Language::from_code_or_english(code))
}

/// First commodity mentioned anywhere in `text`, in any language.
pub fn detect_commodity(text: &str) -> Option<Commodity> {
    let lower = text.to_lowercase();
    Commodity::ALL.into_iter().find(|commodity| {
        commodity
            .all_names()
            .any(|name| lower.contains(&name.to_lowercase()))
    })
}

/// Stand-in for a speech-to-text engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSimulator {
    capability: SpeechCapability,
    latency: Duration,
}

impl Default for VoiceSimulator {
    fn default() -> Self {
        Self::new(SpeechCapability::Available)
    }
}

impl VoiceSimulator {
    pub fn new(capability: SpeechCapability) -> Self {
        Self {
            capability,
            latency: RECOGNITION_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn capability(&self) -> SpeechCapability {
        self.capability
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Start listening. Fails straight away when the host has no speech support.
    pub fn begin(&self, language: Language) -> Result<PendingRecognition, VoiceError> {
        if self.capability == SpeechCapability::Unavailable {
            return Err(VoiceError::unsupported());
        }
        Ok(PendingRecognition {
            delay: self.latency,
            transcript: Transcript {
                text: scripted_transcript(language).to_string(),
                confidence: MOCK_CONFIDENCE,
                language,
            },
        })
    }

    /// Listen and wait for the transcript. One result per call.
    pub async fn recognize<T: Timer>(
        &self,
        language: Language,
        timer: &T,
    ) -> Result<Transcript, VoiceError> {
        let pending = self.begin(language)?;
        timer.sleep(pending.delay).await;
        Ok(pending.transcript)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingTimer {
        waits: RefCell<Vec<Duration>>,
    }

    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    #[test]
    fn unknown_code_gets_english_transcript() {
        assert_eq!(scripted_transcript_for_code("xx"), "What is tomato price");
        assert_eq!(scripted_transcript_for_code(""), scripted_transcript(Language::English));
        assert_eq!(scripted_transcript_for_code("ta"), "தக்காளி விலை என்ன");
    }

    #[test]
    fn begin_schedules_transcript_after_latency() {
        let sim = VoiceSimulator::default();
        let pending = sim.begin(Language::Hindi).unwrap();
        assert_eq!(pending.delay, Duration::from_millis(1500));
        assert_eq!(pending.transcript.text, "टमाटर का भाव क्या है");
        assert_eq!(pending.transcript.confidence, 0.95);
    }

    #[test]
    fn unsupported_host_fails_without_retry() {
        let sim = VoiceSimulator::new(SpeechCapability::from_probe(false));
        let err = sim.begin(Language::English).unwrap_err();
        assert_eq!(err.kind, VoiceErrorKind::Recognition);
        assert!(!err.retryable);
        assert_eq!(
            err.to_string(),
            "recognition error: Voice recognition not supported in this browser"
        );
    }

    #[test]
    fn recognize_waits_once_then_delivers() {
        let timer = RecordingTimer::default();
        let sim = VoiceSimulator::default();
        let transcript =
            futures::executor::block_on(sim.recognize(Language::Punjabi, &timer)).unwrap();
        assert_eq!(transcript.text, "ਟਮਾਟਰ ਦੀ ਕੀਮਤ ਕੀ ਹੈ");
        assert_eq!(transcript.language, Language::Punjabi);
        assert_eq!(*timer.waits.borrow(), vec![RECOGNITION_LATENCY]);
    }

    #[test]
    fn recognize_does_not_wait_when_unsupported() {
        let timer = RecordingTimer::default();
        let sim = VoiceSimulator::new(SpeechCapability::Unavailable);
        let result = futures::executor::block_on(sim.recognize(Language::Hindi, &timer));
        assert!(result.is_err());
        assert!(timer.waits.borrow().is_empty());
    }

    #[test]
    fn every_scripted_transcript_mentions_tomato() {
        for lang in Language::ALL {
            assert_eq!(
                detect_commodity(scripted_transcript(lang)),
                Some(Commodity::Tomato),
                "{lang:?}"
            );
        }
    }

    #[test]
    fn detects_other_commodities() {
        assert_eq!(detect_commodity("ONION rate today?"), Some(Commodity::Onion));
        assert_eq!(detect_commodity("आलू कितने का है"), Some(Commodity::Potato));
        assert_eq!(detect_commodity("hello"), None);
    }
}
