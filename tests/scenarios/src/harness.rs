//! The whole app on a virtual clock.
//!
//! Mirrors the navigation shell: one screen is mounted at a time, leaving a
//! screen throws away its state along with any effects it had scheduled, and
//! entering a screen mounts it fresh.

use std::time::Duration;

use chrono::{DateTime, Utc};

use mandi_common::dashboard::{DashboardEvent, DashboardState};
use mandi_common::home::{HomeEvent, HomeState};
use mandi_common::navigation::{NavAction, Screen};
use mandi_common::negotiation::{NegotiationEvent, NegotiationState};
use mandi_common::price::PriceBook;
use mandi_common::timeline::VirtualTimeline;
use mandi_common::voice::VoiceSimulator;

use crate::{base_time, price_book};

enum Mounted {
    Home(VirtualTimeline<HomeState>),
    Negotiation(VirtualTimeline<NegotiationState>),
    Dashboard(VirtualTimeline<DashboardState>),
}

pub struct ScenarioHarness {
    pub book: PriceBook,
    voice: VoiceSimulator,
    offline: bool,
    elapsed: Duration,
    mounted: Mounted,
}

impl ScenarioHarness {
    /// Start on the home screen at [`base_time`].
    pub fn setup() -> Self {
        Self::with_voice(VoiceSimulator::default())
    }

    pub fn with_voice(voice: VoiceSimulator) -> Self {
        let mut harness = Self {
            book: price_book(),
            voice,
            offline: false,
            elapsed: Duration::ZERO,
            mounted: Mounted::Home(VirtualTimeline::new(HomeState::new(voice), base_time())),
        };
        harness.mount(Screen::Home);
        harness
    }

    pub fn now(&self) -> DateTime<Utc> {
        let elapsed =
            chrono::Duration::from_std(self.elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        base_time() + elapsed
    }

    pub fn screen(&self) -> Screen {
        match self.mounted {
            Mounted::Home(_) => Screen::Home,
            Mounted::Negotiation(_) => Screen::Negotiation,
            Mounted::Dashboard(_) => Screen::Dashboard,
        }
    }

    /// Effects still waiting on the mounted screen.
    pub fn pending(&self) -> usize {
        match &self.mounted {
            Mounted::Home(tl) => tl.pending(),
            Mounted::Negotiation(tl) => tl.pending(),
            Mounted::Dashboard(tl) => tl.pending(),
        }
    }

    /// Press a navigation button. Returns the screen now showing.
    pub fn navigate(&mut self, action: NavAction) -> Screen {
        let current = self.screen();
        let next = current.navigate(action);
        if next != current {
            tracing::debug!(from = %current, to = %next, dropped = self.pending(), "navigate");
            self.mount(next);
        }
        next
    }

    pub fn advance_by(&mut self, step: Duration) {
        self.elapsed += step;
        match &mut self.mounted {
            Mounted::Home(tl) => tl.advance_by(step),
            Mounted::Negotiation(tl) => tl.advance_by(step),
            Mounted::Dashboard(tl) => tl.advance_by(step),
        }
    }

    pub fn advance_ms(&mut self, millis: u64) {
        self.advance_by(Duration::from_millis(millis));
    }

    /// Flip the connectivity signal the shell observes.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
        match &mut self.mounted {
            Mounted::Home(tl) => tl.dispatch(HomeEvent::ConnectivityChanged { offline }),
            Mounted::Negotiation(tl) => {
                tl.dispatch(NegotiationEvent::ConnectivityChanged { offline })
            }
            Mounted::Dashboard(tl) => tl.dispatch(DashboardEvent::ConnectivityChanged { offline }),
        }
    }

    pub fn home(&self) -> &HomeState {
        match &self.mounted {
            Mounted::Home(tl) => tl.state(),
            _ => panic!("home screen is not mounted (showing {})", self.screen()),
        }
    }

    pub fn negotiation(&self) -> &NegotiationState {
        match &self.mounted {
            Mounted::Negotiation(tl) => tl.state(),
            _ => panic!("negotiation screen is not mounted (showing {})", self.screen()),
        }
    }

    pub fn dashboard(&self) -> &DashboardState {
        match &self.mounted {
            Mounted::Dashboard(tl) => tl.state(),
            _ => panic!("dashboard screen is not mounted (showing {})", self.screen()),
        }
    }

    pub fn home_event(&mut self, event: HomeEvent) {
        match &mut self.mounted {
            Mounted::Home(tl) => tl.dispatch(event),
            _ => panic!("home screen is not mounted"),
        }
    }

    pub fn negotiation_event(&mut self, event: NegotiationEvent) {
        match &mut self.mounted {
            Mounted::Negotiation(tl) => tl.dispatch(event),
            _ => panic!("negotiation screen is not mounted"),
        }
    }

    pub fn dashboard_event(&mut self, event: DashboardEvent) {
        match &mut self.mounted {
            Mounted::Dashboard(tl) => tl.dispatch(event),
            _ => panic!("dashboard screen is not mounted"),
        }
    }

    fn mount(&mut self, screen: Screen) {
        let now = self.now();
        let offline = self.offline;
        self.mounted = match screen {
            Screen::Home => {
                let mut tl = VirtualTimeline::new(HomeState::new(self.voice), now);
                tl.dispatch(HomeEvent::ConnectivityChanged { offline });
                Mounted::Home(tl)
            }
            Screen::Negotiation => {
                let mut tl = VirtualTimeline::new(NegotiationState::opening(now), now);
                tl.dispatch(NegotiationEvent::ConnectivityChanged { offline });
                Mounted::Negotiation(tl)
            }
            Screen::Dashboard => {
                let mut tl = VirtualTimeline::new(DashboardState::default(), now);
                tl.dispatch(DashboardEvent::ConnectivityChanged { offline });
                Mounted::Dashboard(tl)
            }
        };
    }
}
