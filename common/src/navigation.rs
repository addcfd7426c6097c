//! Which screen is showing, and how actions move between them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Negotiation,
    Dashboard,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Negotiation => "negotiation",
            Screen::Dashboard => "dashboard",
        }
    }

    /// Unknown names land on the home screen.
    pub fn from_name(name: &str) -> Screen {
        match name.trim().to_ascii_lowercase().as_str() {
            "negotiation" => Screen::Negotiation,
            "dashboard" => Screen::Dashboard,
            "home" => Screen::Home,
            other => {
                tracing::debug!(screen = other, "unknown screen, showing home");
                Screen::Home
            }
        }
    }

    /// Where `action` leads from here; `None` if it isn't offered on this screen.
    pub fn follow(self, action: NavAction) -> Option<Screen> {
        match (self, action) {
            (Screen::Home, NavAction::OpenNegotiation) => Some(Screen::Negotiation),
            (Screen::Home, NavAction::OpenDashboard) => Some(Screen::Dashboard),
            (Screen::Negotiation | Screen::Dashboard, NavAction::Back) => Some(Screen::Home),
            (Screen::Dashboard, NavAction::AskPrice) => Some(Screen::Home),
            (Screen::Dashboard, NavAction::Negotiate) => Some(Screen::Negotiation),
            _ => None,
        }
    }

    /// Like [`follow`](Self::follow) but stays put on an invalid action.
    pub fn navigate(self, action: NavAction) -> Screen {
        self.follow(action).unwrap_or_else(|| {
            tracing::debug!(screen = %self, ?action, "action not offered here");
            self
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenNegotiation,
    OpenDashboard,
    Back,
    /// Dashboard quick action.
    AskPrice,
    /// Dashboard quick action.
    Negotiate,
}
