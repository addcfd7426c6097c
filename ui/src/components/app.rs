use dioxus::prelude::*;

use mandi_common::navigation::{NavAction, Screen};
use mandi_common::price::PriceBook;

use super::home_screen::HomeScreen;
use super::negotiation_screen::NegotiationScreen;
use super::platform::use_connectivity_provider;
use super::vendor_dashboard::VendorDashboard;

#[component]
pub fn App() -> Element {
    let loaded = use_hook(|| PriceBook::load().map_err(|e| e.to_string()));

    match loaded {
        Ok(book) => rsx! { Shell { book } },
        Err(e) => {
            tracing::error!("price fixtures unusable: {e}");
            rsx! {
                div { class: "fatal",
                    h1 { "मंडी साथी" }
                    p { "Price data could not be loaded: {e}" }
                }
            }
        }
    }
}

/// Owns the current screen. Each screen is mounted fresh on entry, so
/// anything it had scheduled is dropped when it is left.
#[component]
fn Shell(book: PriceBook) -> Element {
    use_context_provider(|| book.clone());
    use_connectivity_provider();
    let mut screen = use_signal(Screen::default);

    let navigate = move |action: NavAction| {
        let from = *screen.peek();
        let to = from.navigate(action);
        if to == from {
            tracing::warn!(%from, ?action, "navigation not allowed");
            return;
        }
        tracing::info!(%from, %to, "navigate");
        screen.set(to);
    };

    rsx! {
        div { class: "mandi-app",
            match screen() {
                Screen::Home => rsx! { HomeScreen { on_navigate: navigate } },
                Screen::Negotiation => rsx! { NegotiationScreen { on_navigate: navigate } },
                Screen::Dashboard => rsx! { VendorDashboard { on_navigate: navigate } },
            }
        }
    }
}
