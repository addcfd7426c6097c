use dioxus::prelude::*;

use mandi_common::dashboard::{DashboardEvent, DashboardState, MAIN_COMMODITIES};
use mandi_common::i18n::labels;
use mandi_common::navigation::NavAction;
use mandi_common::price::PriceBook;

use super::effects::use_reducer;
use super::footer::Footer;
use super::home_screen::OfflineBanner;
use super::language_selector::LanguageSelector;
use super::platform::use_connectivity;
use super::price_card::PriceCard;
use super::vision::{EmpowermentIndex, MandiNetwork, VisionToggle};

#[component]
pub fn VendorDashboard(on_navigate: EventHandler<NavAction>) -> Element {
    let dashboard = use_reducer(DashboardState::default);
    let connectivity = use_connectivity();
    let book = use_context::<PriceBook>();

    use_effect(move || {
        let offline = connectivity.read().offline;
        dashboard.dispatch(DashboardEvent::ConnectivityChanged { offline });
    });

    let state = dashboard.state().read().clone();
    let language = state.language;
    let l = labels(language);
    let summary = state.summary(&book);
    let refreshed = state
        .refreshed_at
        .map(|at| at.format("%H:%M").to_string());

    let activity = [
        ("✅", l.activity_negotiation_done, "2h"),
        ("🧅", l.activity_checked_onion, "4h"),
        ("🔄", l.activity_prices_updated, "9:10 AM"),
    ];

    rsx! {
        div { class: "screen dashboard-screen",
            header { class: "app-header",
                button {
                    class: "back",
                    onclick: move |_| on_navigate.call(NavAction::Back),
                    "←"
                }
                div { class: "header-title",
                    h1 { class: "native-script", "{l.dashboard_title}" }
                    p { class: if state.offline { "status cached small" } else { "status live small" },
                        "{state.status_text()}"
                        if let Some(at) = refreshed {
                            " • {at}"
                        }
                    }
                }
                LanguageSelector {
                    selected: language,
                    on_change: move |lang| dashboard.dispatch(DashboardEvent::SelectLanguage(lang)),
                }
            }

            if state.offline {
                OfflineBanner {}
            }

            main { class: "screen-body",
                VisionToggle {
                    enabled: state.vision_mode,
                    on_toggle: move |on| dashboard.dispatch(DashboardEvent::ToggleVision(on)),
                }

                section { class: "summary",
                    h2 { class: "native-script", "{l.todays_summary}" }
                    div { class: "summary-grid",
                        div { class: "summary-tile up",
                            p { class: "count", "{summary.rising}" }
                            p { class: "native-script small", "📈 {l.price_up}" }
                        }
                        div { class: "summary-tile down",
                            p { class: "count", "{summary.falling}" }
                            p { class: "native-script small", "📉 {l.price_down}" }
                        }
                        div { class: "summary-tile stable",
                            p { class: "count", "{summary.steady}" }
                            p { class: "small", "➖ Stable" }
                        }
                    }
                }

                section { class: "main-prices",
                    h2 { class: "native-script", "{l.main_prices}" }
                    for commodity in MAIN_COMMODITIES {
                        PriceCard { key: "{commodity.id()}", commodity, language, offline: state.offline }
                    }
                }

                section { class: "recent-activity",
                    h2 { class: "native-script", "{l.recent_activity}" }
                    for (icon, text, when) in activity {
                        div { class: "activity-row", key: "{text}",
                            span { "{icon}" }
                            p { class: "native-script", "{text}" }
                            span { class: "muted small", "{when}" }
                        }
                    }
                }

                div { class: "quick-actions",
                    button {
                        class: "primary",
                        onclick: move |_| on_navigate.call(NavAction::AskPrice),
                        "🎤 {l.quick_ask_price}"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| on_navigate.call(NavAction::Negotiate),
                        "🗣️ {l.quick_negotiate}"
                    }
                }

                if state.vision_mode {
                    EmpowermentIndex { language }
                    MandiNetwork { language }
                }

                p { class: "data-source small", "📊 {l.data_source}" }
            }

            Footer { vision_mode: state.vision_mode }
        }
    }
}
