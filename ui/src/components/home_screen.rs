use dioxus::prelude::*;

use mandi_common::advisory::{fair_price_shield, reasoning, PriceGuidance};
use mandi_common::commodity::Commodity;
use mandi_common::home::{HomeEvent, HomeState};
use mandi_common::i18n::{labels, welcome, OFFLINE_BANNER, OFFLINE_BANNER_DETAIL};
use mandi_common::language::Language;
use mandi_common::navigation::NavAction;
use mandi_common::price::{format_rate, PriceBook};
use mandi_common::voice::VoiceSimulator;

use super::commodity_dropdown::CommodityDropdown;
use super::effects::use_reducer;
use super::footer::Footer;
use super::language_selector::LanguageSelector;
use super::platform::{probe_speech, use_connectivity};
use super::price_card::PriceCard;
use super::vision::{MandiNetwork, MarketForecast, TradeReceipt, VisionPanel, VisionToggle};
use super::voice_button::VoiceButton;

#[component]
pub fn HomeScreen(on_navigate: EventHandler<NavAction>) -> Element {
    let home = use_reducer(|| HomeState::new(VoiceSimulator::new(probe_speech())));
    let connectivity = use_connectivity();

    use_effect(move || {
        let offline = connectivity.read().offline;
        home.dispatch(HomeEvent::ConnectivityChanged { offline });
    });

    let state = home.state().read().clone();
    let language = state.language;
    let l = labels(language);
    let greeting = welcome(language);

    rsx! {
        div { class: "screen home-screen",
            header { class: "app-header",
                div {
                    h1 { class: "native-script", "मंडी साथी" }
                    p { class: "muted", "AI Trade Companion" }
                }
                LanguageSelector {
                    selected: language,
                    on_change: move |lang| home.dispatch(HomeEvent::SelectLanguage(lang)),
                }
            }

            if state.offline {
                OfflineBanner {}
            }

            section { class: "welcome-banner",
                div { class: "welcome-text",
                    span { class: "welcome-icon", "🙏" }
                    div {
                        h2 { class: "native-script", "{greeting.greeting}" }
                        p { class: "native-script", "{greeting.message}" }
                    }
                }
                div { class: "welcome-values",
                    for (emoji, caption) in greeting.values {
                        span { key: "{caption}", "{emoji} {caption}" }
                    }
                }
            }

            main { class: "screen-body",
                VisionToggle {
                    enabled: state.vision_mode,
                    on_toggle: move |on| home.dispatch(HomeEvent::ToggleVision(on)),
                }
                if state.vision_mode {
                    VisionPanel { language }
                }

                section { class: "ask-price",
                    h2 { class: "native-script", "{l.ask_price_title}" }
                    p { class: "muted", "{l.ask_price_hint}" }
                    p { class: "data-source", "📊 Mock Agmarknet Data • Updated 9:10 AM" }

                    VoiceButton {
                        listening: state.listening,
                        error: state.last_error.clone(),
                        on_press: move |_| home.dispatch(HomeEvent::MicPressed),
                    }

                    button {
                        class: "demo-button",
                        onclick: move |_| home.dispatch(HomeEvent::TryDemoQuery),
                        span { "▶ " }
                        span { class: "native-script", "{l.try_demo_query}" }
                    }
                    p { class: "muted small", "{l.demo_without_voice}" }

                    if let Some(heard) = &state.last_voice_input {
                        div { class: "heard",
                            p { class: "native-script", "आपने कहा: \"{heard}\"" }
                        }
                    } else if state.commodity == Some(Commodity::Tomato) {
                        ExampleCard { language }
                    }
                }

                section { class: "commodity-select",
                    label { class: "native-script", "{l.or_select_commodity}" }
                    CommodityDropdown {
                        selected: state.commodity,
                        language,
                        on_change: move |c| home.dispatch(HomeEvent::SelectCommodity(c)),
                    }
                }

                if let Some(commodity) = state.commodity {
                    section { class: "price-section",
                        h3 { class: "native-script", "{l.todays_price}" }
                        PriceCard { commodity, language, offline: state.offline }
                        AdviceCard { commodity }
                        if state.vision_mode {
                            MarketForecast { commodity, language }
                        }
                    }
                }

                if state.vision_mode {
                    section { class: "vision-previews",
                        h3 { class: "native-script", "{l.preview_title}" }
                        p { class: "native-script", "{l.preview_subtitle}" }
                        MarketForecast { commodity: state.commodity.unwrap_or(Commodity::Tomato), language }
                        TradeReceipt { language }
                        MandiNetwork { language }
                    }
                }

                div { class: "nav-buttons",
                    button {
                        class: "primary",
                        onclick: move |_| on_navigate.call(NavAction::OpenNegotiation),
                        "🗣️ {l.start_negotiation}"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| on_navigate.call(NavAction::OpenDashboard),
                        "📊 {l.view_all_prices}"
                    }
                }
            }

            Footer { vision_mode: state.vision_mode }
        }
    }
}

#[component]
pub fn OfflineBanner() -> Element {
    rsx! {
        div { class: "offline-banner",
            span { class: "pulse", "📶" }
            div {
                p { class: "native-script strong", "{OFFLINE_BANNER}" }
                p { class: "native-script small", "{OFFLINE_BANNER_DETAIL}" }
            }
            span { class: "small", "Offline" }
        }
    }
}

/// Worked tomato example shown before the first query.
#[component]
fn ExampleCard(language: Language) -> Element {
    let book = use_context::<PriceBook>();
    let tomato = book.get(Commodity::Tomato);
    let guidance = PriceGuidance::for_record(tomato);
    let l = labels(language);
    let range = format!(
        "₹{}–{}",
        guidance.floor,
        format_rate(tomato.modal + 2, tomato.unit)
    );
    let opening = format_rate(guidance.opening, guidance.unit);
    let average = format_rate(guidance.market_average, guidance.unit);

    rsx! {
        div { class: "example-card",
            h3 { class: "native-script", "🍅 {l.example_title}" }
            p { class: "example-range", "{range} ↑" }
            div { class: "example-detail",
                p { class: "native-script strong", "{l.example_suggested}: {opening}" }
                p { class: "native-script small", "{l.example_reason} {average}" }
            }
            p { class: "native-script small", "{l.example_hint}" }
        }
    }
}

/// AI suggestion plus the fair price shield for the selected commodity.
#[component]
fn AdviceCard(commodity: Commodity) -> Element {
    let book = use_context::<PriceBook>();
    let record = book.get(commodity);
    let guidance = PriceGuidance::for_record(record);
    let why = reasoning(record);
    let shield = fair_price_shield(record, None);
    let average = format_rate(guidance.market_average, guidance.unit);
    let floor = format_rate(guidance.floor, guidance.unit);
    let opening = format_rate(guidance.opening, guidance.unit);

    rsx! {
        div { class: "ai-suggestion",
            h4 { class: "native-script", "🤖 AI सुझाव:" }
            p { class: "native-script", "मार्केट औसत {average} है।" }
            p { class: "native-script", "{floor} से नीचे मत जाओ।" }
            p { class: "native-script", "{opening} से शुरू करो।" }
            p { class: "reason small",
                span { class: "strong", "कारण: " }
                "{why}"
            }
        }
        div { class: "shield-info",
            h5 { "🛡️ Fair Price Shield" }
            p { class: "small", "{shield.message()}" }
        }
    }
}
