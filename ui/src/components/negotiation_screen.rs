use chrono::Utc;
use dioxus::prelude::*;

use mandi_common::advisory::{FairPriceShield, Severity};
use mandi_common::conversation::{ConversationMessage, NegotiationSuggestion, Speaker};
use mandi_common::navigation::NavAction;
use mandi_common::negotiation::{NegotiationEvent, NegotiationState};
use mandi_common::price::{format_rate, PriceBook};

use super::effects::use_reducer;
use super::footer::Footer;
use super::home_screen::OfflineBanner;
use super::platform::use_connectivity;
use super::vision::VisionToggle;

#[component]
pub fn NegotiationScreen(on_navigate: EventHandler<NavAction>) -> Element {
    let session = use_reducer(|| NegotiationState::opening(Utc::now()));
    let connectivity = use_connectivity();
    let book = use_context::<PriceBook>();
    let mut show_market = use_signal(|| false);

    use_effect(move || {
        let offline = connectivity.read().offline;
        session.dispatch(NegotiationEvent::ConnectivityChanged { offline });
    });

    let state = session.state().read().clone();
    let shield = state.shield(&book);
    let record = book.get(state.commodity);
    let vendor = state.vendor_language;
    let buyer = state.buyer_language;
    let commodity_name = state.commodity.display_name(vendor);
    let min_rate = format_rate(record.minimum, record.unit);
    let max_rate = format_rate(record.maximum, record.unit);
    let modal_rate = format_rate(record.modal, record.unit);

    rsx! {
        div { class: "screen negotiation-screen",
            header { class: "app-header",
                button {
                    class: "back",
                    onclick: move |_| on_navigate.call(NavAction::Back),
                    "←"
                }
                div { class: "header-title",
                    h1 { class: "native-script", "बातचीत" }
                    p { class: "small",
                        "{vendor.flag()} {vendor.native_name()} ↔ {buyer.flag()} {buyer.native_name()}"
                    }
                }
                button {
                    class: "market-button",
                    onclick: move |_| show_market.set(true),
                    "📊"
                }
                span { class: if state.offline { "status cached" } else { "status live" },
                    if state.offline { "Cached" } else { "Live" }
                }
            }

            if state.offline {
                OfflineBanner {}
            }

            if show_market() {
                div { class: "modal-backdrop",
                    div { class: "modal",
                        h3 { class: "native-script", "{state.commodity.emoji()} {commodity_name} - {record.market}" }
                        p { "Min: {min_rate}" }
                        p { "Max: {max_rate}" }
                        p { class: "strong", "Modal: {modal_rate}" }
                        p { class: "small", "{record.trend.icon()} {record.change_label()} • {record.updated_label()}" }
                        button { onclick: move |_| show_market.set(false), "OK" }
                    }
                }
            }

            main { class: "screen-body",
                VisionToggle {
                    enabled: state.vision_mode,
                    on_toggle: move |on| session.dispatch(NegotiationEvent::ToggleVision(on)),
                }

                div { class: "demo-bar",
                    button {
                        class: "demo-button",
                        disabled: state.demo_running,
                        onclick: move |_| session.dispatch(NegotiationEvent::StartDemo),
                        if state.demo_running { "⏳ Demo चल रहा है..." } else { "▶ Demo Negotiation" }
                    }
                }

                div { class: "messages",
                    if state.messages.is_empty() {
                        p { class: "muted small", "..." }
                    }
                    for message in state.messages.iter() {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                }

                if let Some(shield) = shield.filter(|s| s.show_warning()) {
                    ShieldWarning { shield }
                }

                if let Some(suggestion) = state.suggestion.clone() {
                    SuggestionPanel {
                        suggestion,
                        on_use: move |_| session.dispatch(NegotiationEvent::UseSuggestion),
                    }
                }

                form {
                    class: "reply",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        session.dispatch(NegotiationEvent::SendMessage);
                    },
                    input {
                        r#type: "text",
                        placeholder: "अपना जवाब लिखें...",
                        value: "{state.input}",
                        oninput: move |evt| session.dispatch(NegotiationEvent::InputChanged(evt.value())),
                    }
                    button {
                        r#type: "submit",
                        disabled: !state.can_send(),
                        "भेजें"
                    }
                }
            }

            Footer { vision_mode: state.vision_mode }
        }
    }
}

#[component]
fn MessageBubble(message: ConversationMessage) -> Element {
    let side = match message.speaker {
        Speaker::Vendor => "bubble vendor",
        Speaker::Buyer => "bubble buyer",
    };

    rsx! {
        div { class: side,
            p { class: "native-script", "{message.display_text()}" }
            if message.speaker == Speaker::Buyer {
                p { class: "original small", "{message.language.flag()} {message.original_text}" }
            }
            span { class: "time small", "{message.time_label()}" }
        }
    }
}

#[component]
fn ShieldWarning(shield: FairPriceShield) -> Element {
    let tone = match shield.severity() {
        Some(Severity::High) => "shield-warning high",
        _ => "shield-warning medium",
    };

    rsx! {
        div { class: tone,
            h4 { "🛡️ Fair Price Shield" }
            p { "{shield.message()}" }
            if let Some(advice) = shield.recommendation() {
                p { class: "small", "{advice}" }
            }
        }
    }
}

#[component]
fn SuggestionPanel(suggestion: NegotiationSuggestion, on_use: EventHandler<()>) -> Element {
    rsx! {
        div { class: "suggestion",
            div { class: "suggestion-head",
                h4 { class: "native-script", "🤖 AI सुझाव" }
                span { class: "confidence", "{suggestion.confidence_percent()}%" }
            }
            p { class: "native-script", "{suggestion.reasoning}" }
            button {
                class: "primary",
                onclick: move |_| on_use.call(()),
                "{suggestion.as_reply()}"
            }
        }
    }
}
