//! "Vision 2048" preview cards. Purely decorative; all numbers are fixed.

use dioxus::prelude::*;

use mandi_common::advisory::SevenDayOutlook;
use mandi_common::commodity::Commodity;
use mandi_common::i18n::labels;
use mandi_common::language::Language;
use mandi_common::price::{PriceBook, Trend};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn VisionToggle(enabled: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "vision-toggle",
            span { if enabled { "🚀 Vision 2048" } else { "🌾 Today" } }
            button {
                class: if enabled { "switch on" } else { "switch" },
                role: "switch",
                "aria-checked": "{enabled}",
                onclick: move |_| on_toggle.call(!enabled),
                span { class: "knob" }
            }
        }
    }
}

#[component]
pub fn VisionPanel(language: Language) -> Element {
    let l = labels(language);
    let pillars = [
        ("⚖️", l.vision_fair_trade, l.vision_fair_trade_detail),
        ("🗣️", l.vision_multilingual, l.vision_multilingual_detail),
        ("🤝", l.vision_every_vendor, l.vision_every_vendor_detail),
    ];

    rsx! {
        div { class: "vision-panel",
            h3 { class: "native-script", "{l.vision_title}" }
            p { class: "native-script", "{l.vision_subtitle}" }
            for (icon, title, detail) in pillars {
                div { class: "vision-pillar", key: "{title}",
                    span { class: "pillar-icon", "{icon}" }
                    div {
                        p { class: "pillar-title", "{title}" }
                        p { class: "pillar-detail", "{detail}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MarketForecast(commodity: Commodity, language: Language) -> Element {
    let book = use_context::<PriceBook>();
    let outlook = SevenDayOutlook::for_record(book.get(commodity));
    let l = labels(language);
    let bar_class = match outlook.trend {
        Trend::Up => "forecast-bar up",
        Trend::Down => "forecast-bar down",
        Trend::Stable => "forecast-bar stable",
    };

    rsx! {
        div { class: "vision-card forecast",
            div { class: "vision-card-header",
                span { "🔮" }
                h4 { class: "native-script", "{l.forecast_title}" }
                span { class: "badge-2048", "2048" }
            }
            div { class: "forecast-outlook",
                span { "{l.forecast_outlook}" }
                span { "{outlook.icon()} {outlook.label()}" }
            }
            div { class: "forecast-bars",
                for (index, day) in WEEKDAYS.iter().enumerate() {
                    div { class: "forecast-day", key: "{day}",
                        div { class: bar_class, style: "height: {20 + index * 3}px" }
                        span { "{day}" }
                    }
                }
            }
            p { class: "native-script", "{l.forecast_basis}" }
            p { class: "native-script disclaimer", "{l.forecast_disclaimer}" }
        }
    }
}

#[component]
pub fn TradeReceipt(language: Language) -> Element {
    let l = labels(language);
    let checks = [
        "Price source: Agmarknet + Local Co-op",
        "Digital receipt stored permanently",
        "Seller protection enabled",
    ];

    rsx! {
        div { class: "vision-card receipt",
            div { class: "vision-card-header",
                span { "🛡️" }
                h4 { class: "native-script", "{l.receipt_title}" }
                span { class: "badge-2048", "2048" }
            }
            div { class: "receipt-line",
                span { "✓ Blockchain verified" }
                span { class: "mono", "#TX4A9B" }
            }
            for check in checks {
                div { class: "receipt-line", key: "{check}", "✓ {check}" }
            }
            div { class: "receipt-footer",
                span { class: "native-script", "{l.receipt_footer}" }
                span { class: "secured", "🔒 Secured" }
            }
        }
    }
}

#[component]
pub fn MandiNetwork(language: Language) -> Element {
    let l = labels(language);
    rsx! {
        div { class: "vision-card network",
            div { class: "vision-card-header",
                span { "🌐" }
                h4 { class: "native-script", "{l.network_title}" }
                span { class: "badge-2048", "2048" }
            }
            div { class: "network-states",
                span { class: "state", "Bihar" }
                span { "↔" }
                span { class: "state", "Tamil Nadu" }
                span { "↔" }
                span { class: "state", "Maharashtra" }
            }
            p { class: "native-script", "{l.network_footer}" }
        }
    }
}

#[component]
pub fn EmpowermentIndex(language: Language) -> Element {
    let l = labels(language);
    let rows = [
        (l.empowerment_fair_pricing, 4),
        (l.empowerment_language, 5),
        (l.empowerment_offline, 4),
    ];

    rsx! {
        div { class: "vision-card empowerment",
            div { class: "vision-card-header",
                span { "💪" }
                h4 { class: "native-script", "{l.empowerment_title}" }
            }
            for (label, score) in rows {
                div { class: "empowerment-row", key: "{label}",
                    span { class: "native-script", "{label}" }
                    span { class: "dots",
                        for i in 1..=5 {
                            span { class: if i <= score { "dot filled" } else { "dot" } }
                        }
                    }
                }
            }
        }
    }
}
