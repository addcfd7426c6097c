use dioxus::prelude::*;

use mandi_common::commodity::Commodity;
use mandi_common::language::Language;
use mandi_common::price::{PriceBook, Trend};

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend trend-up",
        Trend::Down => "trend trend-down",
        Trend::Stable => "trend trend-stable",
    }
}

/// Today's quote for one commodity.
#[component]
pub fn PriceCard(commodity: Commodity, language: Language, offline: bool) -> Element {
    let book = use_context::<PriceBook>();
    let record = book.get(commodity);
    let name = commodity.display_name(language);
    let unit = record.unit;
    let icon = record.trend.icon();
    let change = record.change_label();
    let updated = record.updated_label();

    rsx! {
        div { class: "price-card",
            if offline {
                div { class: "offline-tag", "Offline Data" }
            }
            div { class: "price-card-header",
                h3 { class: "native-script", "{name}" }
                div { class: trend_class(record.trend),
                    span { "{icon}" }
                    span { "{change}" }
                }
            }
            div { class: "price-row",
                span { "Modal Price:" }
                span { class: "price-modal", "{record.modal} {unit}" }
            }
            div { class: "price-row small",
                span { "Min: {record.minimum} {unit}" }
                span { "Max: {record.maximum} {unit}" }
            }
            div { class: "price-meta",
                p { "{record.market}" }
                p { "Updated: {updated}" }
            }
        }
    }
}
