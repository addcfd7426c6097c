use dioxus::prelude::*;

use mandi_common::commodity::Commodity;
use mandi_common::i18n::labels;
use mandi_common::language::Language;

#[component]
pub fn CommodityDropdown(
    selected: Option<Commodity>,
    language: Language,
    on_change: EventHandler<Option<Commodity>>,
) -> Element {
    let placeholder = labels(language).select_commodity;
    let value = selected.map(Commodity::id).unwrap_or_default();

    rsx! {
        select {
            class: "commodity-dropdown",
            value: "{value}",
            onchange: move |evt: Event<FormData>| {
                // The placeholder has an empty value and clears the selection.
                let choice = Commodity::from_id(&evt.value());
                tracing::debug!(?choice, "commodity selected");
                on_change.call(choice);
            },
            option { value: "", "{placeholder}" }
            for commodity in Commodity::ALL {
                option {
                    key: "{commodity.id()}",
                    value: "{commodity.id()}",
                    selected: selected == Some(commodity),
                    "{commodity.emoji()} {commodity.label(language)}"
                }
            }
        }
    }
}
