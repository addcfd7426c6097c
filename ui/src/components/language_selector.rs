use dioxus::prelude::*;

use mandi_common::language::Language;

/// Flag + native name button with a dropdown, plus always-visible script badges.
#[component]
pub fn LanguageSelector(selected: Language, on_change: EventHandler<Language>) -> Element {
    let mut open = use_signal(|| false);
    let is_open = open();
    let flag = selected.flag();
    let native = selected.native_name();

    rsx! {
        div { class: "language-selector",
            button {
                class: "language-current",
                onclick: move |_| open.set(!is_open),
                span { "{flag}" }
                span { class: "native-script", "{native}" }
                span { class: if is_open { "chevron open" } else { "chevron" }, "▾" }
            }
            div { class: "language-badges",
                // The last language is dropdown-only.
                for lang in Language::ALL.into_iter().take(Language::COUNT - 1) {
                    button {
                        key: "{lang.code()}",
                        class: if lang == selected { "language-badge active" } else { "language-badge" },
                        title: "{lang.english_name()}",
                        onclick: move |_| {
                            on_change.call(lang);
                            open.set(false);
                        },
                        "{lang.native_name()}"
                    }
                }
            }
            if is_open {
                div { class: "language-menu",
                    for lang in Language::ALL {
                        button {
                            key: "{lang.code()}",
                            class: if lang == selected { "language-option active" } else { "language-option" },
                            onclick: move |_| {
                                on_change.call(lang);
                                open.set(false);
                            },
                            span { "{lang.flag()}" }
                            span { class: "native-script", "{lang.native_name()}" }
                            span { class: "english-name", "{lang.english_name()}" }
                        }
                    }
                }
            }
        }
    }
}
