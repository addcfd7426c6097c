use dioxus::prelude::*;

#[component]
pub fn Footer(vision_mode: bool) -> Element {
    rsx! {
        footer { class: if vision_mode { "app-footer vision" } else { "app-footer" },
            if vision_mode {
                p { class: "footer-title", "AI for Every Mandi. Every Bhasha. Every Seller." }
                p { "Building Bharat's Trade Companion for 2048 🇮🇳" }
                p { class: "footer-meta", "🚀 Future-ready trade infrastructure ✨" }
            } else {
                p { class: "footer-title", "Built for Viksit Bharat 🇮🇳" }
                p { "AI for Every Mandi. Every Bhasha. Every Seller." }
                p { class: "footer-meta", "🤖 Made with ❤️ for Bharat's farmers" }
            }
        }
    }
}
