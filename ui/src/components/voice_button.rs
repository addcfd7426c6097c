use dioxus::prelude::*;

use mandi_common::voice::VoiceError;

/// Big round microphone button with its status line.
#[component]
pub fn VoiceButton(listening: bool, error: Option<VoiceError>, on_press: EventHandler<()>) -> Element {
    rsx! {
        div { class: "voice-interface",
            button {
                class: if listening { "mic-button listening" } else { "mic-button" },
                disabled: listening,
                onclick: move |_| on_press.call(()),
                if listening { "🔴" } else { "🎤" }
            }
            div { class: "mic-status",
                p { class: "native-script",
                    if listening { "सुन रहा हूं..." } else { "बोलने के लिए दबाएं" }
                }
                p { class: "muted",
                    if listening { "Listening..." } else { "Press to speak" }
                }
            }
            if let Some(err) = error {
                div { class: "voice-unavailable",
                    p { "{err.message}" }
                }
            }
        }
    }
}
