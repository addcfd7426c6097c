//! Host probes: connectivity, speech support and timers.

use std::time::Duration;

use dioxus::prelude::*;

use mandi_common::timeline::Timer;
use mandi_common::voice::SpeechCapability;

/// Mirrors the browser's online/offline signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Connectivity {
    pub offline: bool,
}

/// Install the connectivity signal for the whole app. Call once, from the shell.
pub fn use_connectivity_provider() -> Signal<Connectivity> {
    let signal = use_context_provider(|| {
        Signal::new(Connectivity {
            offline: !navigator_online(),
        })
    });
    use_hook(move || subscribe_connectivity(signal));
    signal
}

pub fn use_connectivity() -> Signal<Connectivity> {
    use_context::<Signal<Connectivity>>()
}

#[cfg(target_family = "wasm")]
fn navigator_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

#[cfg(not(target_family = "wasm"))]
fn navigator_online() -> bool {
    true
}

#[cfg(target_family = "wasm")]
fn subscribe_connectivity(mut signal: Signal<Connectivity>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; connectivity stays online");
        return;
    };

    for (event, offline) in [("online", false), ("offline", true)] {
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            tracing::info!(offline, "connectivity changed");
            signal.set(Connectivity { offline });
        }) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to listen for {event}: {:?}", e);
        }
        // Lives as long as the page.
        callback.forget();
    }
}

#[cfg(not(target_family = "wasm"))]
fn subscribe_connectivity(_signal: Signal<Connectivity>) {}

/// One-time check for a speech recognition API on `window`.
#[cfg(target_family = "wasm")]
pub fn probe_speech() -> SpeechCapability {
    use wasm_bindgen::JsValue;

    let supported = web_sys::window()
        .map(|window| {
            ["SpeechRecognition", "webkitSpeechRecognition"]
                .iter()
                .any(|name| js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false))
        })
        .unwrap_or(false);
    tracing::debug!(supported, "speech recognition probe");
    SpeechCapability::from_probe(supported)
}

#[cfg(not(target_family = "wasm"))]
pub fn probe_speech() -> SpeechCapability {
    SpeechCapability::Available
}

/// Timer for scheduled screen effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_family = "wasm")]
        {
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
        }
        #[cfg(not(target_family = "wasm"))]
        tokio::time::sleep(duration).await;
    }
}
