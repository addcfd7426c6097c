mod components;

use dioxus::logger::tracing::Level;

use components::app::App;

/// Log level baked in at build time: `MANDI_LOG=debug dx serve`.
fn log_level() -> Level {
    match option_env!("MANDI_LOG").unwrap_or("info") {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(log_level()) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}
