//! Mandi Saathi in the terminal.
//!
//! Drives the same screen reducers as the web app against the bundled price
//! fixture. Scripted delays (voice recognition, negotiation turns) play out in
//! real time on tokio, scaled by `--speed`.

mod render;
mod session;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use mandi_common::commodity::Commodity;
use mandi_common::conversation::MessageId;
use mandi_common::home::{HomeEvent, HomeState};
use mandi_common::i18n::{labels, OFFLINE_BANNER, OFFLINE_BANNER_DETAIL};
use mandi_common::language::Language;
use mandi_common::negotiation::{NegotiationEvent, NegotiationState};
use mandi_common::price::PriceBook;
use mandi_common::voice::{SpeechCapability, VoiceSimulator};
use tracing_subscriber::EnvFilter;

use render::AdviceReport;
use session::{Session, TokioTimer};

#[derive(Parser)]
#[command(name = "mandi-demo", about = "Mandi Saathi terminal demo")]
struct Cli {
    /// Language for labels and the scripted voice query (code or English name).
    #[arg(long, global = true, default_value = "hi")]
    language: Language,

    /// Playback speed for scripted delays (2 = twice as fast).
    #[arg(long, global = true, default_value_t = 1.0, value_parser = parse_speed)]
    speed: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Today's price for every commodity.
    Prices,
    /// Market reasoning and fair price shield for one commodity.
    Advise {
        commodity: Commodity,
        /// Buyer's offer to check against the safe minimum.
        #[arg(long)]
        offer: Option<u32>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Ask for a price by (simulated) voice.
    Voice {
        /// Behave as if the host has no speech recognition.
        #[arg(long)]
        no_speech: bool,
    },
    /// Play the scripted negotiation demo.
    Negotiate {
        /// Also send this vendor message while the demo runs.
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        offline: bool,
    },
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err("speed must be a positive number".into())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let book = PriceBook::load().context("bundled price fixture is invalid")?;
    let timer = TokioTimer::new(cli.speed);

    match cli.command {
        Command::Prices => prices(&book, cli.language),
        Command::Advise {
            commodity,
            offer,
            json,
        } => {
            let report = AdviceReport::new(commodity, book.get(commodity), offer, cli.language);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in report.lines(cli.language) {
                    println!("{line}");
                }
            }
        }
        Command::Voice { no_speech } => voice(&book, cli.language, timer, no_speech).await,
        Command::Negotiate { message, offline } => {
            negotiate(&book, timer, message, offline).await
        }
    }
    Ok(())
}

fn prices(book: &PriceBook, language: Language) {
    println!("{}", labels(language).main_prices);
    for (commodity, record) in book.iter() {
        println!("{}", render::price_line(commodity, record, language));
    }
    println!("{}", labels(language).data_source);
}

async fn voice(book: &PriceBook, language: Language, timer: TokioTimer, no_speech: bool) {
    let simulator = VoiceSimulator::new(SpeechCapability::from_probe(!no_speech));
    let mut home = Session::new(HomeState::new(simulator), timer);
    home.dispatch(HomeEvent::SelectLanguage(language));

    println!("🎤 {}", labels(language).ask_price_hint);
    let transcript = match simulator.recognize(language, &timer).await {
        Ok(transcript) => transcript,
        Err(err) => {
            tracing::warn!(%err, "voice input unavailable");
            println!("{}", err.message);
            return;
        }
    };
    println!(
        "   \"{}\" ({:.0}%)",
        transcript.text,
        transcript.confidence * 100.0
    );
    home.dispatch(HomeEvent::VoiceRecognized(transcript));

    let commodity = home.state().commodity.unwrap_or(Commodity::Tomato);
    let report = AdviceReport::new(commodity, book.get(commodity), None, language);
    for line in report.lines(language) {
        println!("{line}");
    }
}

async fn negotiate(book: &PriceBook, timer: TokioTimer, message: Option<String>, offline: bool) {
    let mut session = Session::new(NegotiationState::opening(Utc::now()), timer);
    if offline {
        session.dispatch(NegotiationEvent::ConnectivityChanged { offline: true });
        println!("📶 {OFFLINE_BANNER}");
        println!("   {OFFLINE_BANNER_DETAIL}");
    }

    let state = session.state();
    if let Some(shield) = state.shield(book) {
        for line in render::shield_lines(&shield) {
            println!("{line}");
        }
    }
    for message in &state.messages {
        println!("{}", render::message_line(message));
    }
    if let Some(suggestion) = &state.suggestion {
        println!("{}", render::suggestion_line(suggestion));
    }

    println!("--- demo ---");
    let mut last_shown: MessageId = state.messages.last().map_or(0, |m| m.id);
    session.dispatch(NegotiationEvent::StartDemo);
    if let Some(text) = message {
        session.dispatch(NegotiationEvent::InputChanged(text));
        session.dispatch(NegotiationEvent::SendMessage);
    }

    let mut show = |state: &NegotiationState| {
        let since = last_shown;
        for message in state.messages.iter().filter(|m| m.id > since) {
            println!("{}", render::message_line(message));
            last_shown = message.id;
        }
    };
    show(session.state());

    let mut last_suggestion = None;
    session
        .run_until_idle(|state| {
            show(state);
            if state.suggestion != last_suggestion {
                if let Some(suggestion) = &state.suggestion {
                    println!("{}", render::suggestion_line(suggestion));
                }
                last_suggestion = state.suggestion.clone();
            }
        })
        .await;

    session.dispatch(NegotiationEvent::UseSuggestion);
    if session.state().can_send() {
        println!("> {}", session.state().input);
    }
}
