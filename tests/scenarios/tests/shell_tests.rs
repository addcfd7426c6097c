use mandi_common::commodity::Commodity;
use mandi_common::dashboard::DashboardEvent;
use mandi_common::home::HomeEvent;
use mandi_common::language::Language;
use mandi_common::navigation::{NavAction, Screen};
use mandi_common::voice::{
    scripted_transcript, scripted_transcript_for_code, SpeechCapability, VoiceErrorKind,
    VoiceSimulator,
};
use mandi_scenarios::harness::ScenarioHarness;
use mandi_scenarios::init_tracing;

#[test]
fn unknown_screen_name_lands_on_home() {
    for name in ["", "settings", "NEGOTIATE", "home/1"] {
        assert_eq!(Screen::from_name(name), Screen::Home, "{name:?}");
    }
    assert_eq!(Screen::from_name("negotiation"), Screen::Negotiation);
}

#[test]
fn buttons_move_between_screens() {
    init_tracing();
    let mut h = ScenarioHarness::setup();
    assert_eq!(h.screen(), Screen::Home);

    // Back is not offered on home.
    assert_eq!(h.navigate(NavAction::Back), Screen::Home);

    assert_eq!(h.navigate(NavAction::OpenDashboard), Screen::Dashboard);
    assert_eq!(h.navigate(NavAction::Negotiate), Screen::Negotiation);
    assert_eq!(h.navigate(NavAction::OpenDashboard), Screen::Negotiation);
    assert_eq!(h.navigate(NavAction::Back), Screen::Home);
    assert_eq!(h.navigate(NavAction::OpenDashboard), Screen::Dashboard);
    assert_eq!(h.navigate(NavAction::AskPrice), Screen::Home);
}

#[test]
fn voice_query_selects_tomato_after_latency() {
    let mut h = ScenarioHarness::setup();
    h.home_event(HomeEvent::SelectCommodity(None));
    h.home_event(HomeEvent::MicPressed);
    assert!(h.home().listening);

    h.advance_ms(1_499);
    assert!(h.home().listening);
    assert_eq!(h.home().commodity, None);

    h.advance_ms(1);
    let home = h.home();
    assert!(!home.listening);
    assert_eq!(home.commodity, Some(Commodity::Tomato));
    assert_eq!(home.last_voice_input.as_deref(), Some("टमाटर का भाव क्या है"));
}

#[test]
fn voice_query_follows_selected_language() {
    let mut h = ScenarioHarness::setup();
    h.home_event(HomeEvent::SelectLanguage(Language::Tamil));
    h.home_event(HomeEvent::MicPressed);
    h.advance_ms(1_500);
    assert_eq!(h.home().last_voice_input.as_deref(), Some("தக்காளி விலை என்ன"));
}

#[test]
fn leaving_home_drops_pending_recognition() {
    let mut h = ScenarioHarness::setup();
    h.home_event(HomeEvent::MicPressed);
    h.navigate(NavAction::OpenDashboard);
    h.advance_ms(2_000);
    h.navigate(NavAction::AskPrice);
    assert!(!h.home().listening);
    assert_eq!(h.home().last_voice_input, None);
}

#[test]
fn missing_speech_support_fails_without_listening() {
    let mut h = ScenarioHarness::with_voice(VoiceSimulator::new(SpeechCapability::Unavailable));
    h.home_event(HomeEvent::MicPressed);
    let home = h.home();
    assert!(!home.listening);
    assert_eq!(h.pending(), 0);
    let err = home.last_error.as_ref().unwrap();
    assert_eq!(err.kind, VoiceErrorKind::Recognition);
    assert!(!err.retryable);
}

#[test]
fn unknown_language_code_gets_english_transcript() {
    assert_eq!(
        scripted_transcript_for_code("zz"),
        scripted_transcript(Language::English)
    );
    assert_eq!(scripted_transcript_for_code("zz"), "What is tomato price");
}

#[test]
fn connectivity_reaches_the_mounted_screen_and_survives_navigation() {
    let mut h = ScenarioHarness::setup();
    h.set_offline(true);
    assert!(h.home().offline);

    h.navigate(NavAction::OpenDashboard);
    assert!(h.dashboard().offline);
    assert_eq!(h.dashboard().status_text(), "ऑफलाइन - कल का डेटा");

    h.dashboard_event(DashboardEvent::SelectLanguage(Language::English));
    h.set_offline(false);
    assert_eq!(h.dashboard().status_text(), "Online - Live Data");
    assert_eq!(h.dashboard().refreshed_at, Some(h.now()));
}

#[test]
fn dashboard_summary_counts_trends() {
    let mut h = ScenarioHarness::setup();
    h.navigate(NavAction::OpenDashboard);
    let summary = h.dashboard().summary(&h.book);
    assert_eq!(summary.rising, 2);
    assert_eq!(summary.falling, 1);
    assert_eq!(summary.steady, 1);
}
