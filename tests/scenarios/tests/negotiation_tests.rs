use mandi_common::conversation::Speaker;
use mandi_common::navigation::{NavAction, Screen};
use mandi_common::negotiation::NegotiationEvent;
use mandi_scenarios::harness::ScenarioHarness;
use mandi_scenarios::init_tracing;

fn on_negotiation_screen() -> ScenarioHarness {
    init_tracing();
    let mut h = ScenarioHarness::setup();
    assert_eq!(h.navigate(NavAction::OpenNegotiation), Screen::Negotiation);
    h
}

/// The demo at t = 0, 500 ms and 1500 ms on a fixed clock.
#[test]
fn demo_unfolds_on_schedule() {
    let mut h = on_negotiation_screen();
    assert_eq!(h.negotiation().messages.len(), 3);

    h.negotiation_event(NegotiationEvent::StartDemo);
    assert!(h.negotiation().messages.is_empty());
    assert!(h.negotiation().suggestion.is_none());
    assert!(h.negotiation().demo_running);

    h.advance_ms(499);
    assert!(h.negotiation().messages.is_empty());

    h.advance_ms(1);
    let messages = &h.negotiation().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].speaker, Speaker::Buyer);
    assert_eq!(messages[0].original_text, "₹25 possible?");
    assert_eq!(messages[0].translated_text, "क्या ₹25 हो सकता है?");
    assert!(h.negotiation().suggestion.is_none());

    h.advance_ms(999);
    assert!(h.negotiation().suggestion.is_none());
    assert!(h.negotiation().demo_running);

    h.advance_ms(1);
    let state = h.negotiation();
    let suggestion = state.suggestion.as_ref().expect("suggestion at 1500 ms");
    assert_eq!(suggestion.counter_offer, 29);
    assert_eq!(suggestion.confidence, 0.92);
    assert!(!state.demo_running);
    assert_eq!(h.pending(), 0);
}

#[test]
fn retrigger_while_running_changes_nothing() {
    let mut h = on_negotiation_screen();
    h.negotiation_event(NegotiationEvent::StartDemo);
    h.negotiation_event(NegotiationEvent::StartDemo);
    assert_eq!(h.pending(), 1);

    h.advance_ms(500);
    let before = h.negotiation().clone();
    h.negotiation_event(NegotiationEvent::StartDemo);
    assert_eq!(h.negotiation(), &before);
    assert_eq!(h.pending(), 1);

    h.advance_ms(5_000);
    assert_eq!(h.negotiation().messages.len(), 1);
    assert!(h.negotiation().suggestion.is_some());
}

#[test]
fn demo_can_run_again_after_finishing() {
    let mut h = on_negotiation_screen();
    h.negotiation_event(NegotiationEvent::StartDemo);
    h.advance_ms(1_500);
    assert!(!h.negotiation().demo_running);

    h.negotiation_event(NegotiationEvent::StartDemo);
    assert!(h.negotiation().messages.is_empty());
    h.advance_ms(1_500);
    assert_eq!(h.negotiation().messages.len(), 1);
}

#[test]
fn leaving_the_screen_cancels_the_demo() {
    let mut h = on_negotiation_screen();
    h.negotiation_event(NegotiationEvent::StartDemo);
    h.advance_ms(200);
    assert_eq!(h.pending(), 1);

    assert_eq!(h.navigate(NavAction::Back), Screen::Home);
    assert_eq!(h.pending(), 0);
    h.advance_ms(5_000);

    h.navigate(NavAction::OpenNegotiation);
    let state = h.negotiation();
    assert!(!state.demo_running);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.suggestion.as_ref().map(|s| s.confidence), Some(0.85));
    assert_eq!(h.pending(), 0);
}

#[test]
fn typed_reply_interleaves_with_demo() {
    let mut h = on_negotiation_screen();
    h.negotiation_event(NegotiationEvent::StartDemo);

    h.advance_ms(100);
    h.negotiation_event(NegotiationEvent::InputChanged("₹30 final".into()));
    h.negotiation_event(NegotiationEvent::SendMessage);
    assert_eq!(h.negotiation().input, "");
    assert_eq!(h.negotiation().messages.len(), 1);
    assert_eq!(h.pending(), 2);

    h.advance_ms(2_000);
    let state = h.negotiation();
    let speakers: Vec<_> = state.messages.iter().map(|m| m.speaker).collect();
    assert_eq!(speakers, vec![Speaker::Vendor, Speaker::Buyer, Speaker::Buyer]);
    assert_eq!(state.messages[0].translated_text, "[Tamil: ₹30 final]");
    assert_eq!(state.messages[2].translated_text, "₹28 ठीक है");
    assert!(state.suggestion.is_some());

    let ids: Vec<_> = state.messages.iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
    assert_eq!(h.pending(), 0);
}

#[test]
fn typed_reply_timestamps_follow_the_clock() {
    let mut h = on_negotiation_screen();
    h.advance_ms(60_000);
    h.negotiation_event(NegotiationEvent::InputChanged("₹29".into()));
    h.negotiation_event(NegotiationEvent::SendMessage);
    let sent = h.negotiation().messages.last().unwrap().clone();
    assert_eq!(sent.time_label(), "09:11");

    h.advance_ms(2_000);
    let reply = h.negotiation().messages.last().unwrap();
    assert_eq!(reply.speaker, Speaker::Buyer);
    assert_eq!((reply.timestamp - sent.timestamp).num_milliseconds(), 2_000);
}

#[test]
fn using_the_suggestion_fills_the_input() {
    let mut h = on_negotiation_screen();
    let messages = h.negotiation().messages.clone();
    h.negotiation_event(NegotiationEvent::UseSuggestion);
    assert_eq!(h.negotiation().input, "₹29 चाहिए");
    assert_eq!(h.negotiation().messages, messages);

    h.negotiation_event(NegotiationEvent::SendMessage);
    assert_eq!(h.negotiation().messages.last().unwrap().original_text, "₹29 चाहिए");
}
