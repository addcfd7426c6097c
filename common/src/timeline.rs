//! Reducer plumbing shared by every screen.
//!
//! Screen state is an immutable snapshot. Each event produces a
//! [`Transition`]: the next snapshot plus any effects to deliver later.
//! Runtimes (the Dioxus UI, the terminal demo, tests) decide how to wait;
//! they all own the pending effects for the lifetime of the session, so
//! dropping a session drops whatever it had scheduled.

use std::fmt::Debug;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// An event to feed back into the reducer after `delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<E> {
    pub delay: Duration,
    pub event: E,
}

impl<E> Scheduled<E> {
    pub fn after(delay: Duration, event: E) -> Self {
        Self { delay, event }
    }
}

/// Result of reducing one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<Scheduled<E>>,
}

impl<S, E> Transition<S, E> {
    pub fn to(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, delay: Duration, event: E) -> Self {
        self.effects.push(Scheduled::after(delay, event));
        self
    }
}

/// Pure state machine for one screen.
pub trait Reducer: Clone + Sized {
    type Event: Clone + Debug;

    fn reduce(&self, event: Self::Event, now: DateTime<Utc>) -> Transition<Self, Self::Event>;
}

/// Something that can wait. Implemented per runtime (gloo timers in the
/// browser, tokio natively, an instant timer in tests).
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone)]
struct Pending<E> {
    due: Duration,
    seq: u64,
    event: E,
}

/// Deterministic runtime driven by an explicit clock.
///
/// Pending effects fire in (due time, scheduling order). Nothing happens
/// between calls to [`advance_to`](Self::advance_to) / [`advance_by`](Self::advance_by).
#[derive(Debug, Clone)]
pub struct VirtualTimeline<R: Reducer> {
    state: R,
    origin: DateTime<Utc>,
    elapsed: Duration,
    pending: Vec<Pending<R::Event>>,
    next_seq: u64,
}

impl<R: Reducer> VirtualTimeline<R> {
    pub fn new(state: R, origin: DateTime<Utc>) -> Self {
        Self {
            state,
            origin,
            elapsed: Duration::ZERO,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock time corresponding to the current virtual instant.
    pub fn now(&self) -> DateTime<Utc> {
        let elapsed =
            chrono::Duration::from_std(self.elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        self.origin + elapsed
    }

    /// Number of effects still waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Deliver an event immediately.
    pub fn dispatch(&mut self, event: R::Event) {
        let now = self.now();
        let Transition { state, effects } = self.state.reduce(event, now);
        self.state = state;
        for effect in effects {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.pending.push(Pending {
                due: self.elapsed + effect.delay,
                seq,
                event: effect.event,
            });
        }
    }

    /// Run the clock forward to `target`, firing every effect due on the way.
    /// Effects scheduled by those effects fire too if they fall due in range.
    pub fn advance_to(&mut self, target: Duration) {
        while let Some(index) = self.next_due(target) {
            let Pending { due, event, .. } = self.pending.remove(index);
            self.elapsed = due;
            tracing::trace!(?due, ?event, "effect fired");
            self.dispatch(event);
        }
        if target > self.elapsed {
            self.elapsed = target;
        }
    }

    pub fn advance_by(&mut self, step: Duration) {
        self.advance_to(self.elapsed + step);
    }

    /// Drop every pending effect, returning how many were cancelled.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// End the session, handing back the final snapshot.
    pub fn into_state(self) -> R {
        self.state
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)
    }
}
