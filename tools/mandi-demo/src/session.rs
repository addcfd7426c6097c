//! Real-time effect runner for the terminal.

use std::time::Duration;

use chrono::Utc;
use mandi_common::timeline::{Reducer, Timer, Transition};
use tokio::task::JoinSet;

/// Sleeps on the tokio clock, scaled by the demo speed.
#[derive(Debug, Clone, Copy)]
pub struct TokioTimer {
    speed: f64,
}

impl TokioTimer {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn scale(&self, delay: Duration) -> Duration {
        delay.div_f64(self.speed)
    }
}

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(self.scale(duration)).await;
    }
}

/// One screen's state plus the effects it has in flight.
///
/// Every scheduled effect is a task in the session's `JoinSet`; dropping the
/// session aborts whatever has not fired yet.
pub struct Session<R: Reducer> {
    state: R,
    timer: TokioTimer,
    tasks: JoinSet<R::Event>,
}

impl<R> Session<R>
where
    R: Reducer,
    R::Event: Send + 'static,
{
    pub fn new(state: R, timer: TokioTimer) -> Self {
        Self {
            state,
            timer,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn dispatch(&mut self, event: R::Event) {
        tracing::debug!(?event, "dispatch");
        let Transition { state, effects } = self.state.reduce(event, Utc::now());
        self.state = state;
        for effect in effects {
            let delay = self.timer.scale(effect.delay);
            self.tasks.spawn(async move {
                tokio::time::sleep(delay).await;
                effect.event
            });
        }
    }

    /// Wait for the next effect to fire and apply it. Returns `false` once
    /// nothing is left in flight.
    pub async fn step(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(event)) => {
                self.dispatch(event);
                true
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "scheduled effect did not complete");
                true
            }
            None => false,
        }
    }

    /// Drive effects until none remain, calling `observe` after each one.
    pub async fn run_until_idle(&mut self, mut observe: impl FnMut(&R)) {
        while self.step().await {
            observe(&self.state);
        }
    }

    /// Abort every pending effect, returning how many were dropped.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.tasks.len();
        self.tasks.abort_all();
        self.tasks.detach_all();
        cancelled
    }
}
