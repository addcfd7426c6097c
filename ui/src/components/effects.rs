use chrono::Utc;
use dioxus::prelude::*;

use mandi_common::timeline::{Reducer, Timer, Transition};

use super::platform::BrowserTimer;

/// A screen reducer held in a signal.
///
/// Scheduled effects run as tasks of the component that created the handle,
/// so unmounting the screen drops anything still waiting.
pub struct ReducerHandle<R: Reducer + 'static> {
    state: Signal<R>,
}

impl<R: Reducer + 'static> Clone for ReducerHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Reducer + 'static> Copy for ReducerHandle<R> {}

pub fn use_reducer<R: Reducer + 'static>(init: impl FnOnce() -> R) -> ReducerHandle<R> {
    let state = use_signal(init);
    ReducerHandle { state }
}

impl<R: Reducer + 'static> ReducerHandle<R> {
    /// Reactive access for rendering.
    pub fn state(&self) -> Signal<R> {
        self.state
    }

    pub fn dispatch(&self, event: R::Event) {
        let mut state = self.state;
        let Transition {
            state: next,
            effects,
        } = state.peek().reduce(event, Utc::now());
        state.set(next);

        for effect in effects {
            let handle = *self;
            spawn(async move {
                BrowserTimer.sleep(effect.delay).await;
                handle.dispatch(effect.event);
            });
        }
    }
}
