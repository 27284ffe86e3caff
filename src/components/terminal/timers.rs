//! Browser timers behind the timer-driven demos.
//!
//! The session only keeps demo state; the gloo handles live here, one slot
//! per demo. Replacing or clearing a slot drops the old handle, which
//! cancels it.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use tracing::debug;

use crate::config::timing::{COLOR_TICK_MS, LOADING_FRAME_MS, LOADING_SAFETY_MS, SHUTDOWN_STEP_MS};
use crate::core::{Effect as SessionEffect, LoadingTick, TerminalSession};

/// Live timer handles, at most one per demo.
#[derive(Default)]
pub struct TimerSlots {
    /// Frame interval plus its safety timeout
    loading: Option<(Interval, Timeout)>,
    color: Option<Interval>,
    shutdown: Option<Interval>,
}

impl TimerSlots {
    fn clear(&mut self) {
        self.loading = None;
        self.color = None;
        self.shutdown = None;
    }
}

/// Timer slots are `!Send`, so they stay in local storage.
pub type Timers = StoredValue<TimerSlots, LocalStorage>;

pub fn new_timers() -> Timers {
    StoredValue::new_local(TimerSlots::default())
}

/// Arm or drop timers as requested by a key press.
pub fn apply_effect(effect: SessionEffect, session: RwSignal<TerminalSession>, timers: Timers) {
    debug!(?effect, "timer effect");
    match effect {
        SessionEffect::StartLoading => {
            let frames = Interval::new(LOADING_FRAME_MS, move || {
                let tick = session.try_update(|s| s.tick_loading());
                if tick != Some(LoadingTick::Running) {
                    timers.update_value(|t| t.loading = None);
                }
            });
            let safety = Timeout::new(LOADING_SAFETY_MS, move || {
                session.update(|s| s.loading_timed_out());
                timers.update_value(|t| t.loading = None);
            });
            timers.update_value(|t| t.loading = Some((frames, safety)));
        }
        SessionEffect::StartColorCycle => {
            let ticks = Interval::new(COLOR_TICK_MS, move || {
                if session.try_update(|s| s.tick_color()) != Some(true) {
                    timers.update_value(|t| t.color = None);
                }
            });
            timers.update_value(|t| t.color = Some(ticks));
        }
        SessionEffect::StopColorCycle => timers.update_value(|t| t.color = None),
        SessionEffect::StartShutdown => {
            let steps = Interval::new(SHUTDOWN_STEP_MS, move || {
                if session.try_update(|s| s.shutdown_step()) != Some(true) {
                    timers.update_value(TimerSlots::clear);
                }
            });
            timers.update_value(|t| t.shutdown = Some(steps));
        }
    }
}
