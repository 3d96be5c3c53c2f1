//! Timed promotional "call now" popup.
//!
//! Two independent timers: a one-shot delay after page load, and a periodic
//! inactivity check. Both consult the session's "already shown" flag. The
//! decision logic is pure over supplied instants so it can be tested without
//! waiting; `drive` runs it on tokio timers.
//!
//! Matching the site as shipped, the one-shot path does not set the session
//! flag when it fires (only dismissal and the idle path do), and once the
//! flag is set the idle re-show can never fire again for the session.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::info;

use crate::config::Config;
use crate::prefs::SessionFlags;

/// A popup display decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// First display, a fixed delay after load
    InitialShow,
    /// Re-display after prolonged inactivity
    IdleReshow,
}

/// Decides when the popup should appear.
#[derive(Debug)]
pub struct PopupScheduler {
    initial_delay: Duration,
    idle_threshold: Duration,
    check_interval: Duration,
    started_at: Instant,
    last_activity: Instant,
    /// One-shot timer armed at load only if the flag was clear then
    initial_armed: bool,
    initial_fired: bool,
}

impl PopupScheduler {
    pub fn new(config: &Config, flags: &SessionFlags, now: Instant) -> Self {
        Self {
            initial_delay: Duration::from_secs(config.popup_initial_delay_secs),
            idle_threshold: Duration::from_secs(config.popup_idle_threshold_secs),
            check_interval: Duration::from_secs(config.popup_check_interval_secs),
            started_at: now,
            last_activity: now,
            initial_armed: !flags.popup_shown(),
            initial_fired: false,
        }
    }

    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Record user activity (mouse, scroll, keys).
    pub fn record_activity(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// One-shot check: is the initial display due?
    ///
    /// Fires at most once. Does not touch the session flag.
    pub fn initial_due(&mut self, now: Instant) -> bool {
        if !self.initial_armed || self.initial_fired {
            return false;
        }
        if now.duration_since(self.started_at) < self.initial_delay {
            return false;
        }
        self.initial_fired = true;
        true
    }

    /// Periodic check: should the popup re-show due to inactivity?
    ///
    /// Fires only while the session flag is clear, and sets it on firing,
    /// so this path runs at most once per session.
    pub fn idle_tick(&mut self, flags: &mut SessionFlags, now: Instant) -> bool {
        if flags.popup_shown() {
            return false;
        }
        if now.duration_since(self.last_activity) <= self.idle_threshold {
            return false;
        }
        flags.mark_popup_shown();
        true
    }
}

/// Mark the popup dismissed for the rest of the session.
pub fn dismiss(flags: &mut SessionFlags) {
    flags.mark_popup_shown();
}

/// Run the popup timers, emitting display decisions on `events`.
///
/// Returns when the receiving side goes away.
pub async fn drive(
    mut scheduler: PopupScheduler,
    flags: Arc<Mutex<SessionFlags>>,
    events: mpsc::Sender<PopupEvent>,
) {
    let initial = tokio::time::sleep(scheduler.initial_delay());
    tokio::pin!(initial);

    let mut ticker = tokio::time::interval(scheduler.check_interval());
    // The first interval tick completes immediately; consume it so the
    // inactivity check starts one full interval after load.
    ticker.tick().await;

    let mut initial_pending = true;
    loop {
        tokio::select! {
            _ = &mut initial, if initial_pending => {
                initial_pending = false;
                if scheduler.initial_due(tokio::time::Instant::now().into_std()) {
                    info!("Showing call popup (initial delay elapsed)");
                    if events.send(PopupEvent::InitialShow).await.is_err() {
                        return;
                    }
                }
            }
            _ = ticker.tick() => {
                let fired = {
                    let mut flags = flags.lock().expect("popup flags lock");
                    scheduler.idle_tick(&mut flags, tokio::time::Instant::now().into_std())
                };
                if fired {
                    info!("Showing call popup (inactivity)");
                    if events.send(PopupEvent::IdleReshow).await.is_err() {
                        return;
                    }
                }
            }
        }
    }
}
