//! Shutter timer countdown.
//!
//! The self-timer is a tap-to-toggle countdown: tapping the screen starts
//! it, tapping again while it runs cancels it, and when it expires the
//! photo is taken. Each elapsed second produces a tick the shell turns
//! into a sound.
//!
//! This module is only the state machine. The embedding shell owns the
//! 1 Hz clock (and the audio and capture side effects) and drives
//! [`ShutterTimer::tick`] once per elapsed second, serialized by its own
//! event dispatch.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User-selectable shutter delay.
///
/// The choices mirror the delay menu: 1, 2, 5, 10, or 30 seconds, with
/// 5 seconds as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShutterDelay {
    OneSecond,
    TwoSeconds,
    #[default]
    FiveSeconds,
    TenSeconds,
    ThirtySeconds,
}

impl ShutterDelay {
    /// All choices in menu order.
    pub const ALL: [ShutterDelay; 5] = [
        ShutterDelay::OneSecond,
        ShutterDelay::TwoSeconds,
        ShutterDelay::FiveSeconds,
        ShutterDelay::TenSeconds,
        ShutterDelay::ThirtySeconds,
    ];

    /// The delay in whole seconds, which is also the tick count.
    pub const fn seconds(self) -> u32 {
        match self {
            ShutterDelay::OneSecond => 1,
            ShutterDelay::TwoSeconds => 2,
            ShutterDelay::FiveSeconds => 5,
            ShutterDelay::TenSeconds => 10,
            ShutterDelay::ThirtySeconds => 30,
        }
    }

    /// The delay as a [`Duration`].
    pub fn duration(self) -> Duration {
        Duration::from_secs(self.seconds() as u64)
    }

    /// Look up the menu choice matching a raw second count.
    ///
    /// Returns `None` for values that are not on the menu.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        ShutterDelay::ALL
            .into_iter()
            .find(|delay| delay.seconds() == seconds)
    }
}

/// What happened on one elapsed second of a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CountdownEvent {
    /// One second elapsed; the shell plays the tick sound.
    Tick {
        /// Whole seconds until the shutter fires.
        seconds_left: u32,
    },
    /// The countdown expired; the shell captures the photo.
    Fire,
}

/// Outcome of a screen tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapAction {
    /// The timer was idle and is now counting down.
    Started,
    /// The timer was running and has been cancelled.
    Cancelled,
}

/// The tap-to-toggle shutter timer.
///
/// A countdown of n seconds yields n-1 [`CountdownEvent::Tick`]s followed
/// by [`CountdownEvent::Fire`] on the n-th call to [`ShutterTimer::tick`].
/// Shells that want a tick sound at the moment the timer starts play one
/// when [`ShutterTimer::tap`] returns [`TapAction::Started`].
#[derive(Debug, Clone, Default)]
pub struct ShutterTimer {
    delay: ShutterDelay,
    /// Seconds left in a running countdown; `None` while idle.
    remaining: Option<u32>,
}

impl ShutterTimer {
    pub fn new(delay: ShutterDelay) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> ShutterDelay {
        self.delay
    }

    /// Change the configured delay, cancelling any running countdown.
    ///
    /// A countdown started under the old delay would otherwise keep its
    /// stale tick budget.
    pub fn set_delay(&mut self, delay: ShutterDelay) {
        self.delay = delay;
        self.remaining = None;
    }

    /// True while a countdown is in progress.
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left in the running countdown, if any.
    pub fn seconds_left(&self) -> Option<u32> {
        self.remaining
    }

    /// Handle a screen tap: start when idle, cancel when running.
    pub fn tap(&mut self) -> TapAction {
        match self.remaining {
            None => {
                self.remaining = Some(self.delay.seconds());
                TapAction::Started
            }
            Some(_) => {
                self.remaining = None;
                TapAction::Cancelled
            }
        }
    }

    /// Stop a running countdown without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// Returns `None` while idle; the shell may keep a coarse clock running
    /// and only forward ticks when the timer is live.
    pub fn tick(&mut self) -> Option<CountdownEvent> {
        match self.remaining {
            None => None,
            Some(1) => {
                self.remaining = None;
                Some(CountdownEvent::Fire)
            }
            Some(seconds) => {
                let seconds_left = seconds - 1;
                self.remaining = Some(seconds_left);
                Some(CountdownEvent::Tick { seconds_left })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a running timer to completion, collecting every event.
    fn run_to_fire(timer: &mut ShutterTimer) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        while let Some(event) = timer.tick() {
            let done = event == CountdownEvent::Fire;
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[test]
    fn test_default_delay_is_five_seconds() {
        assert_eq!(ShutterDelay::default(), ShutterDelay::FiveSeconds);
        assert_eq!(ShutterTimer::default().delay(), ShutterDelay::FiveSeconds);
    }

    #[test]
    fn test_delay_seconds_and_duration() {
        assert_eq!(ShutterDelay::OneSecond.seconds(), 1);
        assert_eq!(ShutterDelay::ThirtySeconds.seconds(), 30);
        assert_eq!(
            ShutterDelay::TenSeconds.duration(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_from_seconds() {
        for delay in ShutterDelay::ALL {
            assert_eq!(ShutterDelay::from_seconds(delay.seconds()), Some(delay));
        }
        assert_eq!(ShutterDelay::from_seconds(0), None);
        assert_eq!(ShutterDelay::from_seconds(3), None);
        assert_eq!(ShutterDelay::from_seconds(60), None);
    }

    #[test]
    fn test_five_second_run() {
        let mut timer = ShutterTimer::new(ShutterDelay::FiveSeconds);
        assert_eq!(timer.tap(), TapAction::Started);

        let events = run_to_fire(&mut timer);
        assert_eq!(
            events,
            vec![
                CountdownEvent::Tick { seconds_left: 4 },
                CountdownEvent::Tick { seconds_left: 3 },
                CountdownEvent::Tick { seconds_left: 2 },
                CountdownEvent::Tick { seconds_left: 1 },
                CountdownEvent::Fire,
            ]
        );
        assert!(!timer.is_running());
    }

    #[test]
    fn test_one_second_run_fires_immediately() {
        let mut timer = ShutterTimer::new(ShutterDelay::OneSecond);
        timer.tap();
        assert_eq!(timer.tick(), Some(CountdownEvent::Fire));
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_tick_while_idle_is_none() {
        let mut timer = ShutterTimer::new(ShutterDelay::FiveSeconds);
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_tap_toggles_running_state() {
        let mut timer = ShutterTimer::new(ShutterDelay::TenSeconds);

        assert_eq!(timer.tap(), TapAction::Started);
        assert!(timer.is_running());
        assert_eq!(timer.seconds_left(), Some(10));

        assert_eq!(timer.tap(), TapAction::Cancelled);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_cancel_mid_countdown() {
        let mut timer = ShutterTimer::new(ShutterDelay::FiveSeconds);
        timer.tap();
        timer.tick();
        timer.tick();
        timer.cancel();

        assert!(!timer.is_running());
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_set_delay_cancels_running_countdown() {
        let mut timer = ShutterTimer::new(ShutterDelay::ThirtySeconds);
        timer.tap();
        timer.tick();

        timer.set_delay(ShutterDelay::TwoSeconds);
        assert!(!timer.is_running());
        assert_eq!(timer.delay(), ShutterDelay::TwoSeconds);

        // Next tap starts fresh under the new delay.
        timer.tap();
        assert_eq!(timer.seconds_left(), Some(2));
    }

    #[test]
    fn test_restart_after_fire() {
        let mut timer = ShutterTimer::new(ShutterDelay::TwoSeconds);
        timer.tap();
        run_to_fire(&mut timer);

        assert_eq!(timer.tap(), TapAction::Started);
        assert_eq!(timer.seconds_left(), Some(2));
    }

    #[test]
    fn test_every_delay_ticks_then_fires() {
        for delay in ShutterDelay::ALL {
            let mut timer = ShutterTimer::new(delay);
            timer.tap();

            let events = run_to_fire(&mut timer);
            assert_eq!(events.len(), delay.seconds() as usize, "{delay:?}");
            assert_eq!(events.last(), Some(&CountdownEvent::Fire), "{delay:?}");
            assert!(
                events[..events.len() - 1]
                    .iter()
                    .all(|e| matches!(e, CountdownEvent::Tick { .. })),
                "{delay:?}"
            );
        }
    }
}
