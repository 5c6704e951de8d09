//! Shutter timer WASM bindings.
//!
//! Wraps the core countdown state machine in a JavaScript class. The shell
//! owns the clock: a `setInterval(..., 1000)` callback forwards ticks and
//! reacts to the returned event.

use camtimer_core::countdown::{ShutterDelay, ShutterTimer, TapAction};
use wasm_bindgen::prelude::*;

/// The supported delay choices in seconds, in menu order.
#[wasm_bindgen]
pub fn delay_choices() -> Vec<u32> {
    ShutterDelay::ALL.into_iter().map(|d| d.seconds()).collect()
}

/// The tap-to-toggle shutter timer.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const timer = new JsShutterTimer(5);
///
/// canvas.onclick = () => {
///   timer.tap() ? showToast('Timer started') : showToast('Timer cancelled');
/// };
///
/// setInterval(() => {
///   const event = timer.tick();
///   if (event === undefined) return;
///   if (event.kind === 'tick') playTick();
///   else takePicture();
/// }, 1000);
/// ```
#[wasm_bindgen]
pub struct JsShutterTimer {
    inner: ShutterTimer,
}

#[wasm_bindgen]
impl JsShutterTimer {
    /// Create a timer with the given delay in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error for a delay that is not one of the menu choices
    /// (1, 2, 5, 10, or 30 seconds).
    #[wasm_bindgen(constructor)]
    pub fn new(delay_seconds: u32) -> Result<JsShutterTimer, JsValue> {
        let delay = parse_delay(delay_seconds)?;
        Ok(JsShutterTimer {
            inner: ShutterTimer::new(delay),
        })
    }

    /// The configured delay in seconds.
    #[wasm_bindgen(getter)]
    pub fn delay_seconds(&self) -> u32 {
        self.inner.delay().seconds()
    }

    /// Change the delay; any running countdown is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error for a delay that is not one of the menu choices.
    pub fn set_delay_seconds(&mut self, delay_seconds: u32) -> Result<(), JsValue> {
        self.inner.set_delay(parse_delay(delay_seconds)?);
        Ok(())
    }

    /// True while a countdown is in progress.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.is_running()
    }

    /// Handle a screen tap.
    ///
    /// Returns `true` when a countdown started and `false` when a running
    /// one was cancelled.
    pub fn tap(&mut self) -> bool {
        self.inner.tap() == TapAction::Started
    }

    /// Stop a running countdown without firing.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// Returns `{kind: "tick", seconds_left}` while counting,
    /// `{kind: "fire"}` when the shutter should trip, and `undefined`
    /// while idle.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.tick() {
            None => Ok(JsValue::UNDEFINED),
            Some(event) => serde_wasm_bindgen::to_value(&event)
                .map_err(|e| JsValue::from_str(&e.to_string())),
        }
    }
}

/// Look up a menu delay, mapping unsupported values to a JS error.
fn parse_delay(delay_seconds: u32) -> Result<ShutterDelay, JsValue> {
    ShutterDelay::from_seconds(delay_seconds).ok_or_else(|| {
        JsValue::from_str(&format!(
            "Unsupported delay: {} seconds (choices: 1, 2, 5, 10, 30)",
            delay_seconds
        ))
    })
}
