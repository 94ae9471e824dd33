// One-shot browser timeouts for the stopwatch tick.
use crate::error::StopwatchError;
use crate::util::js_err_string;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A scheduled timeout. Dropping it clears the timeout if it has not fired yet.
pub struct PendingTick {
    window: web_sys::Window,
    id: i32,
}

/// Schedules `on_fire` to run once after `delay_ms`. Never repeats; the
/// caller decides whether to schedule again.
pub fn schedule_tick<F>(delay_ms: u32, on_fire: F) -> Result<PendingTick, StopwatchError>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(StopwatchError::NoWindow)?;
    // Freed by wasm-bindgen after its single call; never owned by `PendingTick`.
    let callback = Closure::once_into_js(on_fire);
    let timeout = timeout_arg(delay_ms);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        .map_err(|e| StopwatchError::Schedule(js_err_string(&e)))?;
    Ok(PendingTick { window, id })
}

/// `setTimeout` takes a signed delay; oversized intervals saturate.
fn timeout_arg(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

impl Drop for PendingTick {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopwatchConfig;

    #[test]
    fn default_delay_is_one_second() {
        let cfg = StopwatchConfig::default();
        assert_eq!(timeout_arg(cfg.tick_interval_ms), 1000);
    }

    #[test]
    fn oversized_delay_saturates() {
        assert_eq!(timeout_arg(u32::MAX), i32::MAX);
        assert_eq!(timeout_arg(1), 1);
    }
}
