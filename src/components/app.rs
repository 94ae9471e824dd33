use super::{controls_panel::ControlsPanel, time_display::TimeDisplay};
use crate::config::StopwatchConfig;
use crate::model::{Stopwatch, StopwatchAction};
use crate::ticker::schedule_tick;
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| StopwatchConfig::load());
    let stopwatch = use_reducer(Stopwatch::default);

    {
        // Arm one delayed tick per generation; the reducer bumps `armed` only
        // when no tick is outstanding.
        let stopwatch = stopwatch.clone();
        let interval = config.tick_interval_ms;
        use_effect_with(stopwatch.armed, move |_| {
            let mut pending = None;
            if stopwatch.pending {
                let sw = stopwatch.clone();
                match schedule_tick(interval, move || sw.dispatch(StopwatchAction::Fire)) {
                    Ok(handle) => pending = Some(handle),
                    Err(e) => {
                        clog(&format!("stopwatch stalled: {}", e));
                        stopwatch.dispatch(StopwatchAction::Stalled);
                    }
                }
            }
            move || drop(pending)
        });
    }

    let on_toggle = {
        let stopwatch = stopwatch.clone();
        Callback::from(move |_| stopwatch.dispatch(StopwatchAction::Toggle))
    };

    {
        // Log run state transitions, not the initial render
        let was_running = use_mut_ref(|| false);
        let timer = stopwatch.timer;
        use_effect_with(timer.running, move |running| {
            let mut prev = was_running.borrow_mut();
            if *prev != *running {
                let verb = if *running { "started" } else { "stopped" };
                clog(&format!("stopwatch {} at {}", verb, timer));
            }
            *prev = *running;
            || ()
        });
    }

    {
        // Hotkey toggle
        let on_toggle = on_toggle.clone();
        let key = config.toggle_key.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.code() == key && !e.repeat() {
                    e.prevent_default();
                    on_toggle.emit(());
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if let Err(e) =
                    win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                {
                    clog(&format!("hotkey unavailable: {:?}", e));
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    let text = if stopwatch.display.is_empty() {
        stopwatch.timer.formatted()
    } else {
        stopwatch.display.clone()
    };
    let label = stopwatch.button_label(&config).to_string();

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; gap:6px; padding:12px;">
            <TimeDisplay text={text} />
            <ControlsPanel label={label} running={stopwatch.timer.running} {on_toggle} />
        </div>
    }
}
