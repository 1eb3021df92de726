//! Story mode timeline with automatic playback.

use crate::state::AppState;
use awt_data::story::STORY_STEP_INTERVAL_MS;
use awt_data::view_mode::ViewMode;
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

fn step_style(active: bool) -> &'static str {
    if active {
        "padding: 2px 8px; border-radius: 12px; background: #109ea2; color: white; font-size: 13px;"
    } else {
        "padding: 2px 8px; border-radius: 12px; background: #eee; color: #333; font-size: 13px;"
    }
}

/// Period stepper shown above the map in story mode.
///
/// While story mode is active and the user has not stepped by hand, a timer
/// advances the period every [`STORY_STEP_INTERVAL_MS`]. At most one timer
/// task exists: it is cancelled before a new one starts, whenever playback
/// stops, and with this component's scope on unmount.
#[component]
pub fn StoryStepper() -> Element {
    let mut state = use_context::<AppState>();
    let mut timer: Signal<Option<Task>> = use_signal(|| None);

    // The steps to play through, or None while the timer should be off.
    let clock = use_memo(move || {
        let view = state.view.read();
        (view.wants_story_timer() && !view.playback().is_paused())
            .then(|| view.playback().steps().to_vec())
    });

    use_effect(move || {
        let steps = clock();
        if let Some(task) = timer.write().take() {
            task.cancel();
            debug!("Story timer stopped");
        }
        if let Some(steps) = steps {
            info!(
                "Story timer started: {} steps every {} ms",
                steps.len(),
                STORY_STEP_INTERVAL_MS
            );
            let task = spawn(async move {
                loop {
                    TimeoutFuture::new(STORY_STEP_INTERVAL_MS).await;
                    state.view.write().playback_mut().tick();
                }
            });
            timer.set(Some(task));
        }
    });

    let view = state.view.read();
    if view.mode() != ViewMode::Story {
        return rsx! {};
    }
    let playback = view.playback();
    let steps = playback.steps().to_vec();
    let current = playback.current_step();
    let can_previous = playback.can_go_previous();
    let can_next = playback.can_go_next();
    let paused = playback.is_paused();
    drop(view);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; margin: 8px 0;",
            button {
                style: "font-size: 24px; width: 40px;",
                title: "Previous",
                disabled: !can_previous,
                onclick: move |_| state.view.write().playback_mut().step_back(),
                "-"
            }
            ol {
                style: "display: flex; flex-wrap: wrap; gap: 6px; list-style: none; padding: 0; margin: 0; flex: 1; justify-content: center;",
                if steps.is_empty() {
                    li { style: "color: #888; font-size: 13px;", "No periods in this date range." }
                }
                for (i, period) in steps.iter().enumerate() {
                    li {
                        key: "{period}",
                        style: step_style(i == current),
                        "{period}"
                    }
                }
            }
            button {
                style: "font-size: 24px; width: 40px;",
                title: "Next",
                disabled: !can_next,
                onclick: move |_| state.view.write().playback_mut().step_forward(),
                "+"
            }
        }
        if paused {
            p {
                style: "font-size: 11px; color: #888; text-align: center; margin: 0;",
                "Auto-play paused. Switch modes and come back to resume."
            }
        }
    }
}
