//! Leptos wiring for the animation state machines in `crate::animate`.
//!
//! Each hook owns its timers and observer registrations through the reactive
//! scope, so everything is torn down when the calling component unmounts or
//! its target element changes.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn_with_options, use_timeout_fn,
    utils::Pausable, UseIntersectionObserverOptions, UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::animate::{RevealOptions, RevealState, TypingState};

/// Watches `target` and flips the reveal flag as it crosses the configured
/// intersection threshold. With `trigger_once` set (the default) the watch
/// is disconnected on the first reveal and the state never reverts.
///
/// Without an observer (server render, JS disabled) the state stays hidden,
/// which is the intended degraded behavior.
pub fn use_reveal(target: NodeRef<html::Section>, options: RevealOptions) -> Signal<RevealState> {
    let (state, set_state) = signal(RevealState::default());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let Some(entry) = entries.first() else {
                return;
            };
            let mut next = state.get_untracked();
            let retire = next.apply(entry.is_intersecting(), options.trigger_once);
            set_state.set(next);
            if retire {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin),
    );

    state.into()
}

/// Types `source` out one character every `speed_ms`, then stops the timer
/// for good. An empty source is complete from the start and schedules no
/// timer at all. Each mounted instance starts from scratch.
pub fn use_typing(source: &'static str, speed_ms: u64) -> Signal<TypingState> {
    let (state, set_state) = signal(TypingState::new(source));

    let Pausable { pause, .. } = use_interval_fn_with_options(
        move || {
            set_state.update(|s| {
                s.tick();
            });
        },
        speed_ms,
        UseIntervalFnOptions::default().immediate(!source.is_empty()),
    );

    Effect::new(move |_| {
        if state.with(|s| s.is_complete()) {
            pause();
        }
    });

    state.into()
}

/// One-shot fade used by the hero: becomes true `delay_ms` after hydration
/// and stays true. The pending timeout is cancelled with the scope.
pub fn use_mount_fade(delay_ms: f64) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            set_visible.set(true);
        },
        delay_ms,
    );
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            start(());
        }
    });

    visible.into()
}

/// Tailwind classes for the standard fade-up transition the sections share.
pub fn reveal_class(revealed: bool, base: &str) -> String {
    let state = if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    format!("{base} transition-all duration-700 {state}")
}
