//! Music Player Component
//!
//! One looping track with a gentle fade-in, a celebration swell, and a
//! mute toggle that overrides everything. Playback start can fail (no
//! device, missing track, platform policy); the failure is swallowed,
//! the icon shows silence, and every later click anywhere on the shell
//! retries.

use std::time::Duration;

use dioxus::prelude::*;

use lovenote_core::audio::{
    effective_play, fade_in_next, should_retry, swell_next, FADE_START, RAMP_INTERVAL_MS,
};

use crate::audio::AudioSink;
use crate::config;

#[component]
pub fn MusicPlayer(
    should_play: ReadOnlySignal<bool>,
    should_swell: ReadOnlySignal<bool>,
) -> Element {
    let mut sink: Signal<Option<AudioSink>> = use_signal(|| None);
    let mut muted = use_signal(|| config().start_muted);
    let mut playing = use_signal(|| false);
    let mut volume = use_signal(|| FADE_START);
    let mut swelling = use_signal(|| false);

    // Clicks anywhere on the app shell, counted by the shell itself.
    let retry_clicks = use_context::<Signal<u32>>();

    // First activation: open the device and run the fade-in ramp.
    use_future(move || async move {
        match AudioSink::open(&config().track) {
            Ok(s) => {
                s.set_volume(FADE_START);
                sink.set(Some(s));
            }
            Err(e) => {
                // Not fatal: the card just plays silently, and clicks
                // will keep retrying below.
                tracing::warn!("music unavailable: {e}");
            }
        }

        loop {
            tokio::time::sleep(Duration::from_millis(RAMP_INTERVAL_MS)).await;
            let next = match fade_in_next(*volume.peek()) {
                Some(v) => v,
                None => break,
            };
            volume.set(next);
            if let Some(s) = sink.peek().as_ref() {
                s.set_volume(next);
            }
        }
    });

    // Effective-play policy: play iff requested and not muted. Re-runs
    // whenever the directive, the mute toggle, or the sink changes.
    use_effect(move || {
        let play = effective_play(should_play(), muted());
        match sink.read().as_ref() {
            Some(s) => {
                if play {
                    s.play();
                    playing.set(true);
                } else {
                    s.pause();
                    playing.set(false);
                }
            }
            None => playing.set(false),
        }
    });

    // Click-anywhere retry while play is wanted but blocked.
    use_effect(move || {
        let _ = retry_clicks();
        if !should_retry(sink.peek().is_some(), *should_play.peek(), *muted.peek()) {
            return;
        }
        match AudioSink::open(&config().track) {
            Ok(s) => {
                s.set_volume(*volume.peek());
                sink.set(Some(s));
                tracing::info!("music started after click retry");
            }
            Err(e) => tracing::debug!("music retry failed: {e}"),
        }
    });

    // Celebration swell: one ramp, started the first time the directive
    // turns on. Steps pause while muted and stop at the ceiling.
    use_effect(move || {
        if !should_swell() || *swelling.peek() {
            return;
        }
        swelling.set(true);
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(RAMP_INTERVAL_MS)).await;
                if *muted.peek() {
                    continue;
                }
                let next = match swell_next(*volume.peek()) {
                    Some(v) => v,
                    None => break,
                };
                volume.set(next);
                if let Some(s) = sink.peek().as_ref() {
                    s.set_volume(next);
                }
            }
        });
    });

    // Icon is derived: sound iff actually audible.
    let icon = if playing() && !muted() { "\u{1F50A}" } else { "\u{1F507}" };

    rsx! {
        button {
            class: "music-toggle",
            "aria-label": "Toggle music",
            onclick: move |_| {
                // Bubbles up to the shell like any other click, so an
                // unmute click is itself a retry trigger.
                let now_muted = !muted();
                muted.set(now_muted);
                tracing::debug!("music {}", if now_muted { "muted" } else { "unmuted" });
            },
            "{icon}"
        }
    }
}
