//! Particle Background Component
//!
//! Full-viewport layer of thirty heart particles drifting upward,
//! rendered as absolutely-positioned SVGs and stepped by a frame-tick
//! loop. The pool itself lives in [`lovenote_core::particles`]; this
//! component only owns the timer and the drawing.

use std::time::Duration;

use dioxus::prelude::*;

use lovenote_core::particles::{Particle, ParticleField, Variant};

/// Frame-tick interval (ms). The webview repaints comfortably at ~30fps
/// for thirty small SVGs.
const FRAME_MS: u64 = 33;

/// Heart outline in a `-10 0 20 20` viewBox, scaled per particle via
/// width/height. Same bezier construction as a hand-drawn canvas heart:
/// two lobes meeting at a top notch, tapering to a bottom point.
const HEART_PATH: &str =
    "M 0 6 C 0 0, -10 0, -10 6 C -10 10, 0 16, 0 20 C 0 16, 10 10, 10 6 C 10 0, 0 0, 0 6 Z";

/// Decorative particle field behind every scene.
///
/// The tick loop re-reads the window's inner size every frame, so
/// recycled particles always spawn against the live bounds. When the
/// `variant` prop changes the pool is rebuilt from scratch (no
/// continuity requirement across palette switches). The loop is owned
/// by this component's scope, so Dioxus cancels it on unmount.
#[component]
pub fn Background(variant: ReadOnlySignal<Variant>) -> Element {
    let window = dioxus::desktop::use_window();
    let mut field: Signal<Option<ParticleField>> = use_signal(|| None);

    use_future(move || {
        let window = window.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_MS)).await;

                let size = window.inner_size();
                let scale = window.scale_factor() as f32;
                if size.width == 0 || size.height == 0 || scale <= 0.0 {
                    // Minimized or not yet laid out; nothing to draw.
                    continue;
                }
                let width = size.width as f32 / scale;
                let height = size.height as f32 / scale;

                let wanted = variant();
                let mut slot = field.write();
                match slot.as_mut() {
                    Some(f) if f.variant() == wanted => {
                        f.resize(width, height);
                        f.advance();
                    }
                    _ => {
                        *slot = Some(ParticleField::new(wanted, width, height));
                    }
                }
            }
        }
    });

    let particles: Vec<Particle> = field
        .read()
        .as_ref()
        .map(|f| f.particles().to_vec())
        .unwrap_or_default();

    rsx! {
        div { class: "particle-layer", "aria-hidden": "true",
            for p in particles.iter() {
                {
                    let placement = format!(
                        "left: {}px; top: {}px; width: {}px; height: {}px; opacity: {};",
                        p.x - p.size / 2.0,
                        p.y - p.size / 2.0,
                        p.size,
                        p.size,
                        p.opacity,
                    );

                    rsx! {
                        svg {
                            key: "{p.id}",
                            class: "particle",
                            style: "{placement}",
                            view_box: "-10 0 20 20",
                            path { d: HEART_PATH, fill: "{p.color}" }
                        }
                    }
                }
            }
        }
    }
}
