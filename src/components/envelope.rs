//! Envelope Gate Component
//!
//! The sealed envelope that starts the card. Hovering lifts the flap as
//! a purely visual tease; clicking starts the opening animation and,
//! once the animation has had its 800 ms, signals the app shell to swap
//! in the letter. A second click while opening is ignored, so the
//! completion callback fires exactly once.

use std::time::Duration;

use dioxus::prelude::*;

use lovenote_core::OPEN_DELAY_MS;

#[component]
pub fn Envelope(on_open: EventHandler<()>) -> Element {
    let mut hovered = use_signal(|| false);
    let mut opening = use_signal(|| false);

    let open = move |_| {
        if opening() {
            return;
        }
        opening.set(true);
        tracing::debug!("envelope clicked, opening");

        // Let the animation play before the scene advances. Scope-owned,
        // so an unmount would cancel the pending callback.
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(OPEN_DELAY_MS)).await;
            on_open.call(());
        });
    };

    let shell_class = if opening() {
        "envelope opening"
    } else if hovered() {
        "envelope hovered"
    } else {
        "envelope"
    };

    rsx! {
        div { class: "envelope-stage",
            div {
                class: "{shell_class}",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                onclick: open,

                div { class: "env-body" }

                // Letter preview that slides up while opening
                div { class: "env-letter-peek",
                    p { class: "env-peek-text", "Dearest..." }
                }

                div { class: "env-flap env-flap-bottom" }
                div { class: "env-flap env-flap-left" }
                div { class: "env-flap env-flap-right" }
                div { class: "env-flap-top" }

                div { class: "wax-seal",
                    span { class: "wax-heart", "\u{2665}" }
                }

                if !opening() {
                    div { class: "open-hint", "(Click to open)" }
                }
            }
        }
    }
}
