//! Letter Component
//!
//! Types the message out character by character, then reveals the two
//! choice buttons. "Yes, I will" accepts; "Let me think..." dodges the
//! pointer instead of doing anything.
//!
//! The dodge-on-click behavior is intentional, not a bug: the evasive
//! button never completes an action, by design. Its offset is always
//! relative to the default layout position and persists between
//! relocations.
//!
//! All gating (both buttons inert until typing completes) lives in
//! [`LetterState`]; this component only owns the timer and the markup.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;

use lovenote_core::letter::{LetterState, LETTER_TEXT, TYPE_INTERVAL_MS};

/// Keep the newest revealed text in view inside the letter body.
const SCROLL_TO_END: &str = r#"
    var el = document.getElementById('letter-body');
    if (el) { el.scrollTop = el.scrollHeight; }
"#;

#[component]
pub fn Letter(on_accept: EventHandler<()>) -> Element {
    let mut letter = use_signal(|| LetterState::new(LETTER_TEXT));

    // Typewriter timer: one character per tick, auto-scrolling after
    // each reveal. Stops itself at the end of the message; unmount
    // cancels it early.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(TYPE_INTERVAL_MS)).await;
            let more = letter.write().tick();
            let _ = document::eval(SCROLL_TO_END);
            if !more {
                break;
            }
        }
    });

    let complete = letter.read().is_complete();
    let visible = letter.read().visible().to_string();

    // Relocate the evasive button; LetterState refuses until typing
    // finishes.
    let mut dodge = move || {
        letter.write().dodge(&mut rand::rng());
    };

    let accept = move |_| {
        if letter.peek().accept() {
            on_accept.call(());
        }
    };

    let actions_class = if complete {
        "letter-actions revealed"
    } else {
        "letter-actions"
    };

    let evade_style = match letter.read().evade() {
        Some(o) => format!("transform: translate({}px, {}px);", o.dx, o.dy),
        None => String::new(),
    };

    rsx! {
        div { class: "letter",
            div { class: "letter-paper",
                h1 { class: "letter-heading", "My Dearest," }

                div { class: "letter-body", id: "letter-body",
                    p { class: "letter-text",
                        "{visible}"
                        if !complete {
                            span { class: "caret" }
                        }
                    }
                }

                div { class: "{actions_class}",
                    button {
                        class: "btn-accept",
                        disabled: !complete,
                        onclick: accept,
                        "Yes, I will"
                    }

                    div {
                        class: "evade-slot",
                        style: "{evade_style}",
                        onmouseenter: move |_| dodge(),
                        onclick: move |_| dodge(),
                        button { class: "btn-evade", "Let me think..." }
                    }
                }
            }
        }
    }
}
