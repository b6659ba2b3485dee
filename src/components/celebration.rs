//! Celebration Component
//!
//! The terminal screen after "yes": three pieces of text revealed with
//! staggered delays (immediate, +1s, +3.5s) over the warm particle
//! field, plus a static closing line. All sequencing is CSS animation
//! delays; there is no logic left at this point of the card.

use dioxus::prelude::*;

#[component]
pub fn Celebration() -> Element {
    rsx! {
        div { class: "celebration",
            // 1. Header - immediate fade in
            div { class: "celebrate-header reveal-now",
                p { class: "celebrate-eyebrow", "Restaurant Name" }
                h1 { class: "celebrate-title", "Le de fleur" }
            }

            // 2. Message - slow upward motion + fade after 1s
            div { class: "celebrate-message reveal-after-1s",
                p {
                    "So this will be my first February 14th"
                    br {}
                    "with the person and the love"
                    br {}
                    "I always dreamed I deserved."
                }
            }

            // 3. Final line - soft fade after 3.5s
            div { class: "celebrate-quote reveal-after-3500ms",
                p {
                    "\u{201C}No matter time and distance,"
                    br {}
                    "my heart will always choose you.\u{201D}"
                }
            }

            p { class: "celebrate-closing", "Made with love" }
        }
    }
}
