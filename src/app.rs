use dioxus::prelude::*;

use lovenote_core::Scene;

use crate::components::{Background, Celebration, Envelope, Letter, MusicPlayer};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the single piece of cross-component state - the current
/// [`Scene`] - and renders exactly one of {envelope, letter, celebration}
/// on top of the always-present particle background and music control.
///
/// The shell also counts clicks anywhere on the page: the music player
/// watches that counter to retry playback whenever the platform blocked
/// the initial, unprompted start.
#[component]
pub fn App() -> Element {
    let mut scene: Signal<Scene> = use_signal(Scene::default);

    // Any click on the shell is a potential audio-retry trigger.
    let mut retry_clicks: Signal<u32> = use_signal(|| 0);
    use_context_provider(|| retry_clicks);

    let warm = scene().is_warm();
    let shell_class = if warm { "app-shell warm-mode" } else { "app-shell" };

    rsx! {
        style { {GLOBAL_STYLES} }

        div {
            class: "{shell_class}",
            onclick: move |_| retry_clicks += 1,

            Background { variant: scene().particle_variant() }

            MusicPlayer {
                should_play: true,
                should_swell: scene().should_swell(),
            }

            if scene() == Scene::Accepted {
                Celebration {}
            } else {
                main { class: "card-stage",
                    if scene() == Scene::Sealed {
                        Envelope {
                            on_open: move |_| {
                                if scene.write().letter_opened() {
                                    tracing::info!("envelope opened, letter revealed");
                                }
                            }
                        }
                    } else {
                        Letter {
                            on_accept: move |_| {
                                if scene.write().accept() {
                                    tracing::info!("she said yes");
                                }
                            }
                        }
                    }
                }

                footer { class: "credits", "Made with love" }
            }
        }
    }
}
