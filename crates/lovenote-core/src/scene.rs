//! Top-level scene state machine.
//!
//! The card moves through exactly three scenes:
//!
//! ```text
//! Sealed --(envelope opened)--> LetterOpen --(accept)--> Accepted
//! ```
//!
//! `Accepted` is terminal for the session. The evasive "let me think"
//! button deliberately has no transition: clicking it only relocates it.

use crate::particles::Variant;

/// Delay between clicking the sealed envelope and the scene advancing,
/// matching the duration of the opening animation (ms).
pub const OPEN_DELAY_MS: u64 = 800;

/// The three mutually exclusive top-level presentation modes.
///
/// Owned by the app shell; this is the only state shared across
/// components. Exactly one of {envelope, letter, celebration} is mounted
/// at any time, matching the current scene.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Scene {
    /// Envelope on screen, seal intact
    #[default]
    Sealed,
    /// Letter on screen, typing or awaiting an answer
    LetterOpen,
    /// Celebration screen; terminal
    Accepted,
}

impl Scene {
    /// The envelope finished its opening animation.
    ///
    /// Returns `true` if the scene actually advanced. Repeat calls (e.g.
    /// a double-fired envelope callback) are no-ops, so the transition to
    /// [`Scene::LetterOpen`] happens at most once per session.
    pub fn letter_opened(&mut self) -> bool {
        match self {
            Scene::Sealed => {
                *self = Scene::LetterOpen;
                tracing::debug!("scene: Sealed -> LetterOpen");
                true
            }
            _ => false,
        }
    }

    /// The "Yes, I will" button was pressed.
    ///
    /// Only valid from [`Scene::LetterOpen`]; returns `true` on the single
    /// transition into the terminal [`Scene::Accepted`] state.
    pub fn accept(&mut self) -> bool {
        match self {
            Scene::LetterOpen => {
                *self = Scene::Accepted;
                tracing::debug!("scene: LetterOpen -> Accepted");
                true
            }
            _ => false,
        }
    }

    /// Particle palette for this scene.
    pub fn particle_variant(&self) -> Variant {
        match self {
            Scene::Accepted => Variant::Warm,
            _ => Variant::Default,
        }
    }

    /// Whether the music should swell toward its celebration volume.
    pub fn should_swell(&self) -> bool {
        matches!(self, Scene::Accepted)
    }

    /// Whether the outer surface should use the warm presentation theme.
    pub fn is_warm(&self) -> bool {
        matches!(self, Scene::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_sealed() {
        assert_eq!(Scene::default(), Scene::Sealed);
    }

    #[test]
    fn envelope_advances_to_letter() {
        let mut scene = Scene::Sealed;
        assert!(scene.letter_opened());
        assert_eq!(scene, Scene::LetterOpen);
    }

    #[test]
    fn double_envelope_activation_transitions_once() {
        let mut scene = Scene::Sealed;
        let transitions = [scene.letter_opened(), scene.letter_opened()];
        assert_eq!(transitions.iter().filter(|t| **t).count(), 1);
        assert_eq!(scene, Scene::LetterOpen);
    }

    #[test]
    fn accept_only_from_letter() {
        let mut scene = Scene::Sealed;
        assert!(!scene.accept());
        assert_eq!(scene, Scene::Sealed);

        scene.letter_opened();
        assert!(scene.accept());
        assert_eq!(scene, Scene::Accepted);
    }

    #[test]
    fn accepted_is_terminal() {
        let mut scene = Scene::Accepted;
        assert!(!scene.letter_opened());
        assert!(!scene.accept());
        assert_eq!(scene, Scene::Accepted);
    }

    #[test]
    fn side_effects_follow_scene() {
        assert_eq!(Scene::Sealed.particle_variant(), Variant::Default);
        assert_eq!(Scene::LetterOpen.particle_variant(), Variant::Default);
        assert_eq!(Scene::Accepted.particle_variant(), Variant::Warm);

        assert!(!Scene::Sealed.should_swell());
        assert!(!Scene::LetterOpen.should_swell());
        assert!(Scene::Accepted.should_swell());
        assert!(Scene::Accepted.is_warm());
    }
}
