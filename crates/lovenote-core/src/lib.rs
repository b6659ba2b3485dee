//! Lovenote Core Library
//!
//! Presentation logic for the animated Valentine greeting card, kept free
//! of any UI-framework dependency so it can be unit- and property-tested
//! headlessly.
//!
//! ## Overview
//!
//! The card is a short, scripted piece of UI choreography:
//!
//! 1. A sealed envelope waits for a click ([`scene::Scene::Sealed`]).
//! 2. The letter types itself out ([`letter::Typewriter`]), then offers
//!    two buttons - one accepts, one dodges the pointer forever
//!    ([`letter::evade_offset`]).
//! 3. Accepting switches the whole presentation into a warm celebration
//!    mode ([`scene::Scene::Accepted`]).
//!
//! Throughout, a pool of thirty heart particles drifts up the screen
//! ([`particles::ParticleField`]) and one looping music track fades in and
//! swells ([`audio`]).
//!
//! Everything here is synchronous and single-threaded: the UI layer owns
//! the timers and calls into these types once per tick.

pub mod audio;
pub mod error;
pub mod letter;
pub mod particles;
pub mod scene;

// Re-exports
pub use error::CardError;
pub use letter::{evade_offset, LetterState, Offset, Typewriter, LETTER_TEXT, TYPE_INTERVAL_MS};
pub use particles::{Particle, ParticleField, Variant, POOL_SIZE};
pub use scene::{Scene, OPEN_DELAY_MS};
