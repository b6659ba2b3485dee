//! UI components for the greeting card.
//!
//! One component per piece of the choreography: particle background,
//! envelope gate, typewriter letter, music control, celebration screen.

mod background;
mod celebration;
mod envelope;
mod letter;
mod music_player;

pub use background::Background;
pub use celebration::Celebration;
pub use envelope::Envelope;
pub use letter::Letter;
pub use music_player::MusicPlayer;
