//! The letter: typewriter reveal and the evasive button.
//!
//! [`Typewriter`] reveals the fixed message one character per tick; the
//! UI drives it on a 50 ms interval. [`evade_offset`] computes where the
//! "let me think" button jumps next.

use rand::Rng;

/// The message the letter types out.
pub const LETTER_TEXT: &str = "From the moment you walked into my life, everything felt softer, warmer, and brighter.\n\nI don\u{2019}t need grand fireworks or loud confessions \u{2014} just this quiet moment to ask you something simple\u{2026}\n\nWill you be my Valentine?";

/// Interval between revealed characters (ms).
pub const TYPE_INTERVAL_MS: u64 = 50;

/// Evasive-button draw ranges (px).
pub const EVADE_RANGE_X: f32 = 100.0;
pub const EVADE_RANGE_Y: f32 = 80.0;

/// Draws inside the dead zone are snapped outward so the button always
/// moves a noticeable distance.
pub const DEAD_ZONE_X: f32 = 40.0;
pub const DEAD_ZONE_Y: f32 = 20.0;
pub const SNAP_X: f32 = 50.0;
pub const SNAP_Y: f32 = 30.0;

/// Character-by-character reveal of a fixed message.
///
/// Revealed length is monotonic and the `complete` flag latches exactly
/// once, when the whole message is visible. It never resets for the
/// lifetime of the value.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: &'static str,
    visible_bytes: usize,
    complete: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        let mut tw = Typewriter {
            text,
            visible_bytes: 0,
            complete: false,
        };
        if text.is_empty() {
            tw.complete = true;
        }
        tw
    }

    /// Reveal one more character. Returns `false` once the message is
    /// fully visible (the tick loop uses this to stop its timer).
    pub fn tick(&mut self) -> bool {
        match self.text[self.visible_bytes..].chars().next() {
            Some(c) => {
                self.visible_bytes += c.len_utf8();
                if self.visible_bytes == self.text.len() {
                    self.complete = true;
                }
                true
            }
            None => {
                self.complete = true;
                false
            }
        }
    }

    /// The currently revealed prefix of the message.
    pub fn visible(&self) -> &str {
        &self.text[..self.visible_bytes]
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Positional offset of the evasive button from its default layout spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

/// Where the "let me think" button dodges to next.
///
/// Draws uniformly from `[-100, 100) x [-80, 80)`, then snaps draws that
/// land in the central dead zone out to +/-50 (x) or +/-30 (y),
/// preserving sign; an exact 0 snaps negative. The result is always an
/// offset from the button's *default* position - relocations do not
/// accumulate.
pub fn evade_offset<R: Rng + ?Sized>(rng: &mut R) -> Offset {
    let mut dx = rng.random_range(-EVADE_RANGE_X..EVADE_RANGE_X);
    let mut dy = rng.random_range(-EVADE_RANGE_Y..EVADE_RANGE_Y);

    if dx.abs() < DEAD_ZONE_X {
        dx = if dx > 0.0 { SNAP_X } else { -SNAP_X };
    }
    if dy.abs() < DEAD_ZONE_Y {
        dy = if dy > 0.0 { SNAP_Y } else { -SNAP_Y };
    }

    Offset { dx, dy }
}

/// The letter's interactive state: the typewriter plus both choice
/// controls. The controls are inert until typing completes - activations
/// and pointer-enters before that reveal nothing and accept nothing.
#[derive(Clone, Debug)]
pub struct LetterState {
    typewriter: Typewriter,
    evade: Option<Offset>,
}

impl LetterState {
    pub fn new(text: &'static str) -> Self {
        LetterState {
            typewriter: Typewriter::new(text),
            evade: None,
        }
    }

    /// Reveal one more character; see [`Typewriter::tick`].
    pub fn tick(&mut self) -> bool {
        self.typewriter.tick()
    }

    pub fn visible(&self) -> &str {
        self.typewriter.visible()
    }

    pub fn is_complete(&self) -> bool {
        self.typewriter.is_complete()
    }

    /// Relocate the evasive button. Returns `false` (and leaves the
    /// offset untouched) while typing is still in progress.
    pub fn dodge<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_complete() {
            return false;
        }
        self.evade = Some(evade_offset(rng));
        true
    }

    /// Current offset of the evasive button from its default position.
    /// `None` until the first relocation; never reset afterwards.
    pub fn evade(&self) -> Option<Offset> {
        self.evade
    }

    /// Whether an accept activation may fire. Inert until typing
    /// completes.
    pub fn accept(&self) -> bool {
        self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_reveals_monotonically() {
        let mut tw = Typewriter::new("hello");
        let mut last = 0;
        while tw.tick() {
            let len = tw.visible().len();
            assert!(len > last);
            last = len;
        }
        assert_eq!(tw.visible(), "hello");
    }

    #[test]
    fn complete_latches_exactly_once() {
        let mut tw = Typewriter::new("hi");
        assert!(!tw.is_complete());
        tw.tick();
        assert!(!tw.is_complete());
        tw.tick();
        assert!(tw.is_complete());
        // Further ticks change nothing.
        assert!(!tw.tick());
        assert!(tw.is_complete());
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn handles_multibyte_characters() {
        // The real message contains curly quotes, an em dash and an
        // ellipsis; make sure we never split a char boundary.
        let mut tw = Typewriter::new(LETTER_TEXT);
        let total_chars = LETTER_TEXT.chars().count();
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
            assert!(LETTER_TEXT.starts_with(tw.visible()));
        }
        assert_eq!(ticks, total_chars);
        assert!(tw.is_complete());
    }

    #[test]
    fn empty_message_is_complete_immediately() {
        let tw = Typewriter::new("");
        assert!(tw.is_complete());
    }

    #[test]
    fn controls_inert_before_typing_completes() {
        let mut rng = rand::rng();
        let mut letter = LetterState::new("hi");

        // Mid-typing: neither control does anything.
        assert!(!letter.accept());
        assert!(!letter.dodge(&mut rng));
        assert_eq!(letter.evade(), None);

        letter.tick();
        assert!(!letter.accept());
        assert!(!letter.dodge(&mut rng));
        assert_eq!(letter.evade(), None);

        // Fully revealed: both controls come alive.
        letter.tick();
        assert!(letter.accept());
        assert!(letter.dodge(&mut rng));
        assert!(letter.evade().is_some());
    }

    #[test]
    fn evade_offset_persists_between_relocations() {
        let mut rng = rand::rng();
        let mut letter = LetterState::new("");
        assert!(letter.dodge(&mut rng));
        let first = letter.evade();
        assert!(first.is_some());
        assert!(letter.dodge(&mut rng));
        // Relocated again: still offset (possibly elsewhere), never reset.
        assert!(letter.evade().is_some());
    }

    #[test]
    fn evade_offset_respects_dead_zones() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let o = evade_offset(&mut rng);
            assert!(o.dx.abs() >= DEAD_ZONE_X, "dx in dead zone: {}", o.dx);
            assert!(o.dy.abs() >= DEAD_ZONE_Y, "dy in dead zone: {}", o.dy);
            assert!(o.dx.abs() <= EVADE_RANGE_X);
            assert!(o.dy.abs() <= EVADE_RANGE_Y);
        }
    }
}
