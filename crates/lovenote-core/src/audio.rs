//! Volume ramp policy for the background track.
//!
//! Two independent ramps, both stepped on a 200 ms interval:
//!
//! - the initial fade-in eases the track from 0.1 up to 0.2, and
//! - the celebration swell climbs from wherever the volume currently is
//!   up to 0.6, stacking after the fade-in.
//!
//! The functions are pure next-step calculators; the music player owns
//! the actual timer loops and the rodio sink.

/// Interval between ramp steps (ms), shared by fade-in and swell.
pub const RAMP_INTERVAL_MS: u64 = 200;

/// Fade-in: start here on first activation...
pub const FADE_START: f32 = 0.1;
/// ...and stop stepping here.
pub const FADE_CEILING: f32 = 0.2;
pub const FADE_STEP: f32 = 0.01;

/// Swell ceiling for the celebration scene.
pub const SWELL_CEILING: f32 = 0.6;
pub const SWELL_STEP: f32 = 0.05;

/// Whether audio should actually be audible: the single source of truth
/// combining the scene's playback directive with the user's mute toggle.
pub fn effective_play(should_play: bool, user_muted: bool) -> bool {
    should_play && !user_muted
}

/// Whether a click should re-attempt starting playback: audio is wanted
/// and audible but the device never opened. Every pointer-click anywhere
/// in the document counts - including the mute toggle's own unmute click.
pub fn should_retry(sink_open: bool, should_play: bool, user_muted: bool) -> bool {
    !sink_open && effective_play(should_play, user_muted)
}

/// Next fade-in volume, or `None` once the fade has finished.
pub fn fade_in_next(volume: f32) -> Option<f32> {
    if volume < FADE_CEILING {
        Some((volume + FADE_STEP).min(FADE_CEILING))
    } else {
        None
    }
}

/// Next swell volume, or `None` once the swell has finished.
pub fn swell_next(volume: f32) -> Option<f32> {
    if volume < SWELL_CEILING {
        Some((volume + SWELL_STEP).min(SWELL_CEILING))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_play_truth_table() {
        assert!(effective_play(true, false));
        assert!(!effective_play(true, true));
        assert!(!effective_play(false, false));
        assert!(!effective_play(false, true));
    }

    #[test]
    fn retry_only_while_wanted_and_blocked() {
        // Blocked start, play wanted: every click retries.
        assert!(should_retry(false, true, false));
        // A click that just unmuted retries too; a click while muted
        // does not.
        assert!(!should_retry(false, true, true));
        // Once the sink is open there is nothing to retry.
        assert!(!should_retry(true, true, false));
        // Playback not requested: no retry either.
        assert!(!should_retry(false, false, false));
    }

    #[test]
    fn fade_in_climbs_to_ceiling_and_stops() {
        let mut v = FADE_START;
        let mut steps = 0;
        while let Some(next) = fade_in_next(v) {
            assert!(next > v);
            v = next;
            steps += 1;
            assert!(steps <= 20, "fade-in failed to terminate");
        }
        assert!((v - FADE_CEILING).abs() < 1e-6);
        assert!(fade_in_next(v).is_none());
    }

    #[test]
    fn swell_climbs_in_fixed_steps_and_caps() {
        let mut v = FADE_CEILING;
        let mut steps = 0;
        while let Some(next) = swell_next(v) {
            assert!(next <= SWELL_CEILING);
            assert!(next - v <= SWELL_STEP + 1e-6);
            v = next;
            steps += 1;
            assert!(steps <= 20, "swell failed to terminate");
        }
        assert!((v - SWELL_CEILING).abs() < 1e-6);
    }

    #[test]
    fn swell_stacks_after_fade_in() {
        // Finish the fade-in, then swell from its ceiling.
        let mut v = FADE_START;
        while let Some(next) = fade_in_next(v) {
            v = next;
        }
        assert!(swell_next(v).is_some());
    }

    #[test]
    fn ramps_are_no_ops_past_their_ceilings() {
        assert!(fade_in_next(0.3).is_none());
        assert!(swell_next(0.6).is_none());
        assert!(swell_next(0.9).is_none());
    }
}
