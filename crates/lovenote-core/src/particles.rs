//! Drifting heart-particle field.
//!
//! A fixed pool of thirty particles rises from the bottom of the viewport
//! to the top. A particle that floats fully past the top edge is recycled
//! in place: its slot is re-seeded with fresh geometry just below the
//! bottom edge, so the pool size never changes while the field is mounted.
//!
//! The field is pure state; the UI layer drives it with one
//! [`ParticleField::advance`] call per frame and draws whatever
//! [`ParticleField::particles`] returns.

use rand::Rng;

/// Constant particle pool size for the field's mounted lifetime.
pub const POOL_SIZE: usize = 30;

/// A particle is recycled once its center passes this far above the top
/// edge (px), so it leaves the screen fully before respawning.
pub const RECYCLE_MARGIN: f32 = 50.0;

/// Recycled particles respawn up to this far below the bottom edge (px).
pub const SPAWN_OVERSHOOT: f32 = 100.0;

pub const SIZE_MIN: f32 = 5.0;
pub const SIZE_MAX: f32 = 20.0;
pub const SPEED_MIN: f32 = 0.2;
pub const SPEED_MAX: f32 = 0.7;
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_MAX: f32 = 0.4;

/// Heart fill for the default palette.
pub const PINK: &str = "#ffcfd8";
/// Warm palette alternates per draw between gold and rose.
pub const WARM_GOLD: &str = "#eecfa1";
pub const WARM_ROSE: &str = "#ffb7b2";

/// Particle color palette, selected by the current scene.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Variant {
    /// Soft pink hearts (sealed envelope and letter scenes)
    #[default]
    Default,
    /// Gold/rose mix for the celebration scene
    Warm,
}

impl Variant {
    /// Fill color for one draw of one particle.
    ///
    /// The warm palette picks per draw, so hearts shimmer between gold
    /// and rose from frame to frame.
    fn frame_color<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        match self {
            Variant::Default => PINK,
            Variant::Warm => {
                if rng.random_bool(0.5) {
                    WARM_GOLD
                } else {
                    WARM_ROSE
                }
            }
        }
    }
}

/// One drifting heart.
///
/// `id` is an opaque diagnostic tag (and rsx key); nothing keys behavior
/// off it. Position is the heart's center in px from the top-left corner.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_y: f32,
    pub opacity: f32,
    pub color: &'static str,
}

impl Particle {
    /// Fresh particle just below the bottom edge (the recycle spawn).
    fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Particle {
            id: rng.random(),
            x: rng.random_range(0.0..width),
            y: height + rng.random_range(0.0..SPAWN_OVERSHOOT),
            size: rng.random_range(SIZE_MIN..SIZE_MAX),
            speed_y: rng.random_range(SPEED_MIN..SPEED_MAX),
            opacity: rng.random_range(OPACITY_MIN..OPACITY_MAX),
            color: PINK,
        }
    }
}

/// The particle pool plus the viewport bounds it spawns against.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    variant: Variant,
}

impl ParticleField {
    /// Allocate the pool for a viewport of `width` x `height` px.
    ///
    /// The first fill spreads particles across the full height instead of
    /// stacking them all at the bottom, so the field looks established
    /// from the first frame.
    pub fn new(variant: Variant, width: f32, height: f32) -> Self {
        let (width, height) = clamp_bounds(width, height);
        let mut rng = rand::rng();
        let particles = (0..POOL_SIZE)
            .map(|_| {
                let mut p = Particle::spawn(&mut rng, width, height);
                p.y = rng.random_range(0.0..height);
                p.color = variant.frame_color(&mut rng);
                p
            })
            .collect();
        ParticleField {
            particles,
            width,
            height,
            variant,
        }
    }

    /// One animation frame: drift every particle upward by its speed,
    /// recycle the ones that left the screen, refresh per-draw colors.
    pub fn advance(&mut self) {
        let mut rng = rand::rng();
        for p in &mut self.particles {
            p.y -= p.speed_y;
            if p.y < -RECYCLE_MARGIN {
                *p = Particle::spawn(&mut rng, self.width, self.height);
            }
            p.color = self.variant.frame_color(&mut rng);
        }
    }

    /// Track the live viewport so recycled particles spawn relative to
    /// the current bounds, never stale ones.
    pub fn resize(&mut self, width: f32, height: f32) {
        let (width, height) = clamp_bounds(width, height);
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// A zero-sized window would make the spawn ranges empty; treat it as a
/// 1x1 surface instead of panicking.
fn clamp_bounds(width: f32, height: f32) -> (f32, f32) {
    (width.max(1.0), height.max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_constant() {
        let mut field = ParticleField::new(Variant::Default, 800.0, 600.0);
        for _ in 0..500 {
            field.advance();
            assert_eq!(field.particles().len(), POOL_SIZE);
        }
    }

    #[test]
    fn first_fill_spans_full_height() {
        let field = ParticleField::new(Variant::Default, 800.0, 600.0);
        for p in field.particles() {
            assert!(p.y >= 0.0 && p.y < 600.0, "initial y out of span: {}", p.y);
        }
    }

    #[test]
    fn particles_drift_upward() {
        let mut field = ParticleField::new(Variant::Default, 800.0, 600.0);
        let before: Vec<f32> = field.particles().iter().map(|p| p.y).collect();
        field.advance();
        for (p, y0) in field.particles().iter().zip(before) {
            // Either it drifted up by its speed, or it was recycled below
            // the bottom edge.
            assert!(p.y < y0 || p.y >= 600.0);
        }
    }

    #[test]
    fn recycled_particles_spawn_below_bottom_edge() {
        let height = 600.0;
        let mut field = ParticleField::new(Variant::Default, 800.0, height);
        // Run long enough for every slot to recycle at least once.
        for _ in 0..10_000 {
            field.advance();
            for p in field.particles() {
                if p.y > height {
                    assert!(p.y < height + SPAWN_OVERSHOOT + 1.0);
                }
                assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
                assert!(p.speed_y >= SPEED_MIN && p.speed_y < SPEED_MAX);
                assert!(p.opacity >= OPACITY_MIN && p.opacity < OPACITY_MAX);
            }
        }
    }

    #[test]
    fn default_variant_paints_pink() {
        let mut field = ParticleField::new(Variant::Default, 800.0, 600.0);
        field.advance();
        assert!(field.particles().iter().all(|p| p.color == PINK));
    }

    #[test]
    fn warm_variant_paints_gold_or_rose() {
        let mut field = ParticleField::new(Variant::Warm, 800.0, 600.0);
        field.advance();
        assert!(field
            .particles()
            .iter()
            .all(|p| p.color == WARM_GOLD || p.color == WARM_ROSE));
    }

    #[test]
    fn resize_feeds_future_recycles() {
        let mut field = ParticleField::new(Variant::Default, 800.0, 600.0);
        field.resize(400.0, 300.0);
        for _ in 0..10_000 {
            field.advance();
        }
        // Every slot has recycled by now; all against the new bounds.
        for p in field.particles() {
            assert!(p.x < 400.0);
            assert!(p.y < 300.0 + SPAWN_OVERSHOOT);
        }
    }

    #[test]
    fn degenerate_viewport_does_not_panic() {
        let mut field = ParticleField::new(Variant::Default, 0.0, 0.0);
        for _ in 0..100 {
            field.advance();
        }
        field.resize(0.0, 0.0);
        field.advance();
    }
}
