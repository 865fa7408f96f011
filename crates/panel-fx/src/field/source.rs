//! A single simulated light source.

use panel_fx_api::RgbFFI;

/// Kinematic model a source advances under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Expanding shell around a fixed origin
    Radial,
    /// Point travelling along a fixed velocity vector
    Drift,
}

/// A transient emitter owned by the pool.
///
/// Origin, velocity and color are fixed at spawn; the radius or position
/// and the lifetime countdown mutate once per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Source {
    /// Spawn location, in layout coordinates
    pub origin: (f32, f32),
    /// Current location; only drifting sources move it
    pub position: (f32, f32),
    /// Current shell radius; only radial sources grow it
    pub radius: f32,
    /// Travel velocity in layout units per second (drifting sources)
    pub velocity: (f32, f32),
    /// Expansion speed in layout units per second (radial sources)
    pub speed: f32,
    pub color: RgbFFI,
    /// Lifetime countdown in ticks
    pub remaining: i32,
}

impl Source {
    /// Radial source seeded at a panel centroid with a zero-radius shell.
    pub fn radial(origin: (f32, f32), speed: f32, color: RgbFFI, lifetime: i32) -> Self {
        Self {
            origin,
            position: origin,
            radius: 0.0,
            velocity: (0.0, 0.0),
            speed,
            color,
            remaining: lifetime,
        }
    }

    /// Drifting source travelling along the given velocity vector.
    pub fn drifting(
        origin: (f32, f32),
        velocity: (f32, f32),
        color: RgbFFI,
        lifetime: i32,
    ) -> Self {
        Self {
            origin,
            position: origin,
            radius: 0.0,
            velocity,
            speed: 0.0,
            color,
            remaining: lifetime,
        }
    }

    /// Advance one simulation step and burn one tick of lifetime.
    ///
    /// Deterministic: equal sources advanced equally stay equal. All
    /// randomness lives at spawn time.
    pub fn advance(&mut self, motion: Motion, dt: f32) {
        match motion {
            Motion::Radial => self.radius += self.speed * dt,
            Motion::Drift => {
                self.position.0 += self.velocity.0 * dt;
                self.position.1 += self.velocity.1 * dt;
            }
        }
        self.remaining -= 1;
    }

    /// Reference point for proximity tests: the fixed origin for radial
    /// sources, the current position for drifting ones.
    pub fn reference(&self, motion: Motion) -> (f32, f32) {
        match motion {
            Motion::Radial => self.origin,
            Motion::Drift => self.position,
        }
    }

    /// Whether the lifetime budget is used up.
    pub fn expired_by_lifetime(&self) -> bool {
        self.remaining <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_advance() {
        let mut source = Source::radial((10.0, 10.0), 1000.0, RgbFFI::WHITE, 5);
        source.advance(Motion::Radial, 0.05);
        assert_eq!(source.radius, 50.0);
        assert_eq!(source.remaining, 4);
        assert_eq!(source.origin, (10.0, 10.0));
    }

    #[test]
    fn test_drift_advance() {
        let mut source = Source::drifting((0.0, 0.0), (400.0, -200.0), RgbFFI::WHITE, 5);
        source.advance(Motion::Drift, 0.05);
        assert_eq!(source.position, (20.0, -10.0));
        assert_eq!(source.remaining, 4);
        // The spawn location stays put
        assert_eq!(source.origin, (0.0, 0.0));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut a = Source::radial((3.0, 4.0), 750.0, RgbFFI::rgb(9, 8, 7), 10);
        let mut b = a;
        for _ in 0..10 {
            a.advance(Motion::Radial, 0.05);
            b.advance(Motion::Radial, 0.05);
        }
        assert_eq!(a, b);
        assert_eq!(a.remaining, 0);
    }

    #[test]
    fn test_lifetime_expiry_boundary() {
        let mut source = Source::radial((0.0, 0.0), 100.0, RgbFFI::WHITE, 1);
        assert!(!source.expired_by_lifetime());
        source.advance(Motion::Radial, 0.05);
        assert!(source.expired_by_lifetime());
    }
}
