//! The bounded pool of live sources.

use abi_stable::std_types::ROption::RSome;
use panel_fx_api::{LayoutFFI, RgbFFI};
use rand::Rng;

use super::source::{Motion, Source};

/// How sources leave the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Removed once the lifetime countdown is used up
    Lifetime,
    /// Removed once the position lies inside no panel
    Bounds,
}

/// Result of a spawn request.
///
/// A full pool refuses the request; that is expected behavior under heavy
/// triggering, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    Dropped,
}

/// Ordered, capacity-bounded sequence of live sources.
///
/// Order is insertion order. Overwrite rendering is last-write-wins over
/// it, so removal compacts by shifting survivors down, never by swapping.
pub struct SourcePool {
    sources: Vec<Source>,
    capacity: usize,
}

impl SourcePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            sources: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Append one source; existing sources are never touched.
    pub fn spawn(&mut self, source: Source) -> SpawnOutcome {
        if self.sources.len() >= self.capacity {
            return SpawnOutcome::Dropped;
        }
        self.sources.push(source);
        SpawnOutcome::Spawned
    }

    /// Spawn at the centroid of a uniformly chosen panel.
    ///
    /// Radial sources start as a zero-radius shell; drifting sources leave
    /// in a random direction at `speed`.
    pub fn spawn_at_random_panel(
        &mut self,
        layout: &LayoutFFI,
        motion: Motion,
        speed: f32,
        color: RgbFFI,
        lifetime: i32,
    ) -> SpawnOutcome {
        if self.sources.len() >= self.capacity {
            return SpawnOutcome::Dropped;
        }

        let mut rng = rand::rng();
        let panel = &layout.panels[rng.random_range(0..layout.panels.len())];
        let origin = (panel.x, panel.y);

        let source = match motion {
            Motion::Radial => Source::radial(origin, speed, color, lifetime),
            Motion::Drift => {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                let velocity = (angle.cos() * speed, angle.sin() * speed);
                Source::drifting(origin, velocity, color, lifetime)
            }
        };

        self.spawn(source)
    }

    /// Drop expired sources, shifting survivors down in order.
    ///
    /// Runs before the spawn check each tick, so a freed slot is reusable
    /// in the same tick.
    pub fn expire(&mut self, policy: ExpiryPolicy, layout: &LayoutFFI) {
        match policy {
            ExpiryPolicy::Lifetime => self.sources.retain(|s| !s.expired_by_lifetime()),
            ExpiryPolicy::Bounds => self
                .sources
                .retain(|s| matches!(layout.panel_at(s.position.0, s.position.1), RSome(_))),
        }
    }

    /// Advance every live source by one simulation step.
    pub fn advance_all(&mut self, motion: Motion, dt: f32) {
        for source in &mut self.sources {
            source.advance(motion, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_fx_api::PanelFFI;

    fn layout() -> LayoutFFI {
        LayoutFFI::new(vec![
            PanelFFI::new(1, 0.0, 0.0, 60.0),
            PanelFFI::new(2, 100.0, 0.0, 60.0),
        ])
    }

    fn source_with_lifetime(remaining: i32) -> Source {
        Source::radial((0.0, 0.0), 1000.0, RgbFFI::WHITE, remaining)
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut pool = SourcePool::new(2);
        assert_eq!(pool.spawn(source_with_lifetime(5)), SpawnOutcome::Spawned);
        assert_eq!(pool.spawn(source_with_lifetime(5)), SpawnOutcome::Spawned);
        assert_eq!(pool.spawn(source_with_lifetime(5)), SpawnOutcome::Dropped);
        assert_eq!(pool.len(), 2);

        for _ in 0..10 {
            pool.spawn_at_random_panel(&layout(), Motion::Radial, 1000.0, RgbFFI::WHITE, 5);
            assert!(pool.len() <= pool.capacity());
        }
    }

    #[test]
    fn test_overflow_does_not_touch_existing_sources() {
        let mut pool = SourcePool::new(1);
        pool.spawn(source_with_lifetime(3));
        let before = *pool.iter().next().unwrap();

        assert_eq!(pool.spawn(source_with_lifetime(9)), SpawnOutcome::Dropped);
        assert_eq!(*pool.iter().next().unwrap(), before);
    }

    #[test]
    fn test_expire_removes_used_up_lifetime() {
        let mut pool = SourcePool::new(4);
        pool.spawn(source_with_lifetime(0));
        pool.spawn(source_with_lifetime(2));

        let survivor = *pool.iter().nth(1).unwrap();
        pool.expire(ExpiryPolicy::Lifetime, &layout());

        assert_eq!(pool.len(), 1);
        assert_eq!(*pool.iter().next().unwrap(), survivor);
    }

    #[test]
    fn test_expire_keeps_only_nonnegative_budgets() {
        let mut pool = SourcePool::new(8);
        for remaining in [-1, 0, 1, 2] {
            pool.spawn(source_with_lifetime(remaining));
        }
        pool.expire(ExpiryPolicy::Lifetime, &layout());
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|s| s.remaining > 0));
    }

    #[test]
    fn test_compaction_preserves_order() {
        let mut pool = SourcePool::new(4);
        let colors = [
            RgbFFI::rgb(10, 0, 0),
            RgbFFI::rgb(20, 0, 0),
            RgbFFI::rgb(30, 0, 0),
        ];
        pool.spawn(Source::radial((0.0, 0.0), 1.0, colors[0], 5));
        pool.spawn(Source::radial((0.0, 0.0), 1.0, colors[1], 0));
        pool.spawn(Source::radial((0.0, 0.0), 1.0, colors[2], 5));

        pool.expire(ExpiryPolicy::Lifetime, &layout());

        let remaining: Vec<RgbFFI> = pool.iter().map(|s| s.color).collect();
        assert_eq!(remaining, vec![colors[0], colors[2]]);
    }

    #[test]
    fn test_bounds_expiry_drops_escaped_sources() {
        let mut pool = SourcePool::new(4);
        let inside = Source::drifting((10.0, 0.0), (0.0, 0.0), RgbFFI::WHITE, 5);
        let outside = Source::drifting((300.0, 300.0), (0.0, 0.0), RgbFFI::WHITE, 5);
        pool.spawn(inside);
        pool.spawn(outside);

        pool.expire(ExpiryPolicy::Bounds, &layout());

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().next().unwrap().position, (10.0, 0.0));
    }

    #[test]
    fn test_random_spawn_lands_on_a_panel_centroid() {
        let layout = layout();
        let mut pool = SourcePool::new(1);
        pool.spawn_at_random_panel(&layout, Motion::Radial, 1000.0, RgbFFI::WHITE, 5);

        let source = pool.iter().next().unwrap();
        let on_centroid = layout
            .panels
            .iter()
            .any(|p| (p.x, p.y) == source.origin);
        assert!(on_centroid);
        assert_eq!(source.radius, 0.0);
    }
}
