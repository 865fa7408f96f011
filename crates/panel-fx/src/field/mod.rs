//! Source-field simulation: a bounded pool of short-lived light sources
//! spawned by audio triggers, advanced every tick, and rendered by
//! proximity to panel centroids.

pub mod pool;
pub mod render;
pub mod source;
pub mod trigger;

pub use pool::{ExpiryPolicy, SourcePool, SpawnOutcome};
pub use render::{render, BlendMode, RenderStyle};
pub use source::{Motion, Source};
pub use trigger::{EnergyBand, SpawnRequest, TriggerPolicy};

use panel_fx_api::{AudioFeaturesFFI, FrameFFI, LayoutFFI};

/// Fixed simulation step per host tick, in seconds.
///
/// Sound-reactive effects are invoked every 50ms; simulation time is
/// counted in ticks, so scheduling jitter never changes the result.
pub const TICK_SECONDS: f32 = 0.05;

/// Full parameterization of one source-field variant.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub capacity: usize,
    pub motion: Motion,
    pub blend: BlendMode,
    pub expiry: ExpiryPolicy,
    pub trigger: TriggerPolicy,
    /// Expansion or travel speed, in layout units per second
    pub speed: f32,
    /// Lifetime budget for new sources, in ticks
    pub lifetime: i32,
    pub shell_thickness: f32,
    pub falloff: f32,
    pub fade_transition: u16,
}

/// Shared engine behind the source-field effects.
///
/// One tick runs expire, spawn, render, advance, in that order: a slot
/// freed by the expire pass is reusable in the same tick, and a source
/// spawned this tick renders at its initial state before moving.
pub struct FieldEffect {
    config: FieldConfig,
    layout: LayoutFFI,
    pool: SourcePool,
    dropped_spawns: u64,
}

impl FieldEffect {
    pub fn new(config: FieldConfig, layout: LayoutFFI) -> Self {
        let capacity = config.capacity;
        Self {
            config,
            layout,
            pool: SourcePool::new(capacity),
            dropped_spawns: 0,
        }
    }

    /// Run one full simulation tick and produce the frame for it.
    pub fn tick(&mut self, features: &AudioFeaturesFFI) -> FrameFFI {
        self.pool.expire(self.config.expiry, &self.layout);

        for request in self.config.trigger.evaluate(features) {
            let outcome = self.pool.spawn_at_random_panel(
                &self.layout,
                self.config.motion,
                self.config.speed,
                request.color,
                self.config.lifetime,
            );
            if outcome == SpawnOutcome::Dropped {
                self.dropped_spawns += 1;
            }
        }

        let style = RenderStyle {
            motion: self.config.motion,
            blend: self.config.blend,
            shell_thickness: self.config.shell_thickness,
            falloff: self.config.falloff,
            fade_transition: self.config.fade_transition,
        };
        let frames = render(&self.pool, &self.layout, &style);

        self.pool.advance_all(self.config.motion, TICK_SECONDS);

        FrameFFI::new(frames)
    }

    pub fn live_sources(&self) -> usize {
        self.pool.len()
    }

    /// Spawn requests refused because the pool was full.
    pub fn dropped_spawns(&self) -> u64 {
        self.dropped_spawns
    }
}
