//! Effect lifecycle trait and metadata types

use abi_stable::{
    sabi_trait,
    std_types::{RResult, RString, RVec},
    StableAbi,
};

use crate::{AudioFeaturesFFI, FeatureRequest, FrameFFI, LayoutFFI};

/// Effect character tags for host-side selection
#[repr(C)]
#[derive(StableAbi, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectLabel {
    Beat,     // Driven by beat events
    Energy,   // Driven by the overall energy level
    Spectral, // Driven by FFT content
    Ambient,  // Slow, layout-wide color
    Motion,   // Sources that travel across the layout
}

/// Effect metadata exported by each plugin
#[repr(C)]
#[derive(StableAbi, Clone, Debug)]
pub struct EffectMetadata {
    pub name: RString,
    pub version: RString,
    pub labels: RVec<EffectLabel>,
}

impl EffectMetadata {
    pub fn new(
        name: impl Into<RString>,
        version: impl Into<RString>,
        labels: Vec<EffectLabel>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            labels: labels.into(),
        }
    }
}

/// Lifecycle every effect must implement
///
/// The host calls `init` once after loading, `frame` once per tick, and
/// `cleanup` once before unloading. All three run synchronously on the
/// host's render thread; a frame must be complete on return.
///
/// This trait uses abi_stable's sabi_trait to ensure ABI stability
/// across compilation boundaries.
#[sabi_trait]
pub trait LightEffect {
    /// Acquire the layout and allocate per-run state.
    ///
    /// Returns the audio features the effect needs each tick. A layout the
    /// effect cannot render on (no panels) is fatal: the host drops the
    /// effect on `RErr` rather than ticking it with partial state.
    fn init(&mut self, layout: &LayoutFFI) -> RResult<FeatureRequest, RString>;

    /// Produce one completed frame for the current tick.
    fn frame(&mut self, features: &AudioFeaturesFFI) -> FrameFFI;

    /// Release per-run state before unload.
    fn cleanup(&mut self);
}
