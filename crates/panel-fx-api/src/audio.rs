//! ABI-stable audio feature types

use abi_stable::{std_types::RVec, StableAbi};

/// Per-tick audio feature snapshot supplied by the host.
///
/// Effects consume these as opaque, read-only values; all signal analysis
/// happens on the host side.
#[repr(C)]
#[derive(StableAbi, Clone, Debug)]
pub struct AudioFeaturesFFI {
    /// Overall sound energy level, in raw host units
    pub energy: u32,

    /// Whether a beat was detected on this tick
    pub is_beat: bool,

    /// FFT magnitude bins (0-255), sized as requested at init
    pub fft_bins: RVec<u8>,
}

impl AudioFeaturesFFI {
    /// Snapshot with every feature at rest.
    pub fn silent() -> Self {
        Self {
            energy: 0,
            is_beat: false,
            fft_bins: RVec::new(),
        }
    }
}

/// Which audio features an effect needs the host to compute.
///
/// Returned from [`crate::plugin::LightEffect::init`]; the host skips
/// analysis for everything left disabled.
#[repr(C)]
#[derive(StableAbi, Copy, Clone, Debug, Default)]
pub struct FeatureRequest {
    pub energy: bool,
    pub beat: bool,
    /// Number of FFT bins to compute, 0 to disable
    pub fft_bins: u32,
}
