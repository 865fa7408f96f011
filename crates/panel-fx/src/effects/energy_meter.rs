//! Single-record level meter: overall energy as red brightness.
//!
//! The simplest effect in the set — one broadcast record whose red
//! channel follows the host's energy reading above a fixed idle floor.

use abi_stable::std_types::{
    RResult,
    RResult::{RErr, ROk},
    RString,
};
use panel_fx_api::{
    AudioFeaturesFFI, FeatureRequest, FrameFFI, LayoutFFI, LightEffect, PanelFrameFFI, RgbFFI,
    PANEL_BROADCAST,
};

/// Energy reading that saturates the channel.
const ENERGY_CEILING: u32 = 5000;
/// Idle brightness floor so the panels never go fully dark.
const FLOOR: u32 = 100;
/// Fade between level changes, in tenths of a second.
const FADE: u16 = 1;

pub struct EnergyMeter;

impl EnergyMeter {
    pub fn new() -> Self {
        Self
    }

    fn level(energy: u32) -> u8 {
        let scaled = u64::from(energy) * u64::from(255 - FLOOR) / u64::from(ENERGY_CEILING);
        (u64::from(FLOOR) + scaled).min(255) as u8
    }
}

impl Default for EnergyMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl LightEffect for EnergyMeter {
    fn init(&mut self, layout: &LayoutFFI) -> RResult<FeatureRequest, RString> {
        if layout.is_empty() {
            return RErr(RString::from("layout has no panels"));
        }
        ROk(FeatureRequest {
            energy: true,
            beat: false,
            fft_bins: 0,
        })
    }

    fn frame(&mut self, features: &AudioFeaturesFFI) -> FrameFFI {
        FrameFFI::new(vec![PanelFrameFFI {
            panel_id: PANEL_BROADCAST,
            color: RgbFFI::rgb(Self::level(features.energy), 0, 0),
            transition: FADE,
        }])
    }

    fn cleanup(&mut self) {}
}
