//! Spectral tint: the dominant pitch mapped to a hue.
//!
//! Estimates pitch as the magnitude-weighted average FFT bin index,
//! scaled to Hz, and washes every panel in the matching hue. Low notes
//! glow red, high ones violet.

use abi_stable::std_types::{
    RResult,
    RResult::{RErr, ROk},
    RString,
};
use panel_fx_api::{
    AudioFeaturesFFI, FeatureRequest, FrameFFI, LayoutFFI, LightEffect, PanelFrameFFI, RgbFFI,
    PANEL_BROADCAST,
};

/// Number of FFT bins requested from the host.
const FFT_BINS: u32 = 32;
/// Frequency covered by the host's bin range, in Hz.
const MAX_FREQUENCY: f32 = 5500.0;
/// Top of the hue sweep; stops short of wrapping violet back into red.
const MAX_HUE: f32 = 300.0;
/// Fade between pitch changes, in tenths of a second.
const FADE: u16 = 2;

pub struct PitchGlow {
    color: RgbFFI,
}

impl PitchGlow {
    pub fn new() -> Self {
        Self {
            color: RgbFFI::BLACK,
        }
    }

    /// Magnitude-weighted average bin index, `None` while silent.
    ///
    /// A zero magnitude sum has no meaningful average; the caller holds
    /// its previous output for that tick instead.
    fn weighted_bin(bins: &[u8]) -> Option<f32> {
        let mut sum = 0u32;
        let mut weighted = 0u32;
        for (i, &bin) in bins.iter().enumerate() {
            sum += u32::from(bin);
            weighted += i as u32 * u32::from(bin);
        }
        if sum == 0 {
            None
        } else {
            Some(weighted as f32 / sum as f32)
        }
    }

    fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> RgbFFI {
        let hue = hue % 360.0;
        let c = value * saturation;
        let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = value - c;

        let (r1, g1, b1) = if hue < 60.0 {
            (c, x, 0.0)
        } else if hue < 120.0 {
            (x, c, 0.0)
        } else if hue < 180.0 {
            (0.0, c, x)
        } else if hue < 240.0 {
            (0.0, x, c)
        } else if hue < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        RgbFFI::rgb(
            ((r1 + m) * 255.0) as u8,
            ((g1 + m) * 255.0) as u8,
            ((b1 + m) * 255.0) as u8,
        )
    }
}

impl Default for PitchGlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LightEffect for PitchGlow {
    fn init(&mut self, layout: &LayoutFFI) -> RResult<FeatureRequest, RString> {
        if layout.is_empty() {
            return RErr(RString::from("layout has no panels"));
        }
        self.color = RgbFFI::BLACK;
        ROk(FeatureRequest {
            energy: false,
            beat: false,
            fft_bins: FFT_BINS,
        })
    }

    fn frame(&mut self, features: &AudioFeaturesFFI) -> FrameFFI {
        if let Some(index) = Self::weighted_bin(&features.fft_bins) {
            let frequency = index * MAX_FREQUENCY / FFT_BINS as f32;
            let hue = (frequency / MAX_FREQUENCY * MAX_HUE).clamp(0.0, MAX_HUE);
            self.color = Self::hsv_to_rgb(hue, 1.0, 1.0);
        }

        FrameFFI::new(vec![PanelFrameFFI {
            panel_id: PANEL_BROADCAST,
            color: self.color,
            transition: FADE,
        }])
    }

    fn cleanup(&mut self) {
        self.color = RgbFFI::BLACK;
    }
}
