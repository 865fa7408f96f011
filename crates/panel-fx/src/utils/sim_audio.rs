//! Synthetic audio features for driving effects without a host.
//!
//! Produces a deterministic energy sweep, a periodic beat, and a spectral
//! hump that wanders across the bins, so every effect has something to
//! react to offline.

use abi_stable::std_types::RVec;
use panel_fx_api::AudioFeaturesFFI;

/// Ticks between synthetic beats (~0.8s at the 50ms tick).
const BEAT_PERIOD: u32 = 16;
/// Peak synthetic energy, sized to sweep across the default bands.
const ENERGY_PEAK: f32 = 1400.0;

pub struct SimAudio {
    tick: u32,
    fft_bins: u32,
}

impl SimAudio {
    pub fn new(fft_bins: u32) -> Self {
        Self { tick: 0, fft_bins }
    }

    /// Features for the next tick.
    pub fn next_features(&mut self) -> AudioFeaturesFFI {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);

        let phase = tick as f32 * 0.05;
        let energy = ((phase.sin() * 0.5 + 0.5) * ENERGY_PEAK) as u32;
        let is_beat = tick % BEAT_PERIOD == 0;

        let mut bins = Vec::with_capacity(self.fft_bins as usize);
        if self.fft_bins > 0 {
            let center = ((phase * 0.7).sin() * 0.5 + 0.5) * (self.fft_bins - 1) as f32;
            for i in 0..self.fft_bins {
                let distance = (i as f32 - center).abs();
                bins.push((200.0 * (-distance * distance / 8.0).exp()) as u8);
            }
        }

        AudioFeaturesFFI {
            energy,
            is_beat,
            fft_bins: RVec::from(bins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beat_cadence() {
        let mut audio = SimAudio::new(0);
        let beats = (0..64)
            .filter(|_| audio.next_features().is_beat)
            .count();
        assert_eq!(beats, 4);
    }

    #[test]
    fn test_bin_count_matches_request() {
        let mut audio = SimAudio::new(32);
        let features = audio.next_features();
        assert_eq!(features.fft_bins.len(), 32);
        // The hump puts real magnitude somewhere
        assert!(features.fft_bins.iter().any(|&b| b > 0));
    }
}
