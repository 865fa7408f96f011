//! Spawn trigger policies.

use panel_fx_api::{AudioFeaturesFFI, RgbFFI};

/// Half-open energy range `[min, max)` mapped to a spawn color.
#[derive(Copy, Clone, Debug)]
pub struct EnergyBand {
    pub min: u32,
    pub max: u32,
    pub color: RgbFFI,
}

impl EnergyBand {
    pub fn contains(&self, energy: u32) -> bool {
        self.min <= energy && energy < self.max
    }
}

/// A spawn the trigger asks for this tick.
#[derive(Copy, Clone, Debug)]
pub struct SpawnRequest {
    pub color: RgbFFI,
}

/// When, and in which color, new sources appear.
///
/// The beat and band triggers are independent; both can fire in the same
/// tick. A full pool decides what actually spawns.
#[derive(Clone, Debug, Default)]
pub struct TriggerPolicy {
    /// Spawn one source per detected beat, in this color
    pub on_beat: Option<RgbFFI>,
    /// Spawn one source per band containing the current energy reading
    pub bands: Vec<EnergyBand>,
}

impl TriggerPolicy {
    pub fn beat(color: RgbFFI) -> Self {
        Self {
            on_beat: Some(color),
            bands: Vec::new(),
        }
    }

    pub fn energy_bands(bands: Vec<EnergyBand>) -> Self {
        Self {
            on_beat: None,
            bands,
        }
    }

    /// Spawn requests for this tick, at most one per trigger.
    pub fn evaluate(&self, features: &AudioFeaturesFFI) -> Vec<SpawnRequest> {
        let mut requests = Vec::new();

        if let Some(color) = self.on_beat {
            if features.is_beat {
                requests.push(SpawnRequest { color });
            }
        }

        for band in &self.bands {
            if band.contains(features.energy) {
                requests.push(SpawnRequest { color: band.color });
            }
        }

        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abi_stable::std_types::RVec;

    const BAND_A: RgbFFI = RgbFFI::rgb(0, 180, 255);
    const BAND_B: RgbFFI = RgbFFI::rgb(255, 0, 200);

    fn bands() -> Vec<EnergyBand> {
        vec![
            EnergyBand { min: 500, max: 700, color: BAND_A },
            EnergyBand { min: 700, max: 1200, color: BAND_B },
        ]
    }

    fn features(energy: u32, is_beat: bool) -> AudioFeaturesFFI {
        AudioFeaturesFFI {
            energy,
            is_beat,
            fft_bins: RVec::new(),
        }
    }

    #[test]
    fn test_energy_inside_a_band_spawns_its_color() {
        let trigger = TriggerPolicy::energy_bands(bands());

        let requests = trigger.evaluate(&features(650, false));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].color, BAND_A);

        let requests = trigger.evaluate(&features(700, false));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].color, BAND_B);
    }

    #[test]
    fn test_energy_outside_all_bands_spawns_nothing() {
        let trigger = TriggerPolicy::energy_bands(bands());
        assert!(trigger.evaluate(&features(1500, false)).is_empty());
        assert!(trigger.evaluate(&features(499, false)).is_empty());
    }

    #[test]
    fn test_beat_trigger() {
        let trigger = TriggerPolicy::beat(RgbFFI::WHITE);
        assert!(trigger.evaluate(&features(0, false)).is_empty());

        let requests = trigger.evaluate(&features(0, true));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].color, RgbFFI::WHITE);
    }

    #[test]
    fn test_beat_and_band_fire_independently() {
        let trigger = TriggerPolicy {
            on_beat: Some(RgbFFI::WHITE),
            bands: bands(),
        };

        let requests = trigger.evaluate(&features(650, true));
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].color, RgbFFI::WHITE);
        assert_eq!(requests[1].color, BAND_A);
    }
}
