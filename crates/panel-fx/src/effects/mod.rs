//! Built-in effects and their registry.

pub mod band_ripple;
pub mod drift;
pub mod energy_meter;
pub mod pitch_glow;
pub mod ripple;

use abi_stable::sabi_trait::prelude::TD_Opaque;
use abi_stable::std_types::RBox;
use panel_fx_api::{EffectLabel, EffectMetadata, LightEffect_TO};

use crate::utils::Config;

pub use band_ripple::BandRipple;
pub use drift::Drift;
pub use energy_meter::EnergyMeter;
pub use pitch_glow::PitchGlow;
pub use ripple::Ripple;

/// Names accepted by [`create`], in presentation order.
pub const EFFECT_NAMES: [&str; 5] = [
    "ripple",
    "band-ripple",
    "drift",
    "pitch-glow",
    "energy-meter",
];

/// Instantiate a built-in effect by registry name.
pub fn create(name: &str, config: &Config) -> Option<LightEffect_TO<'static, RBox<()>>> {
    match name {
        "ripple" => Some(LightEffect_TO::from_value(Ripple::new(config), TD_Opaque)),
        "band-ripple" => Some(LightEffect_TO::from_value(BandRipple::new(config), TD_Opaque)),
        "drift" => Some(LightEffect_TO::from_value(Drift::new(config), TD_Opaque)),
        "pitch-glow" => Some(LightEffect_TO::from_value(PitchGlow::new(), TD_Opaque)),
        "energy-meter" => Some(LightEffect_TO::from_value(EnergyMeter::new(), TD_Opaque)),
        _ => None,
    }
}

/// Metadata for a built-in effect, if the name is known.
pub fn metadata(name: &str) -> Option<EffectMetadata> {
    let version = env!("CARGO_PKG_VERSION");
    match name {
        "ripple" => Some(EffectMetadata::new(name, version, vec![EffectLabel::Beat])),
        "band-ripple" => Some(EffectMetadata::new(name, version, vec![EffectLabel::Energy])),
        "drift" => Some(EffectMetadata::new(
            name,
            version,
            vec![EffectLabel::Beat, EffectLabel::Motion],
        )),
        "pitch-glow" => Some(EffectMetadata::new(
            name,
            version,
            vec![EffectLabel::Spectral, EffectLabel::Ambient],
        )),
        "energy-meter" => Some(EffectMetadata::new(
            name,
            version,
            vec![EffectLabel::Energy, EffectLabel::Ambient],
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_name() {
        let config = Config::default();
        for name in EFFECT_NAMES {
            assert!(create(name, &config).is_some(), "no constructor for {}", name);
            assert!(metadata(name).is_some(), "no metadata for {}", name);
        }
        assert!(create("does-not-exist", &config).is_none());
    }
}
