//! Energy-band-triggered radial shockwaves.
//!
//! The current energy reading is matched against configured bands; while
//! it sits inside one, shells spawn in that band's color. Loud and quiet
//! passages therefore ripple in different colors.

use abi_stable::std_types::{
    RResult,
    RResult::{RErr, ROk},
    RString,
};
use panel_fx_api::{AudioFeaturesFFI, FeatureRequest, FrameFFI, LayoutFFI, LightEffect};

use crate::field::{
    BlendMode, ExpiryPolicy, FieldConfig, FieldEffect, Motion, TriggerPolicy,
};
use crate::utils::Config;

pub struct BandRipple {
    config: FieldConfig,
    field: Option<FieldEffect>,
}

impl BandRipple {
    pub fn new(config: &Config) -> Self {
        Self {
            config: FieldConfig {
                capacity: config.capacity(),
                motion: Motion::Radial,
                blend: BlendMode::Overwrite,
                expiry: ExpiryPolicy::Lifetime,
                trigger: TriggerPolicy::energy_bands(config.energy_bands()),
                speed: config.expansion_speed(),
                lifetime: config.source_lifetime(),
                shell_thickness: config.shell_thickness(),
                falloff: config.falloff_radius(),
                fade_transition: config.fade_transition(),
            },
            field: None,
        }
    }
}

impl LightEffect for BandRipple {
    fn init(&mut self, layout: &LayoutFFI) -> RResult<FeatureRequest, RString> {
        if layout.is_empty() {
            return RErr(RString::from("layout has no panels"));
        }
        self.field = Some(FieldEffect::new(self.config.clone(), layout.clone()));
        ROk(FeatureRequest {
            energy: true,
            beat: false,
            fft_bins: 0,
        })
    }

    fn frame(&mut self, features: &AudioFeaturesFFI) -> FrameFFI {
        match self.field.as_mut() {
            Some(field) => field.tick(features),
            None => FrameFFI::new(Vec::new()),
        }
    }

    fn cleanup(&mut self) {
        self.field = None;
    }
}
