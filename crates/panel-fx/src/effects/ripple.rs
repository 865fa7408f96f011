//! Beat-triggered radial shockwave.
//!
//! Every detected beat spawns an expanding shell at a random panel; a
//! panel lights up while the shell front passes its centroid and fades
//! back to black afterwards.

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

pub struct Ripple {
    config: FieldConfig,
    field: Option<FieldEffect>,
}

impl Ripple {
    pub fn new(config: &Config) -> Self {
        Self {
            config: FieldConfig {
                capacity: config.capacity(),
                motion: Motion::Radial,
                blend: BlendMode::Overwrite,
                expiry: ExpiryPolicy::Lifetime,
                trigger: TriggerPolicy::beat(config.beat_color()),
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

impl LightEffect for Ripple {
    fn init(&mut self, layout: &LayoutFFI) -> RResult<FeatureRequest, RString> {
        if layout.is_empty() {
            return RErr(RString::from("layout has no panels"));
        }
        self.field = Some(FieldEffect::new(self.config.clone(), layout.clone()));
        ROk(FeatureRequest {
            energy: false,
            beat: true,
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
