//! Beat-triggered drifting glow.
//!
//! Beats launch a point of light from a random panel in a random
//! direction. Panels brighten as it passes, with brightness falling off
//! over distance and overlapping sources adding up. A source dies once it
//! drifts off the layout entirely.

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

/// Drifting sources outlive radial shells; containment, not the
/// countdown, is what actually retires them.
const DRIFT_LIFETIME: i32 = i32::MAX;

pub struct Drift {
    config: FieldConfig,
    field: Option<FieldEffect>,
}

impl Drift {
    pub fn new(config: &Config) -> Self {
        Self {
            config: FieldConfig {
                capacity: config.capacity(),
                motion: Motion::Drift,
                blend: BlendMode::Additive,
                expiry: ExpiryPolicy::Bounds,
                trigger: TriggerPolicy::beat(config.beat_color()),
                speed: config.drift_speed(),
                lifetime: DRIFT_LIFETIME,
                shell_thickness: config.shell_thickness(),
                falloff: config.falloff_radius(),
                fade_transition: config.fade_transition(),
            },
            field: None,
        }
    }
}

impl LightEffect for Drift {
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
