//! FFI-safe API for panel-fx lighting effects
//!
//! This crate provides ABI-stable types that can cross the boundary
//! between the host runtime and effect plugin libraries.

pub mod audio;
pub mod frame;
pub mod layout;
pub mod plugin;

pub use audio::{AudioFeaturesFFI, FeatureRequest};
pub use frame::{FrameFFI, PanelFrameFFI, RgbFFI, PANEL_BROADCAST};
pub use layout::{LayoutFFI, PanelFFI};
pub use plugin::{EffectLabel, EffectMetadata, LightEffect, LightEffect_TO};

pub const ABI_VERSION: u32 = 1;
