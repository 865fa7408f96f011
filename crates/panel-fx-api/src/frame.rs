//! ABI-stable frame output types

use abi_stable::{
    std_types::{ROption, ROption::RNone, RVec},
    StableAbi,
};

/// A record with this panel id addresses every panel at once.
pub const PANEL_BROADCAST: u16 = 255;

/// FFI-safe color (RGB, 0-255 range)
#[repr(C)]
#[derive(StableAbi, Copy, Clone, Debug, PartialEq, Eq)]
pub struct RgbFFI {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbFFI {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: RgbFFI = RgbFFI::rgb(0, 0, 0);
    pub const WHITE: RgbFFI = RgbFFI::rgb(255, 255, 255);
}

/// One output record: the color a panel should fade to.
#[repr(C)]
#[derive(StableAbi, Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelFrameFFI {
    pub panel_id: u16,
    pub color: RgbFFI,
    /// Fade duration to reach `color`, in tenths of a second; 0 is immediate
    pub transition: u16,
}

/// A completed tick of output: at most one record per panel.
#[repr(C)]
#[derive(StableAbi, Clone, Debug)]
pub struct FrameFFI {
    pub frames: RVec<PanelFrameFFI>,

    /// Optional scheduling hint in milliseconds, for hosts that drive the
    /// effect on a timer instead of the audio cadence
    pub interval_hint: ROption<u32>,
}

impl FrameFFI {
    pub fn new(frames: Vec<PanelFrameFFI>) -> Self {
        Self {
            frames: frames.into(),
            interval_hint: RNone,
        }
    }
}
