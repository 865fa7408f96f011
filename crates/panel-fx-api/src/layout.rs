//! ABI-stable panel layout types

use abi_stable::{
    std_types::{
        ROption,
        ROption::{RNone, RSome},
        RVec,
    },
    StableAbi,
};

/// A fixed display tile: stable identifier and 2D centroid position.
#[repr(C)]
#[derive(StableAbi, Copy, Clone, Debug)]
pub struct PanelFFI {
    pub id: u16,

    /// Centroid position in layout coordinates
    pub x: f32,
    pub y: f32,

    /// Containment radius around the centroid, for point-in-panel tests
    pub radius: f32,
}

impl PanelFFI {
    pub fn new(id: u16, x: f32, y: f32, radius: f32) -> Self {
        Self { id, x, y, radius }
    }

    /// Euclidean distance from the centroid to a point.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.distance_to(x, y) <= self.radius
    }
}

/// The immutable panel set for one physical installation.
///
/// Supplied by the host once at initialization; effects never mutate it.
#[repr(C)]
#[derive(StableAbi, Clone, Debug)]
pub struct LayoutFFI {
    pub panels: RVec<PanelFFI>,
}

impl LayoutFFI {
    pub fn new(panels: Vec<PanelFFI>) -> Self {
        Self {
            panels: panels.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the first panel whose containment circle covers the point.
    pub fn panel_at(&self, x: f32, y: f32) -> ROption<usize> {
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.contains(x, y) {
                return RSome(i);
            }
        }
        RNone
    }
}
