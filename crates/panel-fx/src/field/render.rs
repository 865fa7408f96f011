//! Frame rendering: proximity tests between panels and live sources.

use panel_fx_api::{LayoutFFI, PanelFrameFFI, RgbFFI};

use super::pool::SourcePool;
use super::source::Motion;

/// How overlapping sources combine on a panel.
///
/// The two policies come from different deployments and stay distinct;
/// picking one is part of an effect's identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// A shell hit overwrites the panel outright; the last hit wins
    Overwrite,
    /// Brightness falls off linearly with distance and sums across sources
    Additive,
}

/// Tuning shared by every panel in one render pass.
#[derive(Copy, Clone, Debug)]
pub struct RenderStyle {
    pub motion: Motion,
    pub blend: BlendMode,
    /// Hit tolerance around the shell front, in layout units
    pub shell_thickness: f32,
    /// Distance at which additive brightness reaches zero
    pub falloff: f32,
    /// Transition for panels no source is lighting
    pub fade_transition: u16,
}

/// One record per panel, in layout order, whatever the live source count.
///
/// Panels start black with the fade transition; sources then either
/// overwrite (shell test, transition 0) or add brightness (falloff),
/// depending on the blend mode.
pub fn render(pool: &SourcePool, layout: &LayoutFFI, style: &RenderStyle) -> Vec<PanelFrameFFI> {
    let mut frames = Vec::with_capacity(layout.len());

    for panel in layout.panels.iter() {
        let mut color = RgbFFI::BLACK;
        let mut transition = style.fade_transition;

        match style.blend {
            BlendMode::Overwrite => {
                for source in pool.iter() {
                    let (sx, sy) = source.reference(style.motion);
                    let distance = panel.distance_to(sx, sy);
                    if (distance - source.radius).abs() <= style.shell_thickness {
                        color = source.color;
                        transition = 0;
                    }
                }
            }
            BlendMode::Additive => {
                let (mut r, mut g, mut b) = (0.0f32, 0.0f32, 0.0f32);
                for source in pool.iter() {
                    let (sx, sy) = source.reference(style.motion);
                    let distance = panel.distance_to(sx, sy);
                    let weight = (style.falloff - distance).max(0.0) / style.falloff;
                    r += f32::from(source.color.r) * weight;
                    g += f32::from(source.color.g) * weight;
                    b += f32::from(source.color.b) * weight;
                }
                color = RgbFFI::rgb(
                    r.min(255.0) as u8,
                    g.min(255.0) as u8,
                    b.min(255.0) as u8,
                );
            }
        }

        frames.push(PanelFrameFFI {
            panel_id: panel.id,
            color,
            transition,
        });
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::source::Source;
    use panel_fx_api::PanelFFI;

    const RED: RgbFFI = RgbFFI::rgb(255, 0, 0);

    fn style(blend: BlendMode, motion: Motion) -> RenderStyle {
        RenderStyle {
            motion,
            blend,
            shell_thickness: 50.0,
            falloff: 150.0,
            fade_transition: 3,
        }
    }

    #[test]
    fn test_one_record_per_panel_with_empty_pool() {
        let layout = LayoutFFI::new(vec![
            PanelFFI::new(1, 0.0, 0.0, 60.0),
            PanelFFI::new(2, 100.0, 0.0, 60.0),
            PanelFFI::new(3, 200.0, 0.0, 60.0),
        ]);
        let pool = SourcePool::new(4);

        let frames = render(&pool, &layout, &style(BlendMode::Overwrite, Motion::Radial));

        assert_eq!(frames.len(), 3);
        for (frame, panel) in frames.iter().zip(layout.panels.iter()) {
            assert_eq!(frame.panel_id, panel.id);
            assert_eq!(frame.color, RgbFFI::BLACK);
            assert_eq!(frame.transition, 3);
        }
    }

    #[test]
    fn test_shell_front_lights_nearby_panels_only() {
        // Shell front at radius 50 with tolerance 50 covers distances 0-100
        let layout = LayoutFFI::new(vec![
            PanelFFI::new(1, 10.0, 10.0, 60.0),
            PanelFFI::new(2, 10.0, 60.0, 60.0),
            PanelFFI::new(3, 10.0, 130.0, 60.0),
        ]);
        let mut pool = SourcePool::new(1);
        let mut source = Source::radial((10.0, 10.0), 1000.0, RED, 5);
        source.advance(Motion::Radial, 0.05);
        pool.spawn(source);

        let frames = render(&pool, &layout, &style(BlendMode::Overwrite, Motion::Radial));

        assert_eq!(frames[0].color, RED);
        assert_eq!(frames[0].transition, 0);
        assert_eq!(frames[1].color, RED);
        assert_eq!(frames[1].transition, 0);
        assert_eq!(frames[2].color, RgbFFI::BLACK);
        assert_eq!(frames[2].transition, 3);
    }

    #[test]
    fn test_overwrite_last_hit_wins() {
        let layout = LayoutFFI::new(vec![PanelFFI::new(1, 0.0, 0.0, 60.0)]);
        let mut pool = SourcePool::new(2);
        pool.spawn(Source::radial((0.0, 0.0), 0.0, RgbFFI::rgb(1, 2, 3), 5));
        pool.spawn(Source::radial((0.0, 0.0), 0.0, RgbFFI::rgb(7, 8, 9), 5));

        let frames = render(&pool, &layout, &style(BlendMode::Overwrite, Motion::Radial));
        assert_eq!(frames[0].color, RgbFFI::rgb(7, 8, 9));
    }

    #[test]
    fn test_additive_falloff_and_accumulation() {
        let layout = LayoutFFI::new(vec![
            PanelFFI::new(1, 0.0, 0.0, 60.0),
            PanelFFI::new(2, 300.0, 0.0, 60.0),
        ]);
        let mut pool = SourcePool::new(4);
        // Two sources sitting on panel 1: full weight each, sums past the
        // channel range and clamps
        pool.spawn(Source::drifting((0.0, 0.0), (0.0, 0.0), RgbFFI::rgb(200, 40, 0), 5));
        pool.spawn(Source::drifting((0.0, 0.0), (0.0, 0.0), RgbFFI::rgb(100, 40, 0), 5));

        let frames = render(&pool, &layout, &style(BlendMode::Additive, Motion::Drift));

        assert_eq!(frames[0].color, RgbFFI::rgb(255, 80, 0));
        assert_eq!(frames[0].transition, 3);
        // Beyond the falloff radius nothing accumulates
        assert_eq!(frames[1].color, RgbFFI::BLACK);
    }

    #[test]
    fn test_additive_half_distance_weight() {
        let layout = LayoutFFI::new(vec![PanelFFI::new(1, 75.0, 0.0, 60.0)]);
        let mut pool = SourcePool::new(1);
        pool.spawn(Source::drifting((0.0, 0.0), (0.0, 0.0), RgbFFI::rgb(200, 0, 100), 5));

        let frames = render(&pool, &layout, &style(BlendMode::Additive, Motion::Drift));

        // Distance 75 of a 150-unit falloff leaves half the brightness
        assert_eq!(frames[0].color, RgbFFI::rgb(100, 0, 50));
    }
}
