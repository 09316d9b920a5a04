//! Pure render model
//!
//! Turns simulation state into drawable primitives. No GPU types, no
//! platform calls; the host rasterizes a `Frame` with whatever canvas it
//! has. Primitives are listed back to front.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Side};
use crate::{Viewport, rotate_deg};

/// RGBA, each channel in 0..=1
pub type Color = [f32; 4];

/// Fixed palette
pub mod palette {
    use super::Color;

    /// Left-end accent; also the burst color when the left side loses
    pub const AMBER: Color = [1.0, 0.843, 0.0, 1.0];
    /// Right-end accent; also the burst color when the right side loses
    pub const TEAL: Color = [0.0, 0.808, 0.820, 1.0];
    /// Middle stop of the ramp gradient
    pub const ORANGE: Color = [1.0, 0.596, 0.0, 1.0];

    pub const PEDESTAL_DARK: Color = [0.259, 0.259, 0.259, 1.0];
    pub const PEDESTAL_LIGHT: Color = [0.459, 0.459, 0.459, 1.0];

    pub const BALL_WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_GREY: Color = [0.878, 0.878, 0.878, 1.0];
    pub const BALL_OUTLINE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BALL_SHADOW: Color = [0.0, 0.0, 0.0, 0.314];
    pub const BALL_SHINE: Color = [1.0, 1.0, 1.0, 0.706];

    pub const FIN: Color = [1.0, 1.0, 1.0, 0.471];
}

// Fixed sprite geometry, drawing units
const PEDESTAL_WIDTH: f32 = 30.0;
const PEDESTAL_HEIGHT: f32 = 80.0;
const PEDESTAL_DROP: f32 = 150.0;
const PEDESTAL_CORNER: f32 = 10.0;
const RAMP_CORNER: f32 = 20.0;
const FIN_WIDTH: f32 = 6.0;
const SHADOW_OFFSET: f32 = 4.0;
const SHADOW_RADIUS: f32 = 22.0;
const OUTLINE_WIDTH: f32 = 6.0;
const SHINE_OFFSET: f32 = 6.0;
const SHINE_RADIUS: f32 = 7.0;

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A stroked circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub width: f32,
    pub color: Color,
}

/// A stroked line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

/// Axis-aligned rounded rectangle under the pivot, top-to-bottom gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pedestal {
    pub min: Vec2,
    pub max: Vec2,
    pub corner_radius: f32,
    pub gradient: [Color; 2],
}

/// The seesaw plank: a rounded rectangle rotated about the pivot, with a
/// left-to-right three-stop gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub angle_deg: f32,
    pub corner_radius: f32,
    pub gradient: [Color; 3],
}

/// The ball and its decorations, all in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSprite {
    pub shadow: Circle,
    pub body: Circle,
    /// Top-left to bottom-right gradient across the body
    pub body_gradient: [Color; 2],
    pub outline: Ring,
    pub shine: Circle,
}

/// Everything the host needs to draw one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub pedestal: Pedestal,
    pub ramp: Ramp,
    pub fins: Vec<Segment>,
    pub ball: BallSprite,
    pub particles: Vec<Circle>,
}

/// Build the frame for the current state.
pub fn build_frame(state: &GameState, viewport: Viewport) -> Frame {
    let center = viewport.center();
    let angle = state.current_tilt_angle;

    let pedestal = Pedestal {
        min: Vec2::new(center.x - PEDESTAL_WIDTH / 2.0, center.y + PEDESTAL_DROP),
        max: Vec2::new(
            center.x + PEDESTAL_WIDTH / 2.0,
            center.y + PEDESTAL_DROP + PEDESTAL_HEIGHT,
        ),
        corner_radius: PEDESTAL_CORNER,
        gradient: [palette::PEDESTAL_DARK, palette::PEDESTAL_LIGHT],
    };

    let ramp = Ramp {
        center,
        half_extents: Vec2::new(viewport.ramp_width() / 2.0, RAMP_HEIGHT / 2.0),
        angle_deg: angle,
        corner_radius: RAMP_CORNER,
        gradient: [palette::AMBER, palette::ORANGE, palette::TEAL],
    };

    Frame {
        pedestal,
        ramp,
        fins: build_fins(viewport, angle),
        ball: build_ball(state, viewport),
        particles: build_particles(state),
    }
}

/// Alternating vertical strokes across the plank, pre-rotated to world space
fn build_fins(viewport: Viewport, angle_deg: f32) -> Vec<Segment> {
    let center = viewport.center();
    let half_width = viewport.ramp_width() / 2.0;
    let half_height = RAMP_HEIGHT / 2.0;
    let spacing = viewport.ramp_width() / (ZIGZAG_SEGMENTS + 1) as f32;

    (1..=ZIGZAG_SEGMENTS)
        .map(|i| {
            let x = -half_width + spacing * i as f32;
            // Odd fins hang from the top half, even fins stand in the bottom
            let (y0, y1) = if i % 2 == 1 {
                (-half_height + 15.0, -5.0)
            } else {
                (5.0, half_height - 15.0)
            };
            Segment {
                from: center + rotate_deg(Vec2::new(x, y0), angle_deg),
                to: center + rotate_deg(Vec2::new(x, y1), angle_deg),
                width: FIN_WIDTH,
                color: palette::FIN,
            }
        })
        .collect()
}

fn build_ball(state: &GameState, viewport: Viewport) -> BallSprite {
    let center = viewport.center();
    let angle = state.current_tilt_angle;
    let local = Vec2::new(
        state.ball_position * viewport.max_ball_offset(),
        state.zigzag_offset,
    );

    let pos = center + rotate_deg(local, angle);
    // The shadow is offset in plank space, so it swings with the tilt
    let shadow_pos = center + rotate_deg(local + Vec2::splat(SHADOW_OFFSET), angle);

    BallSprite {
        shadow: Circle {
            center: shadow_pos,
            radius: SHADOW_RADIUS,
            color: palette::BALL_SHADOW,
        },
        body: Circle {
            center: pos,
            radius: BALL_RADIUS,
            color: palette::BALL_WHITE,
        },
        body_gradient: [palette::BALL_WHITE, palette::BALL_GREY],
        outline: Ring {
            center: pos,
            radius: BALL_RADIUS,
            width: OUTLINE_WIDTH,
            color: palette::BALL_OUTLINE,
        },
        shine: Circle {
            center: pos - Vec2::splat(SHINE_OFFSET),
            radius: SHINE_RADIUS,
            color: palette::BALL_SHINE,
        },
    }
}

fn build_particles(state: &GameState) -> Vec<Circle> {
    state
        .particles
        .iter()
        .map(|p| {
            let mut color = match p.side {
                Side::Left => palette::AMBER,
                Side::Right => palette::TEAL,
            };
            color[3] = p.life.clamp(0.0, 1.0);
            Circle {
                center: p.pos,
                radius: PARTICLE_RADIUS,
                color,
            }
        })
        .collect()
}
