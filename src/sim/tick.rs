//! Per-redraw simulation advance
//!
//! The host calls `tick` once per redraw with the wall-clock delta since the
//! previous call. There is no internal scheduling: whatever cadence the host
//! redraws at is the cadence the game runs at.

use super::state::{GameEvent, GamePhase, GameState, Outcome, Side};
use crate::Viewport;
use crate::consts::*;

/// Host inputs for a single tick.
///
/// Touch callbacks may fire between redraws on another thread; the host folds
/// them into the next `TickInput` so all state mutation happens on the redraw
/// path. One logical thread, no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A tap arrived since the last tick; reverses the tilt while playing
    pub tap: bool,
    /// Current drawable surface size
    pub viewport: Viewport,
}

/// Advance the game by one redraw tick of `dt` seconds.
///
/// `dt >= 0` is a caller contract; the demo driver clamps its wall-clock
/// delta before calling in.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.tap {
        state.reverse_tilt();
    }

    // Advance the previous frame's burst before the ball can spawn a new
    // one; a fresh burst sees its first advance on the following tick. Both
    // share this tick's clock sample.
    state.particles.advance(dt);

    if state.phase == GamePhase::Playing {
        advance_ball(state, input.viewport, dt);
    }
}

fn advance_ball(state: &mut GameState, viewport: Viewport, dt: f32) {
    state.ball_position += state.tilt_direction.sign() * dt / state.speed_secs;

    let half_waves = ZIGZAG_SEGMENTS as f32 * std::f32::consts::PI;
    state.zigzag_offset = (state.ball_position.abs() * half_waves).sin() * ZIGZAG_AMPLITUDE;

    // Per-tick blend, not dt-scaled; see consts::TILT_SMOOTHING_PER_TICK
    state.current_tilt_angle +=
        (state.target_tilt_angle - state.current_tilt_angle) * TILT_SMOOTHING_PER_TICK;

    if state.ball_position.abs() >= 1.0 {
        finish(state, viewport);
    }
}

/// Playing -> Idle edge: pin the ball, decide the loser, fire the burst.
fn finish(state: &mut GameState, viewport: Viewport) {
    let loser_side = Side::from_sign(state.ball_position);
    let winner = loser_side.player().opponent();

    // No overshoot survives: the ball rests exactly on the edge it reached
    state.ball_position = loser_side.sign();

    let origin = state.ball_world_position(viewport);
    state.particles.spawn(origin, loser_side);

    state.phase = GamePhase::Idle;
    state.outcome = Some(Outcome { winner, loser_side });
    state.push_event(GameEvent::GameOver { winner });
    log::info!(
        "game over: ball reached the {} end, player {} wins",
        loser_side.as_str(),
        winner.index()
    );
}
