//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::particles::ParticleSystem;
use crate::Viewport;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a game to start; the board may still show a dying burst
    Idle,
    /// Ball in motion, taps accepted
    Playing,
}

/// One end of the seesaw.
///
/// Doubles as the tilt direction (which end is currently lowered) and the
/// loser side (which end the ball reached).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player one's end; sign -1 on the ball axis
    Left,
    /// Player two's end; sign +1
    Right,
}

impl Side {
    /// Sign of this side on the ball-position axis
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Side matching the sign of `v` (`Right` for zero or positive)
    #[inline]
    pub fn from_sign(v: f32) -> Self {
        if v < 0.0 { Side::Left } else { Side::Right }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The player defending this end
    #[inline]
    pub fn player(self) -> Player {
        match self {
            Side::Left => Player::One,
            Side::Right => Player::Two,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number for display
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Player,
    /// The end the ball reached; the player defending it lost
    pub loser_side: Side,
}

/// Outbound notifications, queued during commands and ticks and drained by
/// the host. The simulation never calls into host code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A game began (start cue)
    GameStarted,
    /// The tilt direction flipped (tap cue, haptic pulse, turn indicator)
    TiltChanged,
    /// The ball reached an end and the game is over
    GameOver { winner: Player },
}

/// Boundary errors.
///
/// Illegal-transition calls (`reverse_tilt` while idle, `start` while
/// playing) are deliberate no-ops rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    #[error("speed must be a positive number of seconds, got {0}")]
    InvalidSpeed(f32),
}

/// Complete game state, one mutable instance per game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Ball position along the ramp axis: -1 left edge, 0 center, +1 right
    /// edge. Magnitude stays below 1 while playing and is pinned to exactly
    /// 1 when a game ends.
    pub ball_position: f32,
    /// Which end is currently lowered. Persists across games; only `reset`
    /// restores the `Left` default.
    pub tilt_direction: Side,
    /// Seconds for the ball to travel from center to an edge
    pub speed_secs: f32,
    /// Tilt angle the ramp is heading toward, degrees
    pub target_tilt_angle: f32,
    /// Smoothed tilt angle actually shown, degrees; follows the target at
    /// `TILT_SMOOTHING_PER_TICK` per tick
    pub current_tilt_angle: f32,
    /// Cosmetic lateral offset of the drawn ball, derived from
    /// `|ball_position|`; never part of win logic
    pub zigzag_offset: f32,
    /// Set when a game ends, cleared by `start` and `reset`
    pub outcome: Option<Outcome>,
    /// Game-over burst (visual only)
    #[serde(skip)]
    pub particles: ParticleSystem,
    /// Pending outbound events
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh idle state; `seed` drives the burst RNG
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            ball_position: 0.0,
            tilt_direction: Side::Left,
            speed_secs: DEFAULT_SPEED_SECS,
            target_tilt_angle: Side::Left.sign() * TILT_ANGLE_DEG,
            current_tilt_angle: Side::Left.sign() * TILT_ANGLE_DEG,
            zigzag_offset: 0.0,
            outcome: None,
            particles: ParticleSystem::new(seed),
            events: Vec::new(),
        }
    }

    /// Begin a game with the given traversal time.
    ///
    /// Rejects a non-positive or non-finite speed. No-op while a game is
    /// already running. The ramp starts leaning toward whichever end the
    /// last reversal left lowered; direction survives across games.
    pub fn start(&mut self, speed_secs: f32) -> Result<(), SimError> {
        if !(speed_secs > 0.0 && speed_secs.is_finite()) {
            return Err(SimError::InvalidSpeed(speed_secs));
        }
        if self.phase == GamePhase::Playing {
            log::debug!("start ignored: game already running");
            return Ok(());
        }
        self.phase = GamePhase::Playing;
        self.speed_secs = speed_secs;
        self.ball_position = 0.0;
        self.zigzag_offset = 0.0;
        self.target_tilt_angle = self.tilt_direction.sign() * TILT_ANGLE_DEG;
        self.current_tilt_angle = self.target_tilt_angle;
        self.outcome = None;
        self.particles.clear();
        self.events.push(GameEvent::GameStarted);
        Ok(())
    }

    /// Flip the tilt direction. Strict no-op unless a game is running: no
    /// state change, no events.
    pub fn reverse_tilt(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.tilt_direction = self.tilt_direction.opposite();
        self.target_tilt_angle = self.tilt_direction.sign() * TILT_ANGLE_DEG;
        self.events.push(GameEvent::TiltChanged);
    }

    /// Force everything back to construction defaults, tilt direction
    /// included.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.ball_position = 0.0;
        self.tilt_direction = Side::Left;
        self.target_tilt_angle = Side::Left.sign() * TILT_ANGLE_DEG;
        self.current_tilt_angle = self.target_tilt_angle;
        self.zigzag_offset = 0.0;
        self.outcome = None;
        self.particles.clear();
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// The player whose end is currently lowered, in danger of receiving the
    /// ball. `None` when no game is running. Drives the host's turn
    /// indicators.
    pub fn active_player(&self) -> Option<Player> {
        self.is_playing().then(|| self.tilt_direction.player())
    }

    /// Take all pending events. The host maps these to sounds, haptics and
    /// UI updates.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ball center in world (screen) space: the pivot plus the ramp-local
    /// offset rotated by the smoothed tilt angle.
    pub fn ball_world_position(&self, viewport: Viewport) -> Vec2 {
        let local = Vec2::new(
            self.ball_position * viewport.max_ball_offset(),
            self.zigzag_offset,
        );
        viewport.center() + crate::rotate_deg(local, self.current_tilt_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_player_mapping() {
        assert_eq!(Side::Left.player(), Player::One);
        assert_eq!(Side::Right.player(), Player::Two);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().index(), 1);
        assert_eq!(Side::from_sign(-0.3), Side::Left);
        assert_eq!(Side::from_sign(1.0), Side::Right);
    }

    #[test]
    fn test_start_rejects_bad_speed() {
        let mut state = GameState::new(1);
        assert_eq!(state.start(0.0), Err(SimError::InvalidSpeed(0.0)));
        assert_eq!(state.start(-4.0), Err(SimError::InvalidSpeed(-4.0)));
        assert!(state.start(f32::NAN).is_err());
        assert!(state.start(f32::INFINITY).is_err());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let mut state = GameState::new(1);
        state.start(4.0).unwrap();
        state.ball_position = 0.5;
        state.drain_events();

        assert_eq!(state.start(10.0), Ok(()));
        assert_eq!(state.speed_secs, 4.0);
        assert_eq!(state.ball_position, 0.5);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_start_angle_follows_persisted_direction() {
        let mut state = GameState::new(1);
        state.start(4.0).unwrap();
        state.reverse_tilt();
        assert_eq!(state.tilt_direction, Side::Right);

        // Finish manually, then restart: the ramp leans right from the off
        state.phase = GamePhase::Idle;
        state.start(6.0).unwrap();
        assert_eq!(state.tilt_direction, Side::Right);
        assert_eq!(state.target_tilt_angle, TILT_ANGLE_DEG);
        assert_eq!(state.current_tilt_angle, TILT_ANGLE_DEG);
    }

    #[test]
    fn test_reverse_tilt_noop_when_idle() {
        let mut state = GameState::new(1);
        state.reverse_tilt();
        assert_eq!(state.tilt_direction, Side::Left);
        assert_eq!(state.target_tilt_angle, -TILT_ANGLE_DEG);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_double_reverse_returns_to_original() {
        let mut state = GameState::new(1);
        state.start(4.0).unwrap();
        let dir = state.tilt_direction;
        let target = state.target_tilt_angle;

        state.reverse_tilt();
        state.reverse_tilt();
        assert_eq!(state.tilt_direction, dir);
        assert_eq!(state.target_tilt_angle, target);

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::GameStarted,
                GameEvent::TiltChanged,
                GameEvent::TiltChanged
            ]
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = GameState::new(1);
        state.start(8.0).unwrap();
        state.reverse_tilt();
        state.ball_position = 0.7;
        state.reset();

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ball_position, 0.0);
        assert_eq!(state.tilt_direction, Side::Left);
        assert_eq!(state.target_tilt_angle, -TILT_ANGLE_DEG);
        assert_eq!(state.current_tilt_angle, -TILT_ANGLE_DEG);
        assert_eq!(state.outcome, None);
        assert!(!state.particles.is_active());
    }

    #[test]
    fn test_active_player_tracks_tilt() {
        let mut state = GameState::new(1);
        assert_eq!(state.active_player(), None);

        state.start(4.0).unwrap();
        assert_eq!(state.active_player(), Some(Player::One));
        state.reverse_tilt();
        assert_eq!(state.active_player(), Some(Player::Two));
    }

    #[test]
    fn test_ball_world_position_unrotated() {
        let mut state = GameState::new(1);
        state.current_tilt_angle = 0.0;
        state.ball_position = 1.0;
        state.zigzag_offset = 0.0;

        let vp = Viewport::new(1000.0, 2000.0);
        let pos = state.ball_world_position(vp);
        assert!((pos.x - (500.0 + vp.max_ball_offset())).abs() < 1e-3);
        assert!((pos.y - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_ball_world_position_rotated() {
        // At +90 degrees the horizontal offset maps straight down (y-down)
        let mut state = GameState::new(1);
        state.current_tilt_angle = 90.0;
        state.ball_position = 1.0;
        state.zigzag_offset = 0.0;

        let vp = Viewport::new(1000.0, 1000.0);
        let pos = state.ball_world_position(vp);
        assert!((pos.x - 500.0).abs() < 1e-2);
        assert!((pos.y - (500.0 + vp.max_ball_offset())).abs() < 1e-2);
    }
}
