//! Tilt Duel entry point
//!
//! Headless demo driver standing in for the touchscreen host: runs the
//! simulation off the wall clock, feeds it a scripted tap schedule, routes
//! events through logging cue backends and reports the result.
//!
//! ```text
//! tilt-duel [--speed 4|6|8|10] [--seed N] [--taps t1,t2,...] [--json]
//! ```

use std::time::{Duration, Instant};

use tilt_duel::Viewport;
use tilt_duel::feedback::{AudioCue, Feedback, HapticFeedback, SoundEffect};
use tilt_duel::settings::{Settings, SpeedPreset};
use tilt_duel::sim::{GameEvent, GameState, TickInput, tick};

/// Redraw cadence of the fake display
const FRAME_TIME: Duration = Duration::from_millis(8);

struct ConsoleAudio;

impl AudioCue for ConsoleAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("audio cue: {effect:?} at volume {volume:.1}");
    }
}

struct ConsoleHaptics;

impl HapticFeedback for ConsoleHaptics {
    fn pulse(&mut self, millis: u32) {
        log::info!("haptic pulse: {millis} ms");
    }
}

struct Opts {
    speed: SpeedPreset,
    seed: u64,
    taps: Vec<f32>,
    json: bool,
}

impl Opts {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Self {
            speed: SpeedPreset::default(),
            seed: 42,
            // A short canned rally so a bare run has something to show
            taps: vec![0.9, 1.7, 2.2],
            json: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--speed" => {
                    let v = args.next().ok_or("--speed needs a value".to_string())?;
                    opts.speed = SpeedPreset::from_str(&v)
                        .ok_or_else(|| format!("unknown speed {v:?}, pick 4, 6, 8 or 10"))?;
                }
                "--seed" => {
                    let v = args.next().ok_or("--seed needs a value".to_string())?;
                    opts.seed = v.parse().map_err(|_| format!("bad seed {v:?}"))?;
                }
                "--taps" => {
                    let v = args.next().ok_or("--taps needs a value".to_string())?;
                    opts.taps = v
                        .split(',')
                        .filter(|s| !s.trim().is_empty())
                        .map(|s| {
                            s.trim()
                                .parse::<f32>()
                                .map_err(|_| format!("bad tap time {s:?}"))
                        })
                        .collect::<Result<_, _>>()?;
                }
                "--json" => opts.json = true,
                other => return Err(format!("unknown argument {other:?}")),
            }
        }
        opts.taps.sort_by(f32::total_cmp);
        Ok(opts)
    }
}

fn main() {
    env_logger::init();

    let opts = match Opts::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: tilt-duel [--speed 4|6|8|10] [--seed N] [--taps t1,t2,...] [--json]");
            std::process::exit(2);
        }
    };

    let settings = Settings {
        speed: opts.speed,
        ..Settings::default()
    };
    let viewport = Viewport::default();
    let mut state = GameState::new(opts.seed);
    let mut feedback = Feedback::new(ConsoleAudio, ConsoleHaptics);

    log::info!(
        "starting {} game, taps at {:?}",
        settings.speed.as_str(),
        opts.taps
    );
    if let Err(err) = state.start(settings.speed_secs()) {
        eprintln!("failed to start: {err}");
        std::process::exit(1);
    }

    let started = Instant::now();
    let mut last = started;
    let mut next_tap = 0;
    let mut frames: u64 = 0;

    loop {
        std::thread::sleep(FRAME_TIME);
        let now = Instant::now();
        // Clamp the delta like any redraw loop, in case the OS stalls us
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        let elapsed = (now - started).as_secs_f32();

        let mut input = TickInput { tap: false, viewport };
        if state.is_playing() && next_tap < opts.taps.len() && elapsed >= opts.taps[next_tap] {
            input.tap = true;
            next_tap += 1;
        }

        tick(&mut state, &input, dt);
        frames += 1;
        if frames.is_multiple_of(30) && state.is_playing() {
            log::debug!(
                "ball at {:+.3}, tilt {:+.1} deg",
                state.ball_position,
                state.current_tilt_angle
            );
        }

        for event in state.drain_events() {
            feedback.handle(&event, &settings);
            if let GameEvent::GameOver { winner } = event {
                println!("game over after {elapsed:.2}s: player {} wins", winner.index());
            }
        }

        // Let the burst play out before quitting
        if !state.is_playing() && !state.particles.is_active() {
            break;
        }
    }

    if let Some(outcome) = state.outcome {
        println!(
            "the ball came to rest at the {} end; player {} takes the round",
            outcome.loser_side.as_str(),
            outcome.winner.index()
        );
    }

    if opts.json {
        match serde_json::to_string_pretty(&state) {
            Ok(snapshot) => println!("{snapshot}"),
            Err(err) => log::error!("snapshot failed: {err}"),
        }
    }
}
