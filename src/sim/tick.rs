//! Per-tick simulation step
//!
//! One `tick` call advances the run by exactly one frame: input, integration,
//! boundary check, spawning, scrolling, collision, scoring, cleanup. The
//! returned events are the core's only channel to the presentation layer
//! (sound cues, score display, overlays); it never queries the host back.

use rand::Rng;

use super::collision;
use super::state::{GamePhase, GameState, Obstacle};
use crate::consts::*;

/// Input commands latched for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump impulse (key/press/tap). Ignored unless a run is active.
    pub jump: bool,
    /// Begin a run from Idle
    pub start: bool,
    /// Begin a fresh run from GameOver
    pub restart: bool,
}

/// One-way notifications from the simulation to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fresh entity state exists; score displays should show zero
    RunStarted,
    /// A jump was applied this tick
    Jumped,
    /// An obstacle was passed; carries the score after the increment
    Scored { score: u32 },
    /// The run ended; carries the final score
    Crashed { score: u32 },
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle if input.start => {
            state.begin_run();
            events.push(GameEvent::RunStarted);
            log::info!("run started (seed {})", state.seed);
        }
        GamePhase::GameOver if input.restart => {
            state.begin_run();
            events.push(GameEvent::RunStarted);
            log::info!("run restarted (seed {})", state.seed);
        }
        _ => {}
    }

    // Guards stale scheduled frames after game over as well as idle frames:
    // outside Running a tick is a no-op.
    if state.phase != GamePhase::Running {
        return events;
    }

    state.frames += 1;

    if let Some(card) = state.card.as_mut() {
        if input.jump {
            card.vel = JUMP_IMPULSE;
            events.push(GameEvent::Jumped);
        }

        // Velocity before position
        card.vel += GRAVITY;
        card.pos.y += card.vel;
        card.rotation = (card.vel * ROTATION_SCALE).clamp(-ROTATION_CLAMP, ROTATION_CLAMP);
    }

    let Some(card_box) = state.card.as_ref().map(|c| c.aabb()) else {
        return events;
    };

    if collision::hits_bounds(&card_box, state.field.y) {
        game_over(state, &mut events);
        return events;
    }

    if state.frames.is_multiple_of(SPAWN_INTERVAL_TICKS) {
        spawn_obstacle(state);
    }

    // Scroll first, then judge every obstacle against the post-move positions
    let speed = state.speed;
    for obs in &mut state.obstacles {
        obs.x -= speed;
    }

    if state
        .obstacles
        .iter()
        .any(|obs| collision::card_hits_obstacle(&card_box, obs))
    {
        game_over(state, &mut events);
        return events;
    }

    // Scoring pass: each obstacle pays out at most once, when the card's
    // leading edge has cleared its trailing edge.
    for obs in &mut state.obstacles {
        if !obs.passed && card_box.right() > obs.x + obs.width {
            obs.passed = true;
            state.score += 1;
            if state.score.is_multiple_of(SPEED_STEP_SCORE) {
                state.speed += SPEED_INCREMENT;
            }
            events.push(GameEvent::Scored { score: state.score });
            if let Some(card) = state.card.as_mut() {
                card.shuffle_look(&mut state.rng);
            }
        }
    }

    // Cleanup pass, separate from scoring so nothing is skipped or processed
    // twice in the tick it leaves the field
    state.obstacles.retain(|obs| obs.x + obs.width >= 0.0);

    events
}

/// Spawn one obstacle at the field's right edge with a uniformly random
/// upper-segment height. On fields too short for two minimum segments plus
/// the gap, the range clamps to its lower bound instead of inverting.
fn spawn_obstacle(state: &mut GameState) {
    let max_top = (state.field.y - GAP_HEIGHT - MIN_SEGMENT_HEIGHT).max(MIN_SEGMENT_HEIGHT);
    let top_height = state.rng.random_range(MIN_SEGMENT_HEIGHT..=max_top);
    let has_rabbit = state.rng.random::<f32>() < RABBIT_CHANCE;

    state.obstacles.push(Obstacle {
        x: state.field.x,
        width: OBSTACLE_WIDTH,
        top_height,
        gap: GAP_HEIGHT,
        passed: false,
        has_rabbit,
    });
}

/// One-way transition out of Running
fn game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::Crashed { score: state.score });
    log::info!("run over, score {}", state.score);
}
