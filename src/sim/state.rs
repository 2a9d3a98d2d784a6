//! Game state and core simulation types
//!
//! Everything a run needs to be replayed from its seed lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-start, no entities
    Idle,
    /// Active run: physics, spawning and collisions are live
    Running,
    /// Run ended; terminal display state until an explicit restart
    GameOver,
}

/// Card suits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    pub fn glyph(&self) -> &'static str {
        match self {
            Suit::Hearts => "\u{2665}",
            Suit::Spades => "\u{2660}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }

    /// Hearts and diamonds print red, the rest black
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Back-of-card pattern variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackVariant {
    /// Blue diagonal crosshatch
    Crosshatch,
    /// Red diamond lattice
    DiamondLattice,
    /// Black with gold rings
    Rings,
}

impl BackVariant {
    pub const ALL: [BackVariant; 3] = [
        BackVariant::Crosshatch,
        BackVariant::DiamondLattice,
        BackVariant::Rings,
    ];
}

/// What the card currently shows. Display-only: collisions and physics never
/// read this, it changes as a flourish when an obstacle is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLook {
    Face { rank: &'static str, suit: Suit },
    Back { variant: BackVariant },
}

pub const RANKS: [&str; 13] = [
    "A", "K", "Q", "J", "10", "9", "8", "7", "6", "5", "4", "3", "2",
];

/// The player's card
#[derive(Debug, Clone)]
pub struct Card {
    /// Top-left corner; x stays fixed for the whole run
    pub pos: Vec2,
    /// Vertical velocity (px/tick, positive = down)
    pub vel: f32,
    pub size: Vec2,
    /// Display tilt derived from velocity; never used for collision
    pub rotation: f32,
    pub look: CardLook,
}

impl Card {
    /// Fresh card at the start of a run, vertically centered in the field
    pub fn new(field: Vec2) -> Self {
        Self {
            pos: Vec2::new(CARD_X, field.y / 2.0),
            vel: 0.0,
            size: Vec2::new(CARD_WIDTH, CARD_HEIGHT),
            rotation: 0.0,
            look: CardLook::Face {
                rank: "A",
                suit: Suit::Hearts,
            },
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Cosmetic flourish on a successful pass: sometimes flip to a random
    /// back pattern, otherwise deal a new face.
    pub fn shuffle_look(&mut self, rng: &mut impl Rng) {
        if rng.random::<f32>() < CARD_BACK_CHANCE {
            let variant = BackVariant::ALL[rng.random_range(0..BackVariant::ALL.len())];
            self.look = CardLook::Back { variant };
        } else {
            let rank = RANKS[rng.random_range(0..RANKS.len())];
            let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
            self.look = CardLook::Face { rank, suit };
        }
    }
}

/// A scrolling obstacle: two solid segments with a passable gap between them.
/// Geometry is fixed at spawn; only `x` and `passed` change afterwards.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge (px); decreases by the scroll speed each tick
    pub x: f32,
    pub width: f32,
    /// Height of the upper solid segment, measured from the field top
    pub top_height: f32,
    /// Vertical extent of the passable gap
    pub gap: f32,
    /// Set exactly once, when the card's leading edge clears the trailing edge
    pub passed: bool,
    /// Decorative rabbit peeking into the gap; no gameplay effect
    pub has_rabbit: bool,
}

impl Obstacle {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top of the passable gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.top_height
    }

    /// Bottom of the passable gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap
    }
}

/// Complete game state, exclusively owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Play-field dimensions (width, height); the only state a resize touches
    pub field: Vec2,
    /// Monotone within a run
    pub score: u32,
    /// Scroll speed (px/tick); grows as the score climbs
    pub speed: f32,
    /// Tick counter within the current run
    pub frames: u64,
    /// Present while a run is live or being displayed after game over
    pub card: Option<Card>,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create an idle state with the given seed and field dimensions
    pub fn new(seed: u64, field_width: f32, field_height: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            field: Vec2::new(field_width, field_height),
            score: 0,
            speed: SCROLL_SPEED_START,
            frames: 0,
            card: None,
            obstacles: Vec::new(),
        }
    }

    /// Enter Running with fresh entity state. Valid from Idle (start) and
    /// GameOver (restart); the previous run's counters and obstacles are
    /// discarded, not paused.
    pub fn begin_run(&mut self) {
        self.score = 0;
        self.speed = SCROLL_SPEED_START;
        self.frames = 0;
        self.obstacles.clear();
        self.card = Some(Card::new(self.field));
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Viewport resize: only the field dimensions change. Obstacles already
    /// spawned keep the geometry they were born with.
    pub fn set_field_size(&mut self, width: f32, height: f32) {
        self.field = Vec2::new(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = GameState::new(7, 480.0, 400.0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.card.is_none());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn begin_run_creates_centered_card() {
        let mut state = GameState::new(7, 480.0, 400.0);
        state.begin_run();
        assert_eq!(state.phase, GamePhase::Running);
        let card = state.card.as_ref().unwrap();
        assert_eq!(card.pos, Vec2::new(CARD_X, 200.0));
        assert_eq!(card.vel, 0.0);
        assert_eq!(
            card.look,
            CardLook::Face {
                rank: "A",
                suit: Suit::Hearts
            }
        );
    }

    #[test]
    fn shuffle_look_only_produces_known_looks() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut card = Card::new(Vec2::new(480.0, 400.0));
        let mut saw_back = false;
        let mut saw_face = false;
        for _ in 0..200 {
            card.shuffle_look(&mut rng);
            match card.look {
                CardLook::Back { .. } => saw_back = true,
                CardLook::Face { rank, .. } => {
                    saw_face = true;
                    assert!(RANKS.contains(&rank));
                }
            }
        }
        assert!(saw_back && saw_face);
    }

    #[test]
    fn resize_leaves_obstacles_untouched() {
        let mut state = GameState::new(7, 480.0, 400.0);
        state.begin_run();
        state.obstacles.push(Obstacle {
            x: 480.0,
            width: 60.0,
            top_height: 120.0,
            gap: 170.0,
            passed: false,
            has_rabbit: false,
        });
        state.set_field_size(320.0, 240.0);
        assert_eq!(state.field, Vec2::new(320.0, 240.0));
        assert_eq!(state.obstacles[0].top_height, 120.0);
        assert_eq!(state.obstacles[0].gap, 170.0);
    }
}
