//! Best-score record
//!
//! Persisted to LocalStorage under a fixed key. Read once at startup, written
//! only when a run beats it; a missing or unreadable record means no previous
//! best, and a failed write is non-fatal.

use serde::{Deserialize, Serialize};

/// The highest score achieved across runs
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BestScore {
    pub score: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_card_best";

    pub fn new() -> Self {
        Self { score: 0 }
    }

    /// Whether a finished run's score would replace the record
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.score
    }

    /// Offer a finished run's score. Updates and persists the record when it
    /// qualifies; returns true on a new best.
    pub fn submit(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.score = score;
        self.save();
        true
    }

    /// Load the record from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<BestScore>(&json) {
                    log::info!("Loaded best score: {}", best.score);
                    return best;
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved: {}", self.score);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_replaces_the_record() {
        let mut best = BestScore { score: 12 };
        assert!(best.submit(15));
        assert_eq!(best.score, 15);
    }

    #[test]
    fn lower_or_equal_score_leaves_the_record() {
        let mut best = BestScore { score: 12 };
        assert!(!best.submit(10));
        assert_eq!(best.score, 12);
        assert!(!best.submit(12));
        assert_eq!(best.score, 12);
    }

    #[test]
    fn fresh_record_accepts_any_positive_score() {
        let mut best = BestScore::new();
        assert!(!best.qualifies(0));
        assert!(best.submit(1));
        assert_eq!(best.score, 1);
    }

    #[test]
    fn record_round_trips_through_json() {
        let best = BestScore { score: 42 };
        let json = serde_json::to_string(&best).unwrap();
        assert_eq!(serde_json::from_str::<BestScore>(&json).unwrap(), best);
    }
}
