//! Axis-aligned collision tests between the card and obstacle segments
//!
//! Every obstacle is two disjoint rectangles: an upper segment from the field
//! top down to `top_height`, and a lower segment from `top_height + gap` down
//! to the field bottom, both spanning the obstacle's horizontal extent.

use glam::Vec2;

use super::state::Obstacle;

/// Axis-aligned bounding box, top-left anchored (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }
}

/// Horizontal interval overlap, strict on both sides: boxes that merely touch
/// edge-to-edge do not overlap.
#[inline]
fn overlaps_x(card: &Aabb, obs: &Obstacle) -> bool {
    card.left() < obs.right() && card.right() > obs.x
}

/// Card vs. one obstacle. A hit requires horizontal overlap plus the card's
/// top edge inside the upper segment or its bottom edge inside the lower
/// segment; all comparisons are strict, so flush alignment with a segment
/// edge is still a miss.
pub fn card_hits_obstacle(card: &Aabb, obs: &Obstacle) -> bool {
    if !overlaps_x(card, obs) {
        return false;
    }
    let hit_top = card.top() < obs.gap_top();
    let hit_bottom = card.bottom() > obs.gap_bottom();
    hit_top || hit_bottom
}

/// Play-field boundary check: the floor is fatal on contact (non-strict), the
/// ceiling only once the top edge actually goes above it.
pub fn hits_bounds(card: &Aabb, field_height: f32) -> bool {
    card.bottom() >= field_height || card.top() < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            top_height: 120.0,
            gap: 170.0,
            passed: false,
            has_rabbit: false,
        }
    }

    fn card_at(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(40.0, 56.0))
    }

    #[test]
    fn card_inside_gap_is_safe() {
        let obs = obstacle_at(40.0);
        // Gap spans y in [120, 290]; card at y=150 sits fully inside it
        assert!(!card_hits_obstacle(&card_at(50.0, 150.0), &obs));
    }

    #[test]
    fn card_hits_upper_segment() {
        let obs = obstacle_at(40.0);
        // Top edge at y=100 < top_height=120
        assert!(card_hits_obstacle(&card_at(50.0, 100.0), &obs));
    }

    #[test]
    fn card_hits_lower_segment() {
        let obs = obstacle_at(40.0);
        // Bottom edge at 250+56=306 > gap bottom 290
        assert!(card_hits_obstacle(&card_at(50.0, 250.0), &obs));
    }

    #[test]
    fn horizontal_edge_touch_is_a_miss() {
        let obs = obstacle_at(100.0);
        // Card right edge exactly on the obstacle's left edge
        let card = card_at(60.0, 50.0);
        assert_eq!(card.right(), obs.x);
        assert!(!card_hits_obstacle(&card, &obs));
        // One pixel further and it overlaps
        assert!(card_hits_obstacle(&card_at(61.0, 50.0), &obs));

        // Same on the trailing side: card left edge on the obstacle's right edge
        let card = card_at(160.0, 50.0);
        assert_eq!(card.left(), obs.right());
        assert!(!card_hits_obstacle(&card, &obs));
    }

    #[test]
    fn vertical_flush_alignment_is_a_miss() {
        let obs = obstacle_at(40.0);
        // Card top exactly at top_height: not inside the upper segment
        assert!(!card_hits_obstacle(&card_at(50.0, 120.0), &obs));
        // Card bottom exactly at gap bottom (290 - 56 = 234): still safe
        assert!(!card_hits_obstacle(&card_at(50.0, 234.0), &obs));
        // A hair past either edge collides
        assert!(card_hits_obstacle(&card_at(50.0, 119.9), &obs));
        assert!(card_hits_obstacle(&card_at(50.0, 234.1), &obs));
    }

    #[test]
    fn floor_contact_and_ceiling_crossing() {
        // y + height = 452 >= 400: floor hit
        assert!(hits_bounds(&card_at(50.0, 396.0), 400.0));
        // Exactly resting on the floor counts
        assert!(hits_bounds(&card_at(50.0, 344.0), 400.0));
        // Top edge exactly at zero is still in play
        assert!(!hits_bounds(&card_at(50.0, 0.0), 400.0));
        assert!(hits_bounds(&card_at(50.0, -0.1), 400.0));
        assert!(!hits_bounds(&card_at(50.0, 150.0), 400.0));
    }

    proptest! {
        // Shifting card and obstacle by the same horizontal offset never
        // changes the verdict.
        #[test]
        fn verdict_invariant_under_horizontal_translation(
            card_x in -200.0f32..600.0,
            card_y in -100.0f32..500.0,
            obs_x in -200.0f32..600.0,
            top in 80.0f32..150.0,
            dx in -1000.0f32..1000.0,
        ) {
            let mut obs = obstacle_at(obs_x);
            obs.top_height = top;
            let card = card_at(card_x, card_y);

            let mut shifted_obs = obs.clone();
            shifted_obs.x += dx;
            let shifted_card = card_at(card_x + dx, card_y);

            prop_assert_eq!(
                card_hits_obstacle(&card, &obs),
                card_hits_obstacle(&shifted_card, &shifted_obs)
            );
        }
    }
}
