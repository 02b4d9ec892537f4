//! Ball velocity-reversal policy
//!
//! Two event points drive the ball:
//! - boundary reflection, applied once per frame after position
//!   integration, against the board edges
//! - collision reflection, applied once per reported contact with a
//!   brick or the paddle
//!
//! Both are sign flips on a single velocity component; magnitude is
//! never changed and position is never corrected here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which edge tests run in a single post-update pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryStrategy {
    /// Every edge test runs on its own; both axes may flip in the same
    /// frame (e.g. a corner hit)
    #[default]
    Independent,
    /// Edge tests form an if/else-if chain (left, right, top); at most
    /// one axis flips per frame, so a corner hit only reverses x
    Exclusive,
}

impl BoundaryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryStrategy::Independent => "independent",
            BoundaryStrategy::Exclusive => "exclusive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "independent" => Some(BoundaryStrategy::Independent),
            "exclusive" => Some(BoundaryStrategy::Exclusive),
            _ => None,
        }
    }
}

/// Board-edge reflection policy
///
/// The bottom edge is never reflected: a ball travelling past it is the
/// loss path, handled by the viewport-exit hook instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryPolicy {
    pub strategy: BoundaryStrategy,
    /// Whether the top edge reflects at all (variant-dependent)
    pub reflect_top: bool,
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self {
            strategy: BoundaryStrategy::Independent,
            reflect_top: true,
        }
    }
}

impl BoundaryPolicy {
    /// Apply edge reflection to `vel` for a box of `half` extents
    /// centered at `pos`, inside a `board.x` x `board.y` board.
    ///
    /// Returns true if any component flipped. The tests mirror the
    /// integrated position, so a ball already past an edge flips even
    /// if it is on its way back; callers run this once per frame.
    pub fn apply(&self, pos: Vec2, half: Vec2, vel: &mut Vec2, board: Vec2) -> bool {
        let past_left = pos.x < half.x;
        let past_right = pos.x + half.x > board.x;
        let past_top = pos.y < half.y;

        let mut flipped = false;
        match self.strategy {
            BoundaryStrategy::Independent => {
                if past_left {
                    vel.x = -vel.x;
                    flipped = true;
                }
                if past_right {
                    vel.x = -vel.x;
                    flipped = true;
                }
                if past_top && self.reflect_top {
                    vel.y = -vel.y;
                    flipped = true;
                }
            }
            BoundaryStrategy::Exclusive => {
                if past_left {
                    vel.x = -vel.x;
                    flipped = true;
                } else if past_right {
                    vel.x = -vel.x;
                    flipped = true;
                } else if past_top && self.reflect_top {
                    vel.y = -vel.y;
                    flipped = true;
                }
            }
        }
        flipped
    }
}

/// Reverse course after a contact
///
/// Normalizes the reported intersection vector and flips the velocity
/// component on whichever axis carries the larger magnitude. This is an
/// approximate single-axis bounce, not a true reflection about the
/// contact normal. X wins exact ties; a zero vector degenerates to the
/// x axis as well.
pub fn collision_reflect(vel: &mut Vec2, intersection: Vec2) {
    let n = intersection.normalize_or_zero();
    if n.x.abs() >= n.y.abs() {
        vel.x = -vel.x;
    } else {
        vel.y = -vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Vec2 = Vec2::new(800.0, 600.0);
    const HALF: Vec2 = Vec2::new(15.0, 15.0);

    #[test]
    fn test_left_edge_flips_x_exactly() {
        let policy = BoundaryPolicy::default();
        let mut vel = Vec2::new(200.0, 200.0);

        let flipped = policy.apply(Vec2::new(10.0, 300.0), HALF, &mut vel, BOARD);
        assert!(flipped);
        assert_eq!(vel, Vec2::new(-200.0, 200.0));
    }

    #[test]
    fn test_right_edge_flips_x_exactly() {
        let policy = BoundaryPolicy::default();
        let mut vel = Vec2::new(-137.5, 80.0);

        let flipped = policy.apply(Vec2::new(795.0, 300.0), HALF, &mut vel, BOARD);
        assert!(flipped);
        assert_eq!(vel, Vec2::new(137.5, 80.0));
    }

    #[test]
    fn test_top_edge_flips_y() {
        let policy = BoundaryPolicy::default();
        let mut vel = Vec2::new(200.0, -200.0);

        let flipped = policy.apply(Vec2::new(400.0, 5.0), HALF, &mut vel, BOARD);
        assert!(flipped);
        assert_eq!(vel, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_top_edge_ignored_when_disabled() {
        let policy = BoundaryPolicy {
            reflect_top: false,
            ..BoundaryPolicy::default()
        };
        let mut vel = Vec2::new(200.0, -200.0);

        let flipped = policy.apply(Vec2::new(400.0, 5.0), HALF, &mut vel, BOARD);
        assert!(!flipped);
        assert_eq!(vel, Vec2::new(200.0, -200.0));
    }

    #[test]
    fn test_bottom_edge_never_reflects() {
        let policy = BoundaryPolicy::default();
        let mut vel = Vec2::new(0.0, 300.0);

        let flipped = policy.apply(Vec2::new(400.0, 598.0), HALF, &mut vel, BOARD);
        assert!(!flipped);
        assert_eq!(vel, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_corner_independent_flips_both_axes() {
        let policy = BoundaryPolicy {
            strategy: BoundaryStrategy::Independent,
            reflect_top: true,
        };
        let mut vel = Vec2::new(-100.0, -100.0);

        policy.apply(Vec2::new(5.0, 5.0), HALF, &mut vel, BOARD);
        assert_eq!(vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_corner_exclusive_flips_one_axis() {
        let policy = BoundaryPolicy {
            strategy: BoundaryStrategy::Exclusive,
            reflect_top: true,
        };
        let mut vel = Vec2::new(-100.0, -100.0);

        policy.apply(Vec2::new(5.0, 5.0), HALF, &mut vel, BOARD);
        assert_eq!(vel, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn test_collision_reflect_larger_x() {
        let mut vel = Vec2::new(200.0, 200.0);
        collision_reflect(&mut vel, Vec2::new(-8.0, 2.0));
        assert_eq!(vel, Vec2::new(-200.0, 200.0));
    }

    #[test]
    fn test_collision_reflect_larger_y() {
        let mut vel = Vec2::new(200.0, 200.0);
        collision_reflect(&mut vel, Vec2::new(1.0, -6.0));
        assert_eq!(vel, Vec2::new(200.0, -200.0));
    }

    #[test]
    fn test_collision_reflect_tie_flips_x() {
        let mut vel = Vec2::new(150.0, 150.0);
        collision_reflect(&mut vel, Vec2::new(4.0, 4.0));
        assert_eq!(vel, Vec2::new(-150.0, 150.0));

        let mut vel = Vec2::new(150.0, 150.0);
        collision_reflect(&mut vel, Vec2::new(-4.0, 4.0));
        assert_eq!(vel, Vec2::new(-150.0, 150.0));
    }

    #[test]
    fn test_collision_reflect_preserves_magnitude() {
        let mut vel = Vec2::new(123.25, -77.5);
        let before = vel.length();
        collision_reflect(&mut vel, Vec2::new(0.0, 3.0));
        assert_eq!(vel.length(), before);
        assert_eq!(vel, Vec2::new(123.25, 77.5));
    }

    #[test]
    fn test_boundary_strategy_round_trip() {
        for strategy in [BoundaryStrategy::Independent, BoundaryStrategy::Exclusive] {
            assert_eq!(BoundaryStrategy::from_str(strategy.as_str()), Some(strategy));
        }
        assert_eq!(BoundaryStrategy::from_str("diagonal"), None);
    }
}
