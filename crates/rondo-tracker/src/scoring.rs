use rondo_core::{BoundingBox, Vector2};

use crate::{region::RegionPair, touch::ball_touches_feet};

/// Session counters and touch flag after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameScore {
    pub hits: u32,
    pub misses: u32,
    pub touched: bool,
}

/// Hit/miss state machine over the session counters and the touch flag.
///
/// The flag arms when the ball contacts the player's feet; a registered hit
/// consumes it. A registered miss leaves it armed -- the ball comes off the
/// wall and the possession continues.
#[derive(Debug)]
pub struct ScoreTracker {
    touch_radius: f64,
    hits: u32,
    misses: u32,
    touched: bool,
}

impl ScoreTracker {
    /// Create a new ScoreTracker with zeroed counters.
    pub fn new(touch_radius: f64) -> ScoreTracker {
        ScoreTracker {
            touch_radius,
            hits: 0,
            misses: 0,
            touched: false,
        }
    }

    /// Classify this frame's balls against the current regions.
    ///
    /// Balls are processed in emission order and the first one registering a
    /// hit or a miss ends the frame, so each call increments at most one
    /// counter by at most one. The target is tested before the wall and wins
    /// when the regions overlap.
    pub fn step(
        &mut self,
        balls: &[BoundingBox],
        keypoints: &[Vector2],
        regions: &RegionPair,
    ) -> FrameScore {
        for ball in balls {
            if ball_touches_feet(keypoints, ball, self.touch_radius) {
                self.touched = true;
            }

            let center = ball.center();
            if regions.target.contains(center) {
                if self.touched {
                    self.hits += 1;
                    self.touched = false;
                    log::debug!("Registered hit ({} total)", self.hits);
                    break;
                }
            } else if regions.wall.contains(center) {
                if self.touched {
                    self.misses += 1;
                    log::debug!("Registered miss ({} total)", self.misses);
                    break;
                }
            }
        }
        self.score()
    }

    /// The current counters and touch flag.
    pub fn score(&self) -> FrameScore {
        FrameScore {
            hits: self.hits,
            misses: self.misses,
            touched: self.touched,
        }
    }
}
