use rondo_core::{BoundingBox, Vector2, LEFT_ANKLE, RIGHT_ANKLE};

/// Whether the ball is currently in contact with the player's feet.
///
/// Compares the ball center against the two ankle keypoints; a pose with too
/// few keypoints never counts as touching.
pub fn ball_touches_feet(keypoints: &[Vector2], ball: &BoundingBox, radius: f64) -> bool {
    let center = ball.center();
    [LEFT_ANKLE, RIGHT_ANKLE]
        .iter()
        .filter_map(|&i| keypoints.get(i))
        .any(|ankle| (center - ankle).norm() <= radius)
}
