use serde::{Deserialize, Serialize};

use crate::{math, Vector2};

/// An axis-aligned bounding box in image-plane pixels, as reported by the
/// detector. Corners are (x1, y1) top-left and (x2, y2) bottom-right, with
/// x1 <= x2 and y1 <= y2.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Top-left corner of the box.
    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.x1, self.y1)
    }

    /// Bottom-right corner of the box.
    pub fn bottom_right(&self) -> Vector2 {
        Vector2::new(self.x2, self.y2)
    }

    /// Center of the box.
    pub fn center(&self) -> Vector2 {
        Vector2::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// The two fixed reference objects (eg. two bottles) whose gap defines the
/// target opening.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MarkerPair {
    pub marker_a: BoundingBox,
    pub marker_b: BoundingBox,
}

/// An ordered quadrilateral in image-plane pixels.
///
/// The corner order comes straight from detection coordinates, so the winding
/// may be either clockwise or counter-clockwise.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Vector2; 4],
}

impl Quad {
    pub fn new(corners: [Vector2; 4]) -> Self {
        Self { corners }
    }

    /// Whether the point lies inside the quadrilateral or on its boundary.
    pub fn contains(&self, point: Vector2) -> bool {
        math::point_in_polygon(point, &self.corners)
    }
}
