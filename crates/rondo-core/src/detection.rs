use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Vector2};

/// COCO keypoint index of the left ankle.
pub const LEFT_ANKLE: usize = 15;
/// COCO keypoint index of the right ankle.
pub const RIGHT_ANKLE: usize = 16;

/// A single detected object in one frame.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    /// COCO class id assigned by the detector.
    pub class_id: u32,
    pub confidence: f32,
    /// Stable id assigned by the external tracker, when it has one.
    pub tracker_id: Option<u32>,
}

/// Keypoints for one tracked player, in COCO-17 order, in the same pixel
/// space as the bounding boxes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerPose {
    pub keypoints: Vec<Vector2>,
}

/// Everything the external detection and pose models reported for one frame.
///
/// Detections keep the detector's emission order; downstream consumers rely
/// on it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DetectionFrame {
    pub frame_index: u64,
    pub detections: Vec<Detection>,
    pub poses: Vec<PlayerPose>,
}

impl DetectionFrame {
    /// Bounding boxes of all detections with the given class id, in emission
    /// order.
    pub fn boxes_with_class(&self, class_id: u32) -> Vec<BoundingBox> {
        self.detections
            .iter()
            .filter(|d| d.class_id == class_id)
            .map(|d| d.bbox)
            .collect()
    }

    /// Keypoints of the first tracked player, if any.
    pub fn first_pose(&self) -> Option<&PlayerPose> {
        self.poses.first()
    }
}
