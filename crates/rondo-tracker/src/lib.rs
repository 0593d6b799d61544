mod region;
mod scoring;
mod touch;

pub use region::{MarkerSource, RegionPair, RegionTracker};
use rondo_core::{BoundingBox, DetectionFrame, DrillSettings, Quad, Vector2};
pub use scoring::{FrameScore, ScoreTracker};
pub use touch::ball_touches_feet;

/// A struct to track the drill state across a frame stream.
///
/// One `update` call per video frame, strictly in frame order: the marker
/// detections rebuild the regions, then the frame's balls are classified
/// against them. Counters live for the whole session.
pub struct DrillTracker {
    region_tracker: RegionTracker,
    score_tracker: ScoreTracker,
    settings: DrillSettings,
    frames_processed: u64,
}

/// Per-frame snapshot handed to the annotation/output stage.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub frame_index: u64,
    pub hits: u32,
    pub misses: u32,
    pub touched: bool,
    pub target: Quad,
    pub wall: Quad,
    pub marker_source: MarkerSource,
    /// Centers of the balls considered this frame, in emission order.
    pub ball_centers: Vec<Vector2>,
    /// Player boxes, for the overlay stage.
    pub player_boxes: Vec<BoundingBox>,
}

/// Final counters for one processed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillSummary {
    pub hits: u32,
    pub misses: u32,
    pub frames_processed: u64,
}

impl DrillTracker {
    /// Create a new DrillTracker from settings.
    pub fn new(settings: &DrillSettings) -> Self {
        Self {
            region_tracker: RegionTracker::new(settings),
            score_tracker: ScoreTracker::new(settings.touch_radius),
            settings: settings.clone(),
            frames_processed: 0,
        }
    }

    /// Process one frame's worth of detections and poses.
    pub fn update(&mut self, frame: &DetectionFrame) -> FrameReport {
        let markers = frame.boxes_with_class(self.settings.marker_class_id);
        let regions = self.region_tracker.update(&markers);

        let balls = frame.boxes_with_class(self.settings.ball_class_id);
        let keypoints = frame
            .first_pose()
            .map(|pose| pose.keypoints.as_slice())
            .unwrap_or(&[]);
        let score = self.score_tracker.step(&balls, keypoints, &regions);

        self.frames_processed += 1;
        FrameReport {
            frame_index: frame.frame_index,
            hits: score.hits,
            misses: score.misses,
            touched: score.touched,
            target: regions.target,
            wall: regions.wall,
            marker_source: regions.source,
            ball_centers: balls.iter().map(|b| b.center()).collect(),
            player_boxes: frame.boxes_with_class(self.settings.player_class_id),
        }
    }

    /// The session counters so far. Valid at any point in the stream, so an
    /// early stop still yields meaningful partial results.
    pub fn summary(&self) -> DrillSummary {
        let score = self.score_tracker.score();
        DrillSummary {
            hits: score.hits,
            misses: score.misses,
            frames_processed: self.frames_processed,
        }
    }
}
