use rondo_core::{math, BoundingBox, DrillSettings, MarkerPair, Quad};

/// Where the marker pair behind the current regions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSource {
    /// The configured fallback; no frame has reported two markers yet.
    Default,
    /// A pair persisted from the most recent frame with two or more markers.
    Detected,
}

/// The target and wall quadrilaterals derived for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPair {
    /// The opening between the two markers; a ball landing here is a hit.
    pub target: Quad,
    /// The area extending past both markers along the target's open edges; a
    /// ball landing here is a miss.
    pub wall: Quad,
    pub source: MarkerSource,
}

/// Tracker for the target and wall regions.
///
/// Persists the last reliable marker pair, so transient detection loss does
/// not move the regions.
#[derive(Debug)]
pub struct RegionTracker {
    wall_extension: f64,
    default_markers: MarkerPair,
    /// Last pair seen in a frame with two or more marker detections.
    markers: Option<MarkerPair>,
}

impl RegionTracker {
    /// Create a new RegionTracker.
    pub fn new(settings: &DrillSettings) -> RegionTracker {
        RegionTracker {
            wall_extension: settings.wall_extension,
            default_markers: settings.default_markers,
            markers: None,
        }
    }

    /// Update the tracker with this frame's marker detections and rebuild
    /// both regions.
    ///
    /// The first two boxes in emission order become the new pair; fewer than
    /// two leave the previous pair in place.
    pub fn update(&mut self, markers: &[BoundingBox]) -> RegionPair {
        if markers.len() >= 2 {
            if self.markers.is_none() {
                log::debug!("Region tracker received first marker pair");
            }
            self.markers = Some(MarkerPair {
                marker_a: markers[0],
                marker_b: markers[1],
            });
        }

        let (pair, source) = match &self.markers {
            Some(pair) => (pair, MarkerSource::Detected),
            None => (&self.default_markers, MarkerSource::Default),
        };
        let target = target_region(pair);
        let wall = wall_region(&target, self.wall_extension);
        RegionPair {
            target,
            wall,
            source,
        }
    }
}

/// Quadrilateral spanning the gap between the two markers.
fn target_region(pair: &MarkerPair) -> Quad {
    Quad::new([
        pair.marker_a.top_left(),
        pair.marker_b.top_left(),
        pair.marker_b.bottom_right(),
        pair.marker_a.bottom_right(),
    ])
}

/// Quadrilateral extending the target's open edges past both markers.
fn wall_region(target: &Quad, extension: f64) -> Quad {
    let [a_tl, b_tl, b_br, a_br] = target.corners;
    let (p1, p2) = math::extend_edge(b_tl, a_tl, extension);
    let (p3, p4) = math::extend_edge(b_br, a_br, extension);
    Quad::new([p1, p2, p4, p3])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rondo_core::Vector2;

    use super::*;

    fn settings() -> DrillSettings {
        DrillSettings {
            wall_extension: 1.0,
            ..DrillSettings::default()
        }
    }

    fn marker_a() -> BoundingBox {
        BoundingBox::new(100.0, 0.0, 120.0, 50.0)
    }

    fn marker_b() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 20.0, 50.0)
    }

    #[test]
    fn test_default_regions_before_first_sighting() {
        let mut tracker = RegionTracker::new(&settings());

        let regions = tracker.update(&[]);
        assert_eq!(regions.source, MarkerSource::Default);

        let defaults = settings().default_markers;
        assert_eq!(regions.target.corners[0], defaults.marker_a.top_left());
        assert_eq!(regions.target.corners[1], defaults.marker_b.top_left());
    }

    #[test]
    fn test_target_corner_order() {
        let mut tracker = RegionTracker::new(&settings());

        let regions = tracker.update(&[marker_a(), marker_b()]);
        assert_eq!(regions.source, MarkerSource::Detected);
        assert_eq!(regions.target.corners[0], Vector2::new(100.0, 0.0));
        assert_eq!(regions.target.corners[1], Vector2::new(0.0, 0.0));
        assert_eq!(regions.target.corners[2], Vector2::new(20.0, 50.0));
        assert_eq!(regions.target.corners[3], Vector2::new(120.0, 50.0));
    }

    #[test]
    fn test_wall_extends_past_both_markers() {
        let mut tracker = RegionTracker::new(&settings());

        let regions = tracker.update(&[marker_a(), marker_b()]);
        let [p1, p2, p4, p3] = regions.wall.corners;

        // Top edge runs from b.top_left (0,0) to a.top_left (100,0) and is
        // extended by its own length on both ends.
        assert_relative_eq!(p1.x, 200.0);
        assert_relative_eq!(p1.y, 0.0);
        assert_relative_eq!(p2.x, -100.0);
        assert_relative_eq!(p2.y, 0.0);

        // Bottom edge runs from b.bottom_right (20,50) to a.bottom_right
        // (120,50).
        assert_relative_eq!(p3.x, 220.0);
        assert_relative_eq!(p3.y, 50.0);
        assert_relative_eq!(p4.x, -80.0);
        assert_relative_eq!(p4.y, 50.0);

        // The wall surrounds the target opening.
        assert!(regions.wall.contains(Vector2::new(60.0, 25.0)));
        assert!(regions.wall.contains(Vector2::new(-50.0, 25.0)));
        assert!(!regions.target.contains(Vector2::new(-50.0, 25.0)));
    }

    #[test]
    fn test_regions_persist_through_marker_loss() {
        let mut tracker = RegionTracker::new(&settings());

        let seen = tracker.update(&[marker_a(), marker_b()]);
        let lost = tracker.update(&[]);
        assert_eq!(lost.source, MarkerSource::Detected);
        assert_eq!(lost.target, seen.target);
        assert_eq!(lost.wall, seen.wall);

        let one_marker = tracker.update(&[marker_b()]);
        assert_eq!(one_marker.target, seen.target);
    }

    #[test]
    fn test_first_two_markers_win() {
        let mut tracker = RegionTracker::new(&settings());
        let extra = BoundingBox::new(500.0, 500.0, 520.0, 550.0);

        let regions = tracker.update(&[marker_a(), marker_b(), extra]);
        assert_eq!(regions.target.corners[0], marker_a().top_left());
        assert_eq!(regions.target.corners[1], marker_b().top_left());
    }
}
