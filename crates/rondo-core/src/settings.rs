use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, MarkerPair};

/// Settings for the `DrillTracker`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrillSettings {
    /// COCO class id of the ball ("sports ball").
    pub ball_class_id: u32,
    /// COCO class id of the markers ("bottle").
    pub marker_class_id: u32,
    /// COCO class id of the player ("person").
    pub player_class_id: u32,
    /// Maximum distance between the ball center and an ankle keypoint for
    /// the ball to count as touched, in pixels.
    pub touch_radius: f64,
    /// How far each open edge of the target is extended past both markers to
    /// form the wall, as a multiple of the edge length.
    pub wall_extension: f64,
    /// Marker pair used until a frame has reported two markers at least once.
    pub default_markers: MarkerPair,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            ball_class_id: 32,
            marker_class_id: 39,
            player_class_id: 0,
            touch_radius: 50.0,
            wall_extension: 1.0,
            default_markers: MarkerPair {
                marker_a: BoundingBox::new(700.0, 500.0, 750.0, 700.0),
                marker_b: BoundingBox::new(500.0, 200.0, 550.0, 400.0),
            },
        }
    }
}

impl DrillSettings {
    /// Load the settings from a file, or store the default settings if the
    /// file does not exist or is invalid.
    pub fn load_or_insert(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    eprintln!("Failed to parse drill settings: {}", err);
                    Self::default()
                }
            },
            Err(_) => {
                let settings = Self::default();
                match serde_json::to_string_pretty(&settings) {
                    Ok(json) => {
                        if let Err(err) = fs::write(path.as_ref(), json) {
                            eprintln!("Failed to store default settings: {}", err);
                        }
                    }
                    Err(err) => eprintln!("Failed to serialize default settings: {}", err),
                }
                settings
            }
        }
    }
}
