//! # Rama Yantra
//!
//! A pair of open cylindrical structures with a central pillar, used to read
//! the altitude and azimuth of celestial objects. Radial walls divide the
//! floor into equal azimuth sectors; the pillar's shadow on the walls and
//! floor gives altitude.
//!
//! All lengths are proportional to the Jaipur instrument (6 m radius at
//! scale 1). The sector count is a design constant and does not scale.

use crate::units::{Degrees, Meters};
use crate::yantras::YantraSpec;

pub const NAME: &str = "Rama Yantra";

/// Base radius at scale 1
pub const BASE_RADIUS: Meters = Meters(6.0);
const PILLAR_HEIGHT: Meters = Meters(4.5);
const WALL_HEIGHT: Meters = Meters(2.5);
const WALL_THICKNESS: Meters = Meters(0.3);

/// Azimuth sectors, one per 30°
pub const RADIAL_DIVISIONS: u32 = 12;

const MATERIALS: &[&str] = &[
    "Stone masonry",
    "Metal scale markings",
    "Plaster finish (smooth surface)",
];

const NOTES: &str = "Rama Yantra measures celestial coordinates in the horizontal system. \
Each radial wall represents a different azimuth direction. \
The height of shadow on the central pillar indicates altitude. \
Requires precise leveling and north-south alignment. \
Best used for tracking star positions and planetary observations.";

/// Compute the Rama Yantra for a latitude and scale.
pub fn calculate(latitude: f64, scale: f64) -> YantraSpec {
    let base_radius = BASE_RADIUS * scale;
    let pillar_height = PILLAR_HEIGHT * scale;

    YantraSpec::builder(NAME, "Cylindrical instrument for altitude-azimuth measurements")
        .length("base_radius", base_radius)
        .length("pillar_height", pillar_height)
        .length("wall_height", WALL_HEIGHT * scale)
        .length("wall_thickness", WALL_THICKNESS * scale)
        .length("total_diameter", base_radius * 2.0)
        .length("altitude_scale_length", pillar_height)
        .count("radial_divisions", RADIAL_DIVISIONS)
        .angle("radial_step_angle", Degrees(360.0 / RADIAL_DIVISIONS as f64))
        .angle("altitude_step_angle", Degrees(1.0))
        .angle("altitude_range", Degrees(90.0))
        .angle("azimuth_range", Degrees(360.0))
        .angle("latitude_correction", Degrees(latitude))
        .materials(MATERIALS)
        .notes(NOTES)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dimensions() {
        let spec = calculate(26.9247, 1.0);
        assert_eq!(spec.dimension("base_radius"), Some(6.0));
        assert_eq!(spec.dimension("pillar_height"), Some(4.5));
        assert_eq!(spec.dimension("wall_height"), Some(2.5));
        assert_eq!(spec.dimension("total_diameter"), Some(12.0));
        assert_eq!(spec.dimension("radial_divisions"), Some(12.0));
        assert_eq!(spec.angle("radial_step_angle"), Some(30.0));
    }

    #[test]
    fn test_divisions_do_not_scale() {
        let spec = calculate(26.9247, 2.5);
        assert_eq!(spec.dimension("radial_divisions"), Some(12.0));
        assert_eq!(spec.dimension("base_radius"), Some(15.0));
    }

    #[test]
    fn test_latitude_only_affects_correction_angle() {
        let a = calculate(10.0, 1.0);
        let b = calculate(-45.0, 1.0);
        assert_eq!(a.dimensions, b.dimensions);
        assert_eq!(b.angle("latitude_correction"), Some(-45.0));
    }

    #[test]
    fn test_equator_is_fine() {
        let spec = calculate(0.0, 1.0);
        assert!(spec.dimensions.values().all(|v| *v > 0.0));
    }
}
