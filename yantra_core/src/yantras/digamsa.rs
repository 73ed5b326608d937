//! # Digamsa Yantra
//!
//! A circular, perfectly level platform with a central gnomon and engraved
//! direction rings, used to measure the azimuth of celestial objects.
//! Direction finding does not depend on latitude, so the geometry is the same
//! everywhere; only the scale changes it.

use crate::units::{Degrees, Meters};
use crate::yantras::YantraSpec;

pub const NAME: &str = "Digamsa Yantra";

const PLATFORM_RADIUS: Meters = Meters(4.0);
const PLATFORM_THICKNESS: Meters = Meters(0.5);
const GNOMON_HEIGHT: Meters = Meters(2.0);
const GNOMON_THICKNESS: Meters = Meters(0.1);
const OUTER_RING_WIDTH: Meters = Meters(0.5);
const INNER_RING_WIDTH: Meters = Meters(0.3);

/// One engraved mark per degree
const SCALE_DIVISIONS: u32 = 360;

const MATERIALS: &[&str] = &[
    "Marble platform",
    "Bronze gnomon",
    "Engraved direction markings",
];

const NOTES: &str = "Digamsa Yantra must be perfectly level and aligned to magnetic north. \
The gnomon casts shadows indicating azimuth angles. \
Precision depends on gnomon height and scale quality. \
Used primarily for surveying and navigation purposes. \
Can measure directions with accuracy up to 6 arc-minutes.";

/// Compute the Digamsa Yantra. `latitude` is accepted for a uniform
/// signature and ignored.
pub fn calculate(_latitude: f64, scale: f64) -> YantraSpec {
    let platform_radius = PLATFORM_RADIUS * scale;

    YantraSpec::builder(NAME, "Precision azimuth/direction measuring instrument")
        .length("platform_radius", platform_radius)
        .length("platform_thickness", PLATFORM_THICKNESS * scale)
        .length("platform_diameter", platform_radius * 2.0)
        .length("gnomon_height", GNOMON_HEIGHT * scale)
        .length("gnomon_thickness", GNOMON_THICKNESS * scale)
        .length("outer_ring_width", OUTER_RING_WIDTH * scale)
        .length("inner_ring_width", INNER_RING_WIDTH * scale)
        .count("scale_divisions", SCALE_DIVISIONS)
        .angle("primary_angle_step", Degrees(90.0))
        .angle("secondary_angle_step", Degrees(45.0))
        .angle("fine_angle_step", Degrees(1.0))
        .angle("precision", Degrees(0.1))
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
        assert_eq!(spec.dimension("platform_radius"), Some(4.0));
        assert_eq!(spec.dimension("platform_diameter"), Some(8.0));
        assert_eq!(spec.dimension("gnomon_height"), Some(2.0));
        assert_eq!(spec.dimension("scale_divisions"), Some(360.0));
    }

    #[test]
    fn test_notes_align_to_magnetic_north() {
        let spec = calculate(26.9247, 1.0);
        assert!(spec.construction_notes.starts_with(
            "Digamsa Yantra must be perfectly level and aligned to magnetic north."
        ));
    }

    #[test]
    fn test_orientation_agnostic() {
        assert_eq!(calculate(0.0, 3.0), calculate(-72.5, 3.0));
    }
}
