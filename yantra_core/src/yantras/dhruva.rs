//! # Dhruva-Protha-Chakra Yantra
//!
//! Polar alignment instrument: a ring system on an axis that points at the
//! celestial pole (Dhruva, Polaris), used to establish true north before the
//! other instruments are laid out.
//!
//! The pole stands as high above the horizon as the observer's latitude, so
//! the polar axis is inclined at the latitude. Its angle from the zenith is
//! the colatitude, `90° - |latitude|`.

use crate::units::{Degrees, Meters};
use crate::yantras::YantraSpec;

pub const NAME: &str = "Dhruva-Protha-Chakra Yantra";

const BASE_RADIUS: Meters = Meters(3.0);
const POLAR_AXIS_LENGTH: Meters = Meters(5.0);
const OUTER_RING_RADIUS: Meters = Meters(2.5);
const INNER_RING_RADIUS: Meters = Meters(1.5);
const RING_THICKNESS: Meters = Meters(0.2);
const SIGHT_TUBE_LENGTH: Meters = Meters(1.0);
const SIGHT_TUBE_DIAMETER: Meters = Meters(0.05);

/// Two arc-minutes
const PRECISION: Degrees = Degrees(2.0 / 60.0);

const MATERIALS: &[&str] = &[
    "Bronze or brass (for rings)",
    "Steel (for polar axis)",
    "Stone base platform",
];

const NOTES: &str = "Dhruva Yantra is inclined at the local latitude to align with the celestial pole. \
The polar axis must point directly at Polaris (Dhruva). \
Used for precise determination of true north. \
Essential for aligning other yantras correctly. \
Requires adjustment for precession over centuries.";

/// Compute the Dhruva Yantra for a latitude and scale.
pub fn calculate(latitude: f64, scale: f64) -> YantraSpec {
    let pole_angle = Degrees(latitude);
    let base_radius = BASE_RADIUS * scale;

    YantraSpec::builder(NAME, "Polar alignment and north-finding instrument")
        .length("base_radius", base_radius)
        .length("polar_axis_length", POLAR_AXIS_LENGTH * scale)
        .length("outer_ring_radius", OUTER_RING_RADIUS * scale)
        .length("inner_ring_radius", INNER_RING_RADIUS * scale)
        .length("ring_thickness", RING_THICKNESS * scale)
        .length("sight_tube_length", SIGHT_TUBE_LENGTH * scale)
        .length("sight_tube_diameter", SIGHT_TUBE_DIAMETER * scale)
        .length("base_diameter", base_radius * 2.0)
        .angle("pole_inclination_angle", pole_angle)
        .angle("latitude_alignment", pole_angle)
        .angle("polar_axis_zenith_angle", Degrees(90.0) - pole_angle.abs())
        .angle("precision_angle", PRECISION)
        .materials(MATERIALS)
        .notes(NOTES)
        .build()
}
