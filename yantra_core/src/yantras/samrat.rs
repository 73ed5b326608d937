//! # Samrat Yantra
//!
//! The "supreme instrument": a giant equatorial sundial. A triangular gnomon
//! wall rises toward the celestial pole and casts its shadow onto two
//! quadrant scales, one on each side, from which local solar time is read.
//!
//! ## Geometry
//!
//! The gnomon's hypotenuse must be parallel to Earth's axis, so the gnomon is
//! inclined at the local latitude. With gnomon height `h = 27.4 m · scale`
//! (the Jaipur instrument) and tilt `φ = |latitude|`:
//!
//! ```text
//! hypotenuse      = h / sin φ
//! base            = h / tan φ
//! quadrant_radius = hypotenuse
//! total_length    = base + 2 · quadrant_radius
//! total_width     = 2 · quadrant_radius
//! ```
//!
//! At the equator `sin φ = tan φ = 0` and the gnomon would lie flat with
//! infinite length; [`calculate`] reports [`CalcError::GeometryUndefined`]
//! for any |latitude| below [`EQUATOR_TOLERANCE_DEG`].

use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Meters, Radians};
use crate::yantras::YantraSpec;

pub const NAME: &str = "Samrat Yantra";

/// Gnomon height at scale 1 (the Jaipur Samrat Yantra)
pub const GNOMON_HEIGHT: Meters = Meters(27.4);

const WALL_THICKNESS: Meters = Meters(0.6);
const SCALE_WIDTH: Meters = Meters(3.0);

const HOUR_MARKINGS: u32 = 24;
const MINUTE_MARKINGS: u32 = 24 * 60;

const HOUR_STEP: Degrees = Degrees(15.0);
const MINUTE_STEP: Degrees = Degrees(0.25);

/// Latitudes closer to the equator than this are rejected
pub const EQUATOR_TOLERANCE_DEG: f64 = 1e-9;

const MATERIALS: &[&str] = &[
    "Red sandstone (traditional)",
    "Marble (for precision surfaces)",
    "Metal inlays (for fine markings)",
    "Concrete (modern alternative)",
];

const NOTES: &str = "The Samrat Yantra must be precisely aligned to true north. \
The gnomon wall is inclined at the local latitude so its edge is parallel to Earth's axis. \
Time accuracy can reach ±20 seconds when properly constructed. \
The instrument works by casting shadows on the curved quadrant scales. \
Local solar time can be read directly from shadow position.";

/// Compute the Samrat Yantra for a latitude and scale.
///
/// # Errors
///
/// [`CalcError::GeometryUndefined`] at the equator.
pub fn calculate(latitude: f64, scale: f64) -> CalcResult<YantraSpec> {
    if latitude.abs() < EQUATOR_TOLERANCE_DEG {
        return Err(CalcError::geometry_undefined(
            NAME,
            latitude,
            "gnomon would lie flat at the equator (sin and tan of latitude are zero)",
        ));
    }

    let gnomon_angle = Degrees(latitude);
    let tilt: Radians = gnomon_angle.abs().into();

    let gnomon_height = GNOMON_HEIGHT * scale;
    let gnomon_hypotenuse = gnomon_height / tilt.sin();
    let gnomon_base = gnomon_height / tilt.tan();
    let quadrant_radius = gnomon_hypotenuse;

    Ok(YantraSpec::builder(NAME, "Giant sundial and primary timekeeping instrument")
        .length("gnomon_height", gnomon_height)
        .length("gnomon_hypotenuse", gnomon_hypotenuse)
        .length("gnomon_base", gnomon_base)
        .length("quadrant_radius", quadrant_radius)
        .length("wall_thickness", WALL_THICKNESS * scale)
        .length("total_length", gnomon_base + quadrant_radius * 2.0)
        .length("total_width", quadrant_radius * 2.0)
        .length("scale_width", SCALE_WIDTH * scale)
        .count("hour_markings_count", HOUR_MARKINGS)
        .count("minute_markings_count", MINUTE_MARKINGS)
        .angle("gnomon_angle", gnomon_angle)
        .angle("gnomon_inclination", gnomon_angle)
        .angle("latitude_alignment", gnomon_angle)
        .angle("meridian_orientation", Degrees(0.0))
        .angle("hour_step_angle", HOUR_STEP)
        .angle("minute_step_angle", MINUTE_STEP)
        .materials(MATERIALS)
        .notes(NOTES)
        .build())
}
