use nalgebra::Vector2;

use crate::constants::{DisplayUnit, Meter, Seconds, Years, SECONDS_PER_YEAR};

/// Convert a raw position from meters to display units.
///
/// Arguments
/// ---------
/// * `raw`: a 2D position in meters
/// * `meters_per_unit`: the conversion constant (meters per display unit)
///
/// Return
/// ----------
/// * The same position expressed in display units. The conversion is linear and
///   applies no clipping or rounding beyond floating-point precision.
#[inline]
pub(crate) fn meters_to_display(
    raw: Vector2<Meter>,
    meters_per_unit: f64,
) -> Vector2<DisplayUnit> {
    raw / meters_per_unit
}

/// Convert a simulation timestamp from seconds to years for the time readout.
#[inline]
pub(crate) fn seconds_to_years(t: Seconds) -> Years {
    t / SECONDS_PER_YEAR
}
