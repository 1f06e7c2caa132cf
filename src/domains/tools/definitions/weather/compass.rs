//! Bearing to compass point conversion.

/// The 16 compass points, clockwise from due north.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

/// Map a bearing in degrees to its compass point.
///
/// Uses `round(bearing / 22.5) mod 16` with ties rounded to even, so 11.25°
/// is `N` and 33.75° is `NE`. Negative bearings and bearings past 360° wrap.
/// Non-finite input maps to `N`.
pub fn compass_point(bearing: f64) -> &'static str {
    if !bearing.is_finite() {
        return COMPASS_POINTS[0];
    }
    let index = (bearing / SECTOR_DEGREES).round_ties_even() as i64;
    COMPASS_POINTS[index.rem_euclid(COMPASS_POINTS.len() as i64) as usize]
}
