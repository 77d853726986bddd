use std::f64::consts::FRAC_PI_4;

/// Mass assumed for a body when none is configured (kg).
pub const DEFAULT_MASS: f64 = 100.0;

/// Gravitational acceleration assumed for a body when none is configured (m/s²).
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Initial velocity assumed for a body when none is configured (m/s).
pub const DEFAULT_INITIAL_VELOCITY: f64 = 1.0;

/// Radius assumed for a body when none is configured (m).
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Dimensionality assumed for a body when none is configured (2 = disk, 3 = sphere).
pub const DEFAULT_DIMENSIONS: u8 = 2;

/// Slope height assumed by the inclined plane when none is supplied (m).
pub const DEFAULT_SLOPE_HEIGHT: f64 = 5.0;

/// Slope angle assumed by the inclined plane when none is supplied (rad).
pub const DEFAULT_SLOPE_ANGLE: f64 = FRAC_PI_4;

/// Friction coefficient assumed by the inclined plane and rolling calculations.
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.1;

/// Launch speed assumed by the rolling calculation (m/s).
pub const DEFAULT_ROLLING_VELOCITY: f64 = 10.0;

/// Magnitudes below this are treated as zero before dividing by them.
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;

