use log::warn;
use serde::Serialize;
use crate::errors::PhysicsError;
use crate::utils::{print_json, BodyConfig};

/// Moment-of-inertia coefficient pair for a rolling body's shape class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InertiaCoefficients {
    /// Scales `g·h` in the energy balance of a body rolling down a slope.
    pub moment: f64,
    /// Scales the rolling-friction stopping distance and time.
    pub radial: f64,
}

impl InertiaCoefficients {
    pub const DISK: InertiaCoefficients = InertiaCoefficients { moment: 4.0 / 3.0, radial: 3.0 / 4.0 };
    pub const SPHERE: InertiaCoefficients = InertiaCoefficients { moment: 10.0 / 7.0, radial: 7.0 / 2.0 };

    /// Coefficients for a dimensionality flag, `None` for anything other than 2 or 3.
    /// # Example
    /// ```
    /// use rs_mechanics::models::InertiaCoefficients;
    ///
    /// assert_eq!(InertiaCoefficients::for_dimensions(3), Some(InertiaCoefficients::SPHERE));
    /// assert_eq!(InertiaCoefficients::for_dimensions(4), None);
    /// ```
    pub fn for_dimensions(dimensions: u8) -> Option<Self> {
        match dimensions {
            2 => Some(Self::DISK),
            3 => Some(Self::SPHERE),
            _ => None,
        }
    }
}

/// A rolling rigid body: a disk or ring (`dimensions == 2`) or a sphere (`dimensions == 3`).
///
/// The inertia coefficients are derived from `dimensions` when the body is built and
/// again at the start of every calculation, so changing the dimensionality between
/// calls takes effect on the next one.
///
/// The physical fields are only set through [`CircularObject::new`], so they stay validated:
/// ```compile_fail
/// let mut body = rs_mechanics::models::CircularObject::default();
/// body.gravity = -9.81;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircularObject {
    mass: f64,
    gravity: f64,
    initial_velocity: f64,
    radius: f64,
    dimensions: u8,
    inertia: InertiaCoefficients,
}

impl Default for CircularObject {
    /// A 100 kg disk of radius 1 m moving at 1 m/s under 9.81 m/s² gravity.
    fn default() -> Self {
        let config = BodyConfig::default();
        let dimensions = config.dimensions();
        CircularObject {
            mass: config.mass(),
            gravity: config.gravity(),
            initial_velocity: config.initial_velocity(),
            radius: config.radius(),
            dimensions,
            inertia: InertiaCoefficients::DISK,
        }
    }
}

impl CircularObject {
    /// Builds a body from a configuration, filling unset fields with defaults.
    ///
    /// # Errors
    /// * `InvalidMass`, `InvalidGravity`, `InvalidRadius` if the value is not finite and positive.
    /// * `InvalidDimensions` if the dimensionality is neither 2 nor 3, since a new body has no
    ///   previous coefficients to fall back on.
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::models::CircularObject;
    /// use rs_mechanics::utils::BodyConfig;
    ///
    /// let body = CircularObject::new(BodyConfig::default().with_mass(1.0)).unwrap();
    /// assert_eq!(body.mass(), 1.0);
    /// assert_eq!(body.gravity(), 9.81);
    ///
    /// assert!(CircularObject::new(BodyConfig::default().with_mass(-1.0)).is_err());
    /// ```
    pub fn new(config: BodyConfig) -> Result<Self, PhysicsError> {
        let mass = config.mass();
        let gravity = config.gravity();
        let radius = config.radius();
        let dimensions = config.dimensions();
        if !(mass.is_finite() && mass > 0.0) { return Err(PhysicsError::InvalidMass); }
        if !(gravity.is_finite() && gravity > 0.0) { return Err(PhysicsError::InvalidGravity); }
        if !(radius.is_finite() && radius > 0.0) { return Err(PhysicsError::InvalidRadius); }
        let inertia = InertiaCoefficients::for_dimensions(dimensions)
            .ok_or(PhysicsError::InvalidDimensions(dimensions))?;

        Ok(CircularObject {
            mass,
            gravity,
            initial_velocity: config.initial_velocity(),
            radius,
            dimensions,
            inertia,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn dimensions(&self) -> u8 {
        self.dimensions
    }

    /// Changes the dimensionality flag. The coefficients follow on the next derivation.
    pub fn set_dimensions(&mut self, dimensions: u8) {
        self.dimensions = dimensions;
    }

    pub fn inertia(&self) -> InertiaCoefficients {
        self.inertia
    }

    pub fn moment_coefficient(&self) -> f64 {
        self.inertia.moment
    }

    pub fn radial_coefficient(&self) -> f64 {
        self.inertia.radial
    }

    /// Re-derives the inertia coefficients from the dimensionality flag.
    ///
    /// An unsupported flag keeps whatever coefficients the body already had.
    pub fn derive_inertia(&mut self) {
        match InertiaCoefficients::for_dimensions(self.dimensions) {
            Some(inertia) => self.inertia = inertia,
            None => warn!(
                "Unsupported dimensions ({}). Keeping moment of inertia coefficients ({}, {})",
                self.dimensions, self.inertia.moment, self.inertia.radial
            ),
        }
    }

    /// Prints the body's current state as indented JSON.
    pub fn show_current_data(&self) -> Result<(), PhysicsError> {
        print_json(self)
    }
}
