// src/motion/rolling.rs

use std::fmt;
use log::{error, info};
use serde::Serialize;
use crate::errors::PhysicsError;
use crate::models::CircularObject;
use crate::utils::{DEFAULT_FRICTION_COEFFICIENT, DEFAULT_ROLLING_VELOCITY, MIN_DIVISION_THRESHOLD};

/// Optional inputs of [`CircularObject::rolling`].
///
/// `velocity` defaults to 10 m/s and `friction_coefficient` to 0.1. `gravity` falls
/// back to the body's gravity when it is `None` or zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RollingArgs {
    pub velocity: Option<f64>,
    pub friction_coefficient: Option<f64>,
    pub gravity: Option<f64>,
}

/// How far and how long the body rolls before friction stops it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingResult {
    pub distance: f64,
    #[serde(rename = "t")]
    pub time_to_stop: f64,
    #[serde(skip)]
    pub velocity: f64,
    #[serde(skip)]
    pub friction_coefficient: f64,
    #[serde(skip)]
    pub gravity: f64,
}

impl RollingArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_friction_coefficient(mut self, friction_coefficient: f64) -> Self {
        self.friction_coefficient = Some(friction_coefficient);
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = Some(gravity);
        self
    }
}

impl CircularObject {
    /// Stopping distance and time of the body rolling against friction.
    ///
    /// # Errors
    /// Returns `PhysicsError::DivisionByZero` when the friction coefficient (or the
    /// resolved gravity) is zero.
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::models::CircularObject;
    /// use rs_mechanics::motion::RollingArgs;
    ///
    /// let mut body = CircularObject::default();
    /// let result = body.rolling(RollingArgs::new().with_velocity(4.0)).unwrap();
    /// assert!((result.distance - 12.232).abs() < 1e-3);
    /// assert!((result.time_to_stop - 6.116).abs() < 1e-3);
    /// ```
    pub fn rolling(&mut self, args: RollingArgs) -> Result<RollingResult, PhysicsError> {
        self.derive_inertia();

        let velocity = args.velocity.unwrap_or(DEFAULT_ROLLING_VELOCITY);
        let friction_coefficient = args.friction_coefficient.unwrap_or(DEFAULT_FRICTION_COEFFICIENT);
        let gravity = args.gravity.filter(|g| *g != 0.0).unwrap_or(self.gravity());

        let resistance = friction_coefficient * gravity;
        if resistance.abs() < MIN_DIVISION_THRESHOLD {
            error!("Error calculating rolling: friction coefficient {} and gravity {} give no resistance", friction_coefficient, gravity);
            return Err(PhysicsError::DivisionByZero);
        }

        let radial = self.radial_coefficient();
        let distance = radial * (velocity * velocity) / resistance;
        let time_to_stop = 2.0 * radial * velocity / resistance;

        let result = RollingResult {
            distance,
            time_to_stop,
            velocity,
            friction_coefficient,
            gravity,
        };
        info!("\n{}", result);
        Ok(result)
    }
}

impl fmt::Display for RollingResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[ SETUP ]")?;
        writeln!(f, "Velocity: {}", self.velocity)?;
        writeln!(f, "Friction Coefficient (µ): {}", self.friction_coefficient)?;
        writeln!(f, "Gravity: {}", self.gravity)?;
        writeln!(f)?;
        writeln!(f, "[ RESULTS ]")?;
        writeln!(f, "Stopping Distance: {}", self.distance)?;
        write!(f, "Stopping Time: {}", self.time_to_stop)
    }
}
