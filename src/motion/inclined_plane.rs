// src/motion/inclined_plane.rs

use std::fmt;
use log::{debug, error, warn};
use serde::Serialize;
use crate::errors::PhysicsError;
use crate::models::CircularObject;
use crate::utils::{
    signed_root,
    AngleTrig,
    DEFAULT_FRICTION_COEFFICIENT,
    DEFAULT_SLOPE_ANGLE,
    DEFAULT_SLOPE_HEIGHT,
    MIN_DIVISION_THRESHOLD,
};

/// Optional inputs of [`CircularObject::inclined_plane`].
///
/// A field that is `None` or zero is replaced by its default and reported with a
/// warning. The angle is also replaced when it is not a finite number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InclinedPlaneArgs {
    pub initial_velocity: Option<f64>,
    pub height: Option<f64>,
    pub gravity: Option<f64>,
    pub angle: Option<f64>,
    pub friction_coefficient: Option<f64>,
}

/// One of the inclined plane inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeParameter {
    InitialVelocity,
    Height,
    Gravity,
    Angle,
    FrictionCoefficient,
}

impl fmt::Display for SlopeParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SlopeParameter::InitialVelocity => write!(f, "Initial velocity (v_i)"),
            SlopeParameter::Height => write!(f, "Initial height (h)"),
            SlopeParameter::Gravity => write!(f, "System gravity (g)"),
            SlopeParameter::Angle => write!(f, "Plane angle (theta)"),
            SlopeParameter::FrictionCoefficient => write!(f, "Friction coefficient (mu)"),
        }
    }
}

/// Records that an input was missing and which value replaced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultedParameter {
    pub parameter: SlopeParameter,
    pub value: f64,
}

impl fmt::Display for DefaultedParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parameter {
            SlopeParameter::Angle => write!(
                f, "{} not supplied or invalid. Defaulting to {} rad ({}°)",
                self.parameter, self.value, self.value.to_degrees().round()
            ),
            _ => write!(f, "{} not supplied. Defaulting to {}", self.parameter, self.value),
        }
    }
}

/// Fully resolved inclined plane inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeParameters {
    pub initial_velocity: f64,
    pub height: f64,
    pub gravity: f64,
    pub angle: f64,
    pub friction_coefficient: f64,
}

/// Outcome of an inclined plane descent.
///
/// Only acceleration, final velocity and elapsed time are serialized. The friction
/// adjusted acceleration, the distance travelled and its share of the slope length
/// are kept for inspection and do not feed into the other results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InclinedPlaneResult {
    #[serde(rename = "Acceleration")]
    pub acceleration: f64,
    #[serde(rename = "Final Velocity")]
    pub final_velocity: f64,
    #[serde(rename = "Time Passed")]
    pub time_passed: f64,
    #[serde(skip)]
    pub friction_adjusted_acceleration: f64,
    #[serde(skip)]
    pub distance_travelled: f64,
    #[serde(skip)]
    pub percent_of_max_distance: f64,
}

impl InclinedPlaneArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = Some(initial_velocity);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_friction_coefficient(mut self, friction_coefficient: f64) -> Self {
        self.friction_coefficient = Some(friction_coefficient);
        self
    }

    /// Fills in missing inputs from the body and the slope defaults.
    ///
    /// Returns the resolved inputs together with one notice per substituted value,
    /// in the order initial velocity, height, gravity, angle, friction coefficient.
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::models::CircularObject;
    /// use rs_mechanics::motion::InclinedPlaneArgs;
    ///
    /// let body = CircularObject::default();
    /// let (slope, defaulted) = InclinedPlaneArgs::new().with_height(2.0).resolve(&body);
    /// assert_eq!(slope.height, 2.0);
    /// assert_eq!(slope.gravity, body.gravity());
    /// assert_eq!(defaulted.len(), 4);
    /// ```
    pub fn resolve(&self, body: &CircularObject) -> (SlopeParameters, Vec<DefaultedParameter>) {
        let mut defaulted = Vec::new();
        let mut pick = |parameter: SlopeParameter, supplied: Option<f64>, fallback: f64| -> f64 {
            match supplied {
                Some(value) => value,
                None => {
                    defaulted.push(DefaultedParameter { parameter, value: fallback });
                    fallback
                }
            }
        };

        let initial_velocity = pick(SlopeParameter::InitialVelocity, non_zero(self.initial_velocity), body.initial_velocity());
        let height = pick(SlopeParameter::Height, non_zero(self.height), DEFAULT_SLOPE_HEIGHT);
        let gravity = pick(SlopeParameter::Gravity, non_zero(self.gravity), body.gravity());
        let angle = pick(
            SlopeParameter::Angle,
            non_zero(self.angle).filter(|a| a.is_finite()),
            DEFAULT_SLOPE_ANGLE,
        );
        let friction_coefficient = pick(
            SlopeParameter::FrictionCoefficient,
            non_zero(self.friction_coefficient),
            DEFAULT_FRICTION_COEFFICIENT,
        );

        let slope = SlopeParameters { initial_velocity, height, gravity, angle, friction_coefficient };
        (slope, defaulted)
    }
}

/// Whole percentage of the slope covered; ties go to the even percentage.
pub(crate) fn percent_of_slope(distance: f64, max_distance: f64) -> f64 {
    (100.0 * distance / max_distance).round_ties_even()
}

/// Zero counts as "not supplied".
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl CircularObject {
    /// Kinematics of the body rolling down a slope, from an energy balance that
    /// includes its rotational inertia.
    ///
    /// Missing inputs are logged with `warn!` and defaulted (see [`InclinedPlaneArgs::resolve`]).
    ///
    /// # Errors
    /// Returns `PhysicsError::DivisionByZero` when the sine of the slope angle or the
    /// resulting acceleration is zero.
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::models::CircularObject;
    /// use rs_mechanics::motion::InclinedPlaneArgs;
    ///
    /// let mut body = CircularObject::default();
    /// let result = body.inclined_plane(InclinedPlaneArgs::new().with_initial_velocity(2.0)).unwrap();
    /// assert!(result.acceleration > 0.0);
    /// assert!(result.time_passed > 0.0);
    /// ```
    pub fn inclined_plane(&mut self, args: InclinedPlaneArgs) -> Result<InclinedPlaneResult, PhysicsError> {
        self.derive_inertia();

        let (slope, defaulted) = args.resolve(self);
        for notice in &defaulted {
            warn!("{}", notice);
        }
        let SlopeParameters { initial_velocity: v_i, height: h, gravity: g, angle, friction_coefficient: mu } = slope;
        let moment = self.moment_coefficient();

        let sin = angle.sin();
        if sin.abs() < MIN_DIVISION_THRESHOLD {
            error!("Error calculating inclined plane: slope angle {} has no incline", angle);
            return Err(PhysicsError::DivisionByZero);
        }

        let final_velocity = signed_root(v_i * v_i + moment * g * h);

        let acceleration = (moment * g * h * sin - v_i * v_i * sin) / (2.0 * h);
        if acceleration.abs() < MIN_DIVISION_THRESHOLD {
            error!("Error calculating inclined plane: acceleration resolved to zero");
            return Err(PhysicsError::DivisionByZero);
        }

        let friction_adjusted_acceleration = acceleration - mu * g * AngleTrig::new(angle).cot()?;

        let distance_travelled = (final_velocity * final_velocity - v_i * v_i) / (2.0 * acceleration);

        let max_distance = h / sin;
        let percent_of_max_distance = percent_of_slope(distance_travelled, max_distance);

        let time_passed = (-v_i + signed_root(2.0 * distance_travelled * acceleration + v_i * v_i)) / acceleration;

        debug!(
            "Inclined plane: friction adjusted acceleration {}, distance {} ({}% of slope)",
            friction_adjusted_acceleration, distance_travelled, percent_of_max_distance
        );

        Ok(InclinedPlaneResult {
            acceleration,
            final_velocity,
            time_passed,
            friction_adjusted_acceleration,
            distance_travelled,
            percent_of_max_distance,
        })
    }
}
