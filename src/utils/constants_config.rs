// src/utils/constants_config.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::PhysicsError;
use crate::utils::{
    DEFAULT_DIMENSIONS,
    DEFAULT_GRAVITY,
    DEFAULT_INITIAL_VELOCITY,
    DEFAULT_MASS,
    DEFAULT_RADIUS,
};

/// Construction parameters for a [`CircularObject`](crate::models::CircularObject).
///
/// Every field is optional; `None` falls back to the matching `DEFAULT_*` constant.
/// The JSON form rejects keys it does not know about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodyConfig {
    pub mass: Option<f64>,
    pub gravity: Option<f64>,
    pub initial_velocity: Option<f64>,
    pub radius: Option<f64>,
    pub dimensions: Option<u8>,
}

impl BodyConfig {
    /// Creates a configuration from optional overrides.
    /// # Example
    /// ```
    /// use rs_mechanics::utils::BodyConfig;
    ///
    /// let config = BodyConfig::new(Some(1.0), None, None, None, Some(3));
    /// assert_eq!(config.mass(), 1.0);
    /// assert_eq!(config.gravity(), 9.81);
    /// assert_eq!(config.dimensions(), 3);
    /// ```
    pub fn new(
        mass: Option<f64>,
        gravity: Option<f64>,
        initial_velocity: Option<f64>,
        radius: Option<f64>,
        dimensions: Option<u8>,
    ) -> Self {
        Self { mass, gravity, initial_velocity, radius, dimensions }
    }

    /// Parses a configuration from a JSON object such as `{"mass": 1.0, "dimensions": 3}`.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidConfiguration` for malformed JSON, anything other
    /// than a JSON object, wrongly typed values or unrecognised keys.
    pub fn from_json_str(json: &str) -> Result<Self, PhysicsError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| PhysicsError::InvalidConfiguration(e.to_string()))?;
        // Derived struct deserialization also takes a positional array; only keyed objects are accepted
        if !value.is_object() {
            return Err(PhysicsError::InvalidConfiguration(
                "expected a JSON object of named body fields".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| PhysicsError::InvalidConfiguration(e.to_string()))
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = Some(initial_velocity);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_dimensions(mut self, dimensions: u8) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass.unwrap_or(DEFAULT_MASS)
    }

    pub fn gravity(&self) -> f64 {
        self.gravity.unwrap_or(DEFAULT_GRAVITY)
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity.unwrap_or(DEFAULT_INITIAL_VELOCITY)
    }

    pub fn radius(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_RADIUS)
    }

    pub fn dimensions(&self) -> u8 {
        self.dimensions.unwrap_or(DEFAULT_DIMENSIONS)
    }
}
