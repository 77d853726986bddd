// src/motion/projectile.rs

use std::fmt;
use log::{error, info};
use serde::Serialize;
use crate::errors::PhysicsError;
use crate::models::CircularObject;
use crate::utils::{all_in_list, MIN_DIVISION_THRESHOLD};

const POLAR_KEYS: [&str; 2] = ["theta", "v"];
const COMPONENT_KEYS: [&str; 2] = ["vx", "vy"];
const HEIGHT_KEY: &str = "h";

/// Named launch parameters for [`CircularObject::projectile`].
///
/// Keys are matched case-insensitively. A launch needs either `theta` (radians) and
/// `v`, or the velocity components `vx` and `vy`; `h` sets the launch height and
/// defaults to 0. When a key is given twice the last value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileArgs {
    entries: Vec<(String, f64)>,
}

/// A launch resolved from [`ProjectileArgs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSetup {
    pub theta: f64,
    pub speed: f64,
    pub vx: f64,
    pub vy: f64,
    pub height: f64,
}

/// Flight of a projectile launched from height `h`.
///
/// Serializes as `{"t", "hmax", "xmax"}`. The launch setup, the time to reach the
/// peak and the impact velocity are kept for the summary only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileResult {
    #[serde(rename = "t")]
    pub airtime: f64,
    #[serde(rename = "hmax")]
    pub max_height: f64,
    #[serde(rename = "xmax")]
    pub max_range: f64,
    #[serde(skip)]
    pub peak_time: f64,
    #[serde(skip)]
    pub impact_velocity: f64,
    #[serde(skip)]
    pub setup: LaunchSetup,
}

impl ProjectileArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch at angle `theta` (radians) with speed `v`.
    pub fn polar(theta: f64, v: f64) -> Self {
        Self::new().with("theta", theta).with("v", v)
    }

    /// Launch with horizontal and vertical velocity components.
    pub fn components(vx: f64, vy: f64) -> Self {
        Self::new().with("vx", vx).with("vy", vy)
    }

    pub fn with_height(self, h: f64) -> Self {
        self.with(HEIGHT_KEY, h)
    }

    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: f64) {
        self.entries.push((key.to_string(), value));
    }

    /// The arguments exactly as supplied, in order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter()
            .rev()
            .find(|(k, _)| k.to_lowercase() == key)
            .map(|(_, v)| *v)
    }

    /// Resolves the launch angle, speed, components and height.
    ///
    /// # Errors
    /// * `PhysicsError::InvalidArgumentSet` if neither `theta`/`v` nor `vx`/`vy` is complete.
    /// * `PhysicsError::DivisionByZero` if the angle has to be derived from a zero `vx`.
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::motion::ProjectileArgs;
    ///
    /// let launch = ProjectileArgs::components(3.0, 4.0).launch().unwrap();
    /// assert_eq!(launch.speed, 5.0);
    /// assert_eq!(launch.height, 0.0);
    ///
    /// assert!(ProjectileArgs::new().with("h", 3.0).launch().is_err());
    /// ```
    pub fn launch(&self) -> Result<LaunchSetup, PhysicsError> {
        let keys: Vec<String> = self.entries.iter().map(|(k, _)| k.to_lowercase()).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        let height = self.get(HEIGHT_KEY).unwrap_or(0.0);

        match (self.get("theta"), self.get("v"), self.get("vx"), self.get("vy")) {
            (Some(theta), Some(speed), _, _) if all_in_list(&POLAR_KEYS, &keys) => Ok(LaunchSetup {
                theta,
                speed,
                vx: speed * theta.cos(),
                vy: speed * theta.sin(),
                height,
            }),
            (_, _, Some(vx), Some(vy)) if all_in_list(&COMPONENT_KEYS, &keys) => {
                if vx.abs() < MIN_DIVISION_THRESHOLD {
                    return Err(PhysicsError::DivisionByZero);
                }
                Ok(LaunchSetup {
                    theta: (vy / vx).atan(),
                    speed: (vx * vx + vy * vy).sqrt(),
                    vx,
                    vy,
                    height,
                })
            }
            _ => Err(PhysicsError::InvalidArgumentSet { supplied: self.entries.clone() }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ProjectileArgs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl CircularObject {
    /// Throws the body into the air under its configured gravity.
    ///
    /// # Errors
    /// * `PhysicsError::InvalidArgumentSet` listing the supplied arguments when neither
    ///   required pair is present.
    /// * `PhysicsError::DivisionByZero` for a zero `vx` or a body without gravity.
    /// * `PhysicsError::InvalidHeight` when the launch height lies below the lowest point
    ///   the flight can reach (the landing time would be imaginary).
    ///
    /// # Example
    /// ```
    /// use rs_mechanics::models::CircularObject;
    /// use rs_mechanics::motion::ProjectileArgs;
    ///
    /// let mut body = CircularObject::default();
    /// let result = body.projectile(&ProjectileArgs::polar(15f64.to_radians(), 20.0).with_height(10.0)).unwrap();
    /// assert!(result.max_height > 10.0);
    /// assert!(result.airtime > 0.0);
    /// ```
    pub fn projectile(&mut self, args: &ProjectileArgs) -> Result<ProjectileResult, PhysicsError> {
        self.derive_inertia();

        let setup = args.launch().map_err(|e| {
            error!("Error resolving projectile launch: {}", e);
            e
        })?;
        let g = self.gravity();
        if g.abs() < MIN_DIVISION_THRESHOLD {
            error!("Error calculating projectile: body has no gravity");
            return Err(PhysicsError::DivisionByZero);
        }

        let LaunchSetup { theta, speed: v, height: h, .. } = setup;
        let sin = theta.sin();
        let cos = theta.cos();

        // Launching below the depth the body can fall back to leaves no real landing time
        let discriminant = v * v * sin * sin + 2.0 * g * h;
        let max_height = (v * v * sin * sin) / (2.0 * g) + h;
        if discriminant < 0.0 || max_height < 0.0 {
            error!("Error calculating projectile: launch height {} never reaches the ground", h);
            return Err(PhysicsError::InvalidHeight);
        }

        let airtime = (v * sin + discriminant.sqrt()) / g;
        let max_range = v * cos * airtime;
        let peak_time = v * sin / g;
        let impact_velocity = (2.0 * g * max_height).sqrt();

        let result = ProjectileResult {
            airtime,
            max_height,
            max_range,
            peak_time,
            impact_velocity,
            setup,
        };
        info!("\n{}", result);
        Ok(result)
    }
}

impl fmt::Display for ProjectileResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = &self.setup;
        writeln!(f, "[ SETUP ]")?;
        writeln!(f, "Velocity: {} < {:.2}, {:.2} >", s.speed, s.vx, s.vy)?;
        writeln!(f, "Launch Angle (θ): {:.2} rad ( {}° )", s.theta, s.theta.to_degrees().round())?;
        writeln!(f, "Height: {}", s.height)?;
        writeln!(f)?;
        writeln!(f, "[ RESULTS ]")?;
        writeln!(f, "Air Time: {}", self.airtime)?;
        writeln!(f, "Max Height: {} ( At {:.3}s )", self.max_height, self.peak_time)?;
        writeln!(f, "Horizontal Displacement: {}", self.max_range)?;
        write!(f, "Impact Velocity: {}", self.impact_velocity)
    }
}
