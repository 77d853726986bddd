use std::fmt;
use std::error::Error;

/// Represents errors that can occur during mechanics calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid mass value (e.g., negative or zero mass).
    InvalidMass,
    /// Indicates an invalid gravitational acceleration (e.g., negative or zero gravity).
    InvalidGravity,
    /// Indicates an invalid radius value (e.g., negative or zero radius).
    InvalidRadius,
    /// Indicates a launch height from which a projectile cannot land (no real flight time).
    InvalidHeight,
    /// Indicates a dimensionality flag other than 2 (disk) or 3 (sphere).
    InvalidDimensions(u8),
    /// Indicates a division by zero error.
    DivisionByZero,
    /// Indicates that a projectile was requested without one of its required argument pairs.
    InvalidArgumentSet { supplied: Vec<(String, f64)> },
    /// Indicates that a value of the wrong type was handed to the JSON printer.
    InvalidType { found: String },
    /// Indicates a body configuration that could not be parsed or carried unknown keys.
    InvalidConfiguration(String),
    /// Indicates that a value could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidGravity => write!(f, "Invalid gravity value"),
            PhysicsError::InvalidRadius => write!(f, "Invalid radius value"),
            PhysicsError::InvalidHeight => write!(f, "Invalid height value"),
            PhysicsError::InvalidDimensions(d) => write!(f, "Invalid dimensions value: {} (expected 2 or 3)", d),
            PhysicsError::DivisionByZero => write!(f, "Division by zero"),
            PhysicsError::InvalidArgumentSet { supplied } => {
                writeln!(f, "You must run projectile with either set of arguments:")?;
                writeln!(f, "(1) theta, v")?;
                writeln!(f, "(2) vx, vy")?;
                write!(f, "You ran with the arguments:")?;
                if supplied.is_empty() {
                    write!(f, " (none)")?;
                }
                for (index, (key, value)) in supplied.iter().enumerate() {
                    write!(f, "\n( Index {} ) {} = {}", index, key, value)?;
                }
                Ok(())
            }
            PhysicsError::InvalidType { found } => write!(f, "Incorrect input type for \"data\": \"{}\"", found),
            PhysicsError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            PhysicsError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for PhysicsError {}
