use std::fmt;
use serde::Serialize;

/// A named physical constant with its value, description and unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    name: String,
    value: f64,
    description: String,
    units: String,
}

impl Constant {
    /// Creates a constant measured in the generic unit `"units"`.
    pub fn new(name: &str, value: f64, description: &str) -> Self {
        Self::with_units(name, value, description, "units")
    }

    /// Creates a constant with an explicit unit.
    /// # Example
    /// ```
    /// use rs_mechanics::utils::Constant;
    ///
    /// let c = Constant::with_units("c", 3.0e8, "Speed Of Light", "m/s");
    /// assert_eq!(c.value(), 3.0e8);
    /// assert_eq!(c.units(), "m/s");
    /// ```
    pub fn with_units(name: &str, value: f64, description: &str, units: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            description: description.to_string(),
            units: units.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    /// The help block describing this constant, as printed by the demo.
    pub fn show_help(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[ CONSTANT ]")?;
        writeln!(f, "Lookup: registry.get(\"{}\")", self.name)?;
        writeln!(f, "Default: {} {}", self.value, self.units)?;
        write!(f, "Description: {}", self.description)
    }
}

/// An ordered collection of [`Constant`]s, looked up by name.
///
/// Nothing is built or printed until the caller asks for it.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: Vec<Constant>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The speed of light and the gravitational constant.
    /// # Example
    /// ```
    /// use rs_mechanics::utils::ConstantRegistry;
    ///
    /// let registry = ConstantRegistry::standard();
    /// assert_eq!(registry.get("G").unwrap().units(), "m^3/(kg*s^2)");
    /// ```
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert(Constant::with_units("c", 3.0e8, "Speed Of Light", "m/s"));
        registry.insert(Constant::with_units("G", 6.67e-11, "Gravitational Constant", "m^3/(kg*s^2)"));
        registry
    }

    /// Adds a constant, replacing any existing constant with the same name.
    pub fn insert(&mut self, constant: Constant) {
        match self.constants.iter_mut().find(|c| c.name == constant.name) {
            Some(existing) => *existing = constant,
            None => self.constants.push(constant),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constant> {
        self.constants.iter()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Help blocks of every constant, separated by blank lines.
    pub fn describe_all(&self) -> String {
        self.constants.iter()
            .map(Constant::show_help)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
