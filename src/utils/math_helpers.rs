use crate::errors::PhysicsError;
use crate::utils::MIN_DIVISION_THRESHOLD;

/// Square root that keeps the sign of its argument.
///
/// Negative inputs return the negated root of their magnitude instead of `NaN`.
///
/// # Example
/// ```
/// use rs_mechanics::utils::signed_root;
///
/// assert_eq!(signed_root(64.0), 8.0);
/// assert_eq!(signed_root(-64.0), -8.0);
/// assert_eq!(signed_root(0.0), 0.0);
/// ```
#[inline]
pub fn signed_root(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    x.signum() * x.abs().sqrt()
}

/// Returns `true` when every element of `items` appears somewhere in `list`.
///
/// An empty `items` is trivially contained in any list.
///
/// # Example
/// ```
/// use rs_mechanics::utils::all_in_list;
///
/// assert!(!all_in_list(&[1, 2, 3, 4], &[2, 3, 4]));
/// assert!(all_in_list(&[1, 2, 3, 4], &[75, 3, 22, 1, 25, 2, 6, 4]));
/// ```
pub fn all_in_list<T: PartialEq>(items: &[T], list: &[T]) -> bool {
    items.iter().all(|item| list.contains(item))
}

/// Reciprocal trigonometric functions of a fixed angle (radians).
///
/// Each reciprocal returns `PhysicsError::DivisionByZero` when the underlying
/// tangent, sine or cosine is smaller in magnitude than `MIN_DIVISION_THRESHOLD`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTrig {
    pub angle: f64,
}

impl AngleTrig {
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Cotangent, `1 / tan(angle)`.
    /// # Example
    /// ```
    /// use rs_mechanics::utils::AngleTrig;
    ///
    /// let cot = AngleTrig::new(std::f64::consts::FRAC_PI_4).cot().unwrap();
    /// assert!((cot - 1.0).abs() < 1e-12);
    /// assert!(AngleTrig::new(0.0).cot().is_err());
    /// ```
    pub fn cot(&self) -> Result<f64, PhysicsError> {
        reciprocal(self.angle.tan())
    }

    /// Cosecant, `1 / sin(angle)`.
    pub fn csc(&self) -> Result<f64, PhysicsError> {
        reciprocal(self.angle.sin())
    }

    /// Secant, `1 / cos(angle)`.
    pub fn sec(&self) -> Result<f64, PhysicsError> {
        reciprocal(self.angle.cos())
    }
}

#[inline]
fn reciprocal(value: f64) -> Result<f64, PhysicsError> {
    if value.abs() < MIN_DIVISION_THRESHOLD {
        return Err(PhysicsError::DivisionByZero);
    }
    Ok(1.0 / value)
}
