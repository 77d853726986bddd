use crate::assert_float_eq;
use crate::errors::PhysicsError;
use crate::models::CircularObject;
use crate::motion::RollingArgs;
use crate::utils::BodyConfig;

fn unit_body() -> CircularObject {
    CircularObject::new(BodyConfig::default().with_mass(1.0)).unwrap()
}

#[test]
fn test_rolling_with_default_friction_and_gravity() {
    let mut body = unit_body();
    let result = body.rolling(RollingArgs::new().with_velocity(4.0)).unwrap();
    assert_float_eq(result.distance, 0.75 * 16.0 / 0.981, 1e-9, Some("Stopping distance"));
    assert_float_eq(result.time_to_stop, 2.0 * 0.75 * 4.0 / 0.981, 1e-9, Some("Stopping time"));
    assert_float_eq(result.distance, 12.232, 1e-3, None);
    assert_float_eq(result.time_to_stop, 6.116, 1e-3, None);
}

#[test]
fn test_rolling_default_velocity() {
    let mut body = unit_body();
    let result = body.rolling(RollingArgs::default()).unwrap();
    assert_float_eq(result.velocity, 10.0, 1e-12, None);
    assert_float_eq(result.distance, 0.75 * 100.0 / 0.981, 1e-9, None);
}

#[test]
fn test_rolling_zero_gravity_falls_back_to_body() {
    let mut body = unit_body();
    let result = body.rolling(RollingArgs::new().with_gravity(0.0)).unwrap();
    assert_float_eq(result.gravity, 9.81, 1e-12, None);

    let result = body.rolling(RollingArgs::new().with_gravity(3.71)).unwrap();
    assert_float_eq(result.gravity, 3.71, 1e-12, None);
}

#[test]
fn test_rolling_sphere_uses_radial_coefficient() {
    let mut body = unit_body();
    body.set_dimensions(3);
    let result = body.rolling(RollingArgs::new().with_velocity(2.0).with_friction_coefficient(0.5)).unwrap();
    let resistance = 0.5 * 9.81;
    assert_float_eq(result.distance, 3.5 * 4.0 / resistance, 1e-9, None);
    assert_float_eq(result.time_to_stop, 2.0 * 3.5 * 2.0 / resistance, 1e-9, None);
}

#[test]
fn test_rolling_zero_friction_fails() {
    let mut body = unit_body();
    let result = body.rolling(RollingArgs::new().with_friction_coefficient(0.0));
    assert_eq!(result, Err(PhysicsError::DivisionByZero));
}

#[test]
fn test_rolling_serializes_distance_and_time() {
    let mut body = unit_body();
    let result = body.rolling(RollingArgs::new().with_velocity(4.0)).unwrap();
    let value = serde_json::to_value(result).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["distance", "t"]);
    assert!(result.to_string().contains("Stopping Distance:"));
}
