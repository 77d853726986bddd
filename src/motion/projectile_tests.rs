use approx::assert_relative_eq;
use crate::assert_float_eq;
use crate::errors::PhysicsError;
use crate::models::{CircularObject, InertiaCoefficients};
use crate::motion::ProjectileArgs;
use crate::utils::BodyConfig;

fn unit_body() -> CircularObject {
    CircularObject::new(BodyConfig::default().with_mass(1.0)).unwrap()
}

#[test]
fn test_projectile_from_angle_and_speed() {
    let mut body = unit_body();
    let args = ProjectileArgs::polar(15f64.to_radians(), 20.0).with_height(10.0);
    let result = body.projectile(&args).unwrap();

    assert!(result.max_height > 10.0, "Max height should exceed the launch height");
    assert!(result.airtime > 0.0);
    assert_relative_eq!(result.impact_velocity.powi(2), 2.0 * 9.81 * result.max_height, epsilon = 1e-9);

    let vy = 20.0 * 15f64.to_radians().sin();
    let vx = 20.0 * 15f64.to_radians().cos();
    let airtime = (vy + (vy * vy + 2.0 * 9.81 * 10.0).sqrt()) / 9.81;
    assert_relative_eq!(result.airtime, airtime, epsilon = 1e-10);
    assert_relative_eq!(result.max_range, vx * airtime, epsilon = 1e-10);
    assert_relative_eq!(result.max_height, vy * vy / (2.0 * 9.81) + 10.0, epsilon = 1e-10);
    assert_relative_eq!(result.peak_time, vy / 9.81, epsilon = 1e-10);
}

#[test]
fn test_projectile_from_components_matches_polar() {
    let mut body = unit_body();
    let theta = 0.6_f64;
    let polar = body.projectile(&ProjectileArgs::polar(theta, 12.0)).unwrap();
    let components = body.projectile(&ProjectileArgs::components(12.0 * theta.cos(), 12.0 * theta.sin())).unwrap();

    assert_relative_eq!(components.setup.theta, theta, epsilon = 1e-12);
    assert_relative_eq!(components.setup.speed, 12.0, epsilon = 1e-12);
    assert_relative_eq!(components.airtime, polar.airtime, epsilon = 1e-10);
    assert_relative_eq!(components.max_range, polar.max_range, epsilon = 1e-10);
    assert_relative_eq!(components.max_height, polar.max_height, epsilon = 1e-10);
}

#[test]
fn test_projectile_ground_launch() {
    let mut body = unit_body();
    let result = body.projectile(&ProjectileArgs::polar(std::f64::consts::FRAC_PI_4, 10.0)).unwrap();
    // Symmetric flight from the ground: twice the time to the peak, range v²/g at 45°
    assert_relative_eq!(result.airtime, 2.0 * result.peak_time, epsilon = 1e-10);
    assert_relative_eq!(result.max_range, 100.0 / 9.81, epsilon = 1e-9);
    assert_float_eq(result.setup.height, 0.0, 1e-12, None);
}

#[test]
fn test_projectile_keys_are_case_insensitive() {
    let mut body = unit_body();
    let args: ProjectileArgs = vec![("THETA", 0.3), ("V", 15.0), ("H", 2.0)].into_iter().collect();
    let result = body.projectile(&args).unwrap();
    let expected = body.projectile(&ProjectileArgs::polar(0.3, 15.0).with_height(2.0)).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_projectile_prefers_angle_and_speed() {
    let mut body = unit_body();
    let args = ProjectileArgs::polar(0.5, 10.0).with("vx", 1.0).with("vy", 1.0);
    let result = body.projectile(&args).unwrap();
    assert_float_eq(result.setup.speed, 10.0, 1e-12, None);
    assert_float_eq(result.setup.theta, 0.5, 1e-12, None);
}

#[test]
fn test_projectile_last_duplicate_key_wins() {
    let args = ProjectileArgs::polar(0.5, 10.0).with("V", 20.0);
    let launch = args.launch().unwrap();
    assert_float_eq(launch.speed, 20.0, 1e-12, None);
}

#[test]
fn test_projectile_height_only_fails_listing_the_argument() {
    let mut body = unit_body();
    let args = ProjectileArgs::new().with("h", 3.0);
    match body.projectile(&args) {
        Err(PhysicsError::InvalidArgumentSet { supplied }) => {
            assert_eq!(supplied, vec![("h".to_string(), 3.0)]);
        }
        other => panic!("Expected InvalidArgumentSet, got {:?}", other),
    }

    let message = args.launch().unwrap_err().to_string();
    assert!(message.contains("( Index 0 ) h = 3"));
    assert!(!message.contains("( Index 1 )"));
}

#[test]
fn test_projectile_incomplete_pairs_fail() {
    let args = ProjectileArgs::new().with("theta", 0.4).with("vy", 3.0);
    assert!(matches!(args.launch(), Err(PhysicsError::InvalidArgumentSet { .. })));
    assert!(matches!(ProjectileArgs::new().launch(), Err(PhysicsError::InvalidArgumentSet { .. })));
}

#[test]
fn test_projectile_zero_horizontal_component_fails() {
    let mut body = unit_body();
    let result = body.projectile(&ProjectileArgs::components(0.0, 5.0));
    assert_eq!(result, Err(PhysicsError::DivisionByZero));
}

#[test]
fn test_projectile_uses_body_gravity() {
    let mut moon = CircularObject::new(BodyConfig::default().with_gravity(1.62)).unwrap();
    let result = moon.projectile(&ProjectileArgs::polar(0.7, 10.0)).unwrap();
    assert_relative_eq!(result.peak_time, 10.0 * 0.7_f64.sin() / 1.62, epsilon = 1e-10);
}

#[test]
fn test_projectile_serializes_public_results_only() {
    let mut body = unit_body();
    let result = body.projectile(&ProjectileArgs::polar(0.3, 5.0)).unwrap();
    let value = serde_json::to_value(result).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["t", "hmax", "xmax"]);
}

#[test]
fn test_projectile_summary() {
    let mut body = unit_body();
    let result = body.projectile(&ProjectileArgs::polar(15f64.to_radians(), 20.0).with_height(10.0)).unwrap();
    let summary = result.to_string();
    assert!(summary.starts_with("[ SETUP ]"));
    assert!(summary.contains("Launch Angle (θ): 0.26 rad ( 15° )"));
    assert!(summary.contains("Height: 10"));
    assert!(summary.contains("[ RESULTS ]"));
}

#[test]
fn test_projectile_below_reachable_depth_fails() {
    let mut body = unit_body();
    let result = body.projectile(&ProjectileArgs::polar(0.0, 1.0).with_height(-10.0));
    assert_eq!(result, Err(PhysicsError::InvalidHeight));

    // vy = 10 rises 100/(2g) ≈ 5.1 m, so starting 3 m down still lands
    let result = body.projectile(&ProjectileArgs::components(1.0, 10.0).with_height(-3.0)).unwrap();
    assert!(result.airtime > 0.0);
    assert!(result.max_height > 0.0);
    assert!(!result.impact_velocity.is_nan());
}

#[test]
fn test_projectile_rederives_inertia() {
    let mut body = unit_body();
    body.set_dimensions(3);
    body.projectile(&ProjectileArgs::polar(0.4, 8.0)).unwrap();
    assert_eq!(body.inertia(), InertiaCoefficients::SPHERE);
}
