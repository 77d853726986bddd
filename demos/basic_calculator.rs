// demos/basic_calculator.rs

use rs_mechanics::models::CircularObject;
use rs_mechanics::motion::{InclinedPlaneArgs, ProjectileArgs, RollingArgs};
use rs_mechanics::utils::{print_json, BodyConfig, ConstantRegistry};
use rs_mechanics::PhysicsError;

fn main() -> Result<(), PhysicsError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let constants = ConstantRegistry::standard();
    println!("{}\n", constants.describe_all());

    let mut body = CircularObject::new(BodyConfig::default().with_mass(1.0))?;
    body.show_current_data()?;

    // Every input omitted: five warnings, then the defaults are used
    let slope = body.inclined_plane(InclinedPlaneArgs::default())?;
    print_json(&slope)?;

    let flight = body.projectile(&ProjectileArgs::polar(15f64.to_radians(), 20.0).with_height(10.0))?;
    println!("{}\n", flight);
    print_json(&flight)?;

    let roll = body.rolling(RollingArgs::new().with_velocity(4.0))?;
    println!("{}\n", roll);
    print_json(&roll)?;

    Ok(())
}
