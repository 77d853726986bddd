// rs_mechanics_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the mechanics library.

use wasm_bindgen::prelude::*;
use js_sys::{Object, Reflect};
use rs_mechanics::models::CircularObject;
use rs_mechanics::motion::{InclinedPlaneArgs, ProjectileArgs, RollingArgs};
use rs_mechanics::utils::BodyConfig;
use rs_mechanics::PhysicsError;

fn to_js_error(e: PhysicsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js_object(entries: &[(&str, f64)]) -> Result<JsValue, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_f64(*value))?;
    }
    Ok(object.into())
}

#[wasm_bindgen]
pub struct WasmBody(CircularObject);

#[wasm_bindgen]
impl WasmBody {
    #[wasm_bindgen(constructor)]
    pub fn new(
        mass: Option<f64>,
        gravity: Option<f64>,
        initial_velocity: Option<f64>,
        radius: Option<f64>,
        dimensions: Option<u8>,
    ) -> Result<WasmBody, JsValue> {
        let config = BodyConfig::new(mass, gravity, initial_velocity, radius, dimensions);
        CircularObject::new(config)
            .map(WasmBody)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmBody, JsValue> {
        let config = BodyConfig::from_json_str(json).map_err(to_js_error)?;
        CircularObject::new(config)
            .map(WasmBody)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn mass(&self) -> f64 {
        self.0.mass()
    }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f64 {
        self.0.gravity()
    }

    #[wasm_bindgen(getter)]
    pub fn dimensions(&self) -> u8 {
        self.0.dimensions()
    }

    #[wasm_bindgen(setter)]
    pub fn set_dimensions(&mut self, dimensions: u8) {
        self.0.set_dimensions(dimensions);
    }

    /// Returns `{ "Acceleration", "Final Velocity", "Time Passed" }`.
    #[wasm_bindgen(js_name = inclinedPlane)]
    pub fn inclined_plane(
        &mut self,
        initial_velocity: Option<f64>,
        height: Option<f64>,
        gravity: Option<f64>,
        angle: Option<f64>,
        friction_coefficient: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let args = InclinedPlaneArgs { initial_velocity, height, gravity, angle, friction_coefficient };
        let result = self.0.inclined_plane(args).map_err(to_js_error)?;
        to_js_object(&[
            ("Acceleration", result.acceleration),
            ("Final Velocity", result.final_velocity),
            ("Time Passed", result.time_passed),
        ])
    }

    /// `keys` and `values` are paired by index, e.g. `["theta", "v", "h"]` with `[0.26, 20, 10]`.
    /// Returns `{ t, hmax, xmax }` and logs the flight summary to the console.
    pub fn projectile(&mut self, keys: Vec<String>, values: Vec<f64>) -> Result<JsValue, JsValue> {
        if keys.len() != values.len() {
            return Err(JsValue::from_str("keys and values must have the same length"));
        }
        let args: ProjectileArgs = keys.into_iter().zip(values).collect();
        let result = self.0.projectile(&args).map_err(to_js_error)?;
        web_sys::console::log_1(&JsValue::from_str(&result.to_string()));
        to_js_object(&[
            ("t", result.airtime),
            ("hmax", result.max_height),
            ("xmax", result.max_range),
        ])
    }

    /// Returns `{ distance, t }` and logs the rolling summary to the console.
    pub fn rolling(
        &mut self,
        velocity: Option<f64>,
        friction_coefficient: Option<f64>,
        gravity: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let args = RollingArgs { velocity, friction_coefficient, gravity };
        let result = self.0.rolling(args).map_err(to_js_error)?;
        web_sys::console::log_1(&JsValue::from_str(&result.to_string()));
        to_js_object(&[
            ("distance", result.distance),
            ("t", result.time_to_stop),
        ])
    }
}
