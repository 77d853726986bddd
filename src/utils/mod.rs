mod constants;
mod constants_config;
mod json;
mod math_helpers;
mod physical_constants;

pub use constants::*;
pub use constants_config::*;
pub use json::*;
pub use math_helpers::*;
pub use physical_constants::*;
