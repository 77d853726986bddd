mod inclined_plane;
mod projectile;
mod rolling;

pub use inclined_plane::*;
pub use projectile::*;
pub use rolling::*;

#[cfg(test)]
mod projectile_tests;
#[cfg(test)]
mod rolling_tests;
