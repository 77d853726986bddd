mod circular_object;

pub use circular_object::*;
