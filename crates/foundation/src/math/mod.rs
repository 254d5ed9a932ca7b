pub mod easing;
pub mod resist;
pub mod wrap;

pub use easing::*;
pub use resist::*;
pub use wrap::*;
