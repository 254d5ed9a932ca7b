//! Gesture-driven strips: the endlessly looping autoplay carousel and the
//! bounded hold-and-drag scroller.
//!
//! Everything here is host independent. The browser binding feeds pointer
//! samples and frame timestamps in and applies the resulting offsets.

pub mod config;
pub mod error;
pub mod gesture;
pub mod looping;
pub mod scroller;
pub mod track;

pub use config::*;
pub use error::*;
pub use gesture::*;
pub use looping::*;
pub use scroller::*;
pub use track::*;
