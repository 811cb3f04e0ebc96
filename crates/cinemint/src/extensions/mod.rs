// extensions/mod.rs
//
// Math helpers layered on top of the core types.

pub mod easing;

pub use easing::{Easing, lerp, lerp_vec3, lerp_color, ease_vec3};
