pub mod background;
pub mod idle;
pub mod intro;
pub mod navigation;
pub mod particles;
pub mod render;
pub mod rng;
