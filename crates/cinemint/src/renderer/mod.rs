pub mod camera;
pub mod instance;

// Re-export key types for convenient access
pub use camera::{Camera3D, CameraUniform};
pub use instance::{GlowInstance, LabelInstance, ModelInstance, RenderBuffer, SphereInstance};
