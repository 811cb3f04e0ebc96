pub mod manifest;
pub mod protocol;
