use thiserror::Error;

/// Reasons a menu configuration can be rejected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse menu config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("menu needs at least one item")]
    NoItems,

    #[error("exit item {index} is out of range for {len} items")]
    ExitOutOfRange { index: usize, len: usize },

    #[error("{field} must be in (0, 1], got {value}")]
    FactorOutOfRange { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} range is inverted: [{min}, {max}]")]
    EmptyRange { field: &'static str, min: f32, max: f32 },
}
