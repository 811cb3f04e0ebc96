use serde::{Deserialize, Serialize};

/// 8-bit RGBA color, the tint format the host renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const DARK_GRAY: Rgba = Rgba::new(80, 80, 80, 255);
    pub const LIGHT_GRAY: Rgba = Rgba::new(200, 200, 200, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const DARK_BLUE: Rgba = Rgba::new(0, 82, 172, 255);
    pub const GOLD: Rgba = Rgba::new(255, 203, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels as 0.0–1.0 floats, in r, g, b, a order.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Build a color from float channels in 0–255 space, rounding and clamping each.
    pub fn from_unclamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }
}

/// Round a 0–255 float channel to the nearest representable byte.
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Rgba::DARK_GRAY.with_alpha(0);
        assert_eq!((c.r, c.g, c.b, c.a), (80, 80, 80, 0));
    }

    #[test]
    fn from_unclamped_saturates() {
        let c = Rgba::from_unclamped(-12.0, 300.0, 127.6, 0.4);
        assert_eq!(c, Rgba::new(0, 255, 128, 0));
    }

    #[test]
    fn to_f32_normalizes() {
        let [r, g, b, a] = Rgba::WHITE.to_f32();
        assert_eq!((r, g, b, a), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn deserializes_from_object() {
        let c: Rgba = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":4}"#).unwrap();
        assert_eq!(c, Rgba::new(1, 2, 3, 4));
    }
}
