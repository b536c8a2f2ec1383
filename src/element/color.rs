//! Colors as the renderer sees them.

use core::fmt;

/// An ARGB color with components in `[0, 1]`.
///
/// `alpha` is transparency: 0 is opaque, 1 is invisible. This is the order
/// and meaning of gnuplot's `#AARRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub alpha: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Opaque color.
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Color { alpha: 0.0, red, green, blue }
    }

    pub const fn argb(alpha: f32, red: f32, green: f32, blue: f32) -> Self {
        Color { alpha, red, green, blue }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            let byte = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
            Some(f32::from(byte) / 255.0)
        };
        match hex.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::argb(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue].map(to_byte)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// `#AARRGGBB`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, r, g, b] = self.to_bytes();
        write!(f, "#{a:02x}{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_argb_hex() {
        #[cfg(feature = "alloc")]
        {
            use alloc::string::ToString;
            assert_eq!(Color::BLACK.to_string(), "#00000000");
            assert_eq!(Color::argb(1.0, 1.0, 0.0, 0.5).to_string(), "#ffff0080");
        }
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00000000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("#xyz"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("+f+f+f"), None);
        assert_eq!(Color::from_hex("#+fffffff"), None);
    }
}
