/// 8-bit RGBA colour as understood by display toolkits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK:       Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE:       Self = Self::rgb(0xff, 0xff, 0xff);
    pub const CYAN:        Self = Self::rgb(0x00, 0xe5, 0xff); // #00e5ff

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Build an opaque colour from a packed `0xRRGGBB` value.  Bits above the
    /// low 24 are ignored.
    pub const fn from_rgb_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Pack the RGB channels as `0xRRGGBB`.
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a hex colour string: `#RRGGBB`, `#RRGGBBAA`, or the same digits
    /// with a `0x` prefix.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        if !hex.is_ascii() {
            return None;
        }
        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::rgb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }
}
