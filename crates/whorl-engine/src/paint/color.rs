/// RGB triple with float channels in the 0..255 domain.
///
/// This is the raw output of a color scale: channels may be fractional and
/// may stray slightly outside [0, 255] (perceptual interpolation can leave
/// the sRGB gamut). Packing into [`Color24`] floors and clamps.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

/// Packed 24-bit color, `0xRRGGBB`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color24(pub u32);

impl Color24 {
    pub const BLACK: Color24 = Color24(0x000000);
    pub const WHITE: Color24 = Color24(0xFFFFFF);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packs a float triple by flooring each channel and clamping to [0, 255].
    ///
    /// Out-of-range and fractional channels are discarded silently; scales are
    /// trusted to stay near the byte range.
    #[inline]
    pub fn pack(rgb: Rgb) -> Self {
        let ch = |v: f32| v.floor().clamp(0.0, 255.0) as u32;
        Self((ch(rgb.r) << 16) | (ch(rgb.g) << 8) | ch(rgb.b))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Unpacks into the float channel domain.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(self.r() as f32, self.g() as f32, self.b() as f32)
    }

    /// Parses `"#RRGGBB"` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_floors_fractional_channels() {
        let c = Color24::pack(Rgb::new(15.9, 105.2, 77.0));
        assert_eq!(c, Color24::from_rgb8(15, 105, 77));
    }

    #[test]
    fn pack_clamps_out_of_range_channels() {
        let c = Color24::pack(Rgb::new(-3.0, 260.0, 128.0));
        assert_eq!(c, Color24::from_rgb8(0, 255, 128));
    }

    #[test]
    fn channel_accessors_match_packing() {
        let c = Color24::from_rgb8(0x0F, 0x69, 0x4D);
        assert_eq!((c.r(), c.g(), c.b()), (0x0F, 0x69, 0x4D));
        assert_eq!(c.0, 0x0F694D);
    }

    #[test]
    fn from_hex_accepts_with_and_without_hash() {
        assert_eq!(Color24::from_hex("#520CC2"), Some(Color24(0x520CC2)));
        assert_eq!(Color24::from_hex("520CC2"), Some(Color24(0x520CC2)));
        assert_eq!(Color24::from_hex("#52"), None);
        assert_eq!(Color24::from_hex("nothex"), None);
    }
}
