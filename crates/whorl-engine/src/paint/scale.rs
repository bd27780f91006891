use super::{Color24, Rgb};

/// Color gradient capability: maps a scalar in [0, 1] to an RGB triple.
///
/// Channels are floats in the 0..255 domain and may be fractional or slightly
/// out of range; callers floor and clamp when packing (`Color24::pack`).
pub trait ColorScale {
    fn sample(&self, t: f32) -> Rgb;
}

impl<F> ColorScale for F
where
    F: Fn(f32) -> Rgb,
{
    fn sample(&self, t: f32) -> Rgb {
        self(t)
    }
}

/// Palette gradient interpolated in CIE LCh space.
///
/// Stops are spaced evenly over [0, 1]. Lightness and chroma interpolate
/// linearly; hue takes the shortest arc, and an achromatic endpoint adopts
/// the hue of its partner so grays do not drag the arc through red.
#[derive(Debug, Clone)]
pub struct LchScale {
    /// Stops as (L, C, h-degrees); hue is NaN for achromatic stops.
    stops: Vec<[f32; 3]>,
}

impl LchScale {
    /// Builds a scale from at least two palette entries.
    pub fn new(palette: &[Color24]) -> Self {
        debug_assert!(palette.len() >= 2, "LchScale needs at least two stops");
        Self {
            stops: palette.iter().map(|&c| rgb_to_lch(c.to_rgb())).collect(),
        }
    }

    /// Samples the scale; `t` is clamped to [0, 1].
    pub fn sample_clamped(&self, t: f32) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = self.stops.len() - 1;
        let pos = t * segments as f32;
        let i = (pos.floor() as usize).min(segments - 1);
        let frac = pos - i as f32;
        lch_to_rgb(lerp_lch(self.stops[i], self.stops[i + 1], frac))
    }
}

impl ColorScale for LchScale {
    fn sample(&self, t: f32) -> Rgb {
        self.sample_clamped(t)
    }
}

// CIE constants, D65 reference white.
const EPS: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;
const WHITE: [f32; 3] = [0.950470, 1.0, 1.088830];

/// Chroma below this is treated as achromatic (hue undefined).
const ACHROMATIC_C: f32 = 1e-4;

fn lerp_lch(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let l = a[0] + (b[0] - a[0]) * t;
    let c = a[1] + (b[1] - a[1]) * t;

    let h = match (a[2].is_nan(), b[2].is_nan()) {
        (true, true) => f32::NAN,
        (true, false) => b[2],
        (false, true) => a[2],
        (false, false) => {
            // Shortest arc around the hue circle.
            let d = (b[2] - a[2] + 540.0).rem_euclid(360.0) - 180.0;
            (a[2] + t * d).rem_euclid(360.0)
        }
    };

    [l, c, h]
}

fn rgb_to_lch(rgb: Rgb) -> [f32; 3] {
    let [l, a, b] = rgb_to_lab(rgb);
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_C {
        f32::NAN
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    };
    [l, c, h]
}

fn lch_to_rgb(lch: [f32; 3]) -> Rgb {
    let [l, c, h] = lch;
    let (a, b) = if h.is_nan() {
        (0.0, 0.0)
    } else {
        let rad = h.to_radians();
        (c * rad.cos(), c * rad.sin())
    };
    lab_to_rgb([l, a, b])
}

fn rgb_to_lab(rgb: Rgb) -> [f32; 3] {
    let r = srgb_to_linear(rgb.r / 255.0);
    let g = srgb_to_linear(rgb.g / 255.0);
    let b = srgb_to_linear(rgb.b / 255.0);

    let x = (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / WHITE[0];
    let y = (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / WHITE[1];
    let z = (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / WHITE[2];

    let fx = lab_f(x);
    let fy = lab_f(y);
    let fz = lab_f(z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_rgb(lab: [f32; 3]) -> Rgb {
    let [l, a, b] = lab;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = lab_f_inv(fx) * WHITE[0];
    let y = if l > KAPPA * EPS {
        fy * fy * fy
    } else {
        l / KAPPA
    } * WHITE[1];
    let z = lab_f_inv(fz) * WHITE[2];

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let bl = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Rgb::new(
        linear_to_srgb(r) * 255.0,
        linear_to_srgb(g) * 255.0,
        linear_to_srgb(bl) * 255.0,
    )
}

fn lab_f(t: f32) -> f32 {
    if t > EPS {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f32) -> f32 {
    let cubed = f * f * f;
    if cubed > EPS {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.abs().powf(1.0 / 2.4) * c.signum() - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [Color24; 4] = [
        Color24(0x0F694D),
        Color24(0x520CC2),
        Color24(0xD8C026),
        Color24(0x14F7E2),
    ];

    fn assert_rgb_close(a: Rgb, b: Rgb, tol: f32) {
        assert!(
            (a.r - b.r).abs() <= tol && (a.g - b.g).abs() <= tol && (a.b - b.b).abs() <= tol,
            "{a:?} !~ {b:?}"
        );
    }

    #[test]
    fn lab_roundtrip_preserves_palette_colors() {
        for &c in &PALETTE {
            let rgb = c.to_rgb();
            assert_rgb_close(lab_to_rgb(rgb_to_lab(rgb)), rgb, 0.5);
        }
    }

    #[test]
    fn scale_endpoints_hit_first_and_last_stops() {
        let scale = LchScale::new(&PALETTE);
        assert_rgb_close(scale.sample(0.0), PALETTE[0].to_rgb(), 0.5);
        assert_rgb_close(scale.sample(1.0), PALETTE[3].to_rgb(), 0.5);
    }

    #[test]
    fn scale_hits_interior_stops_at_even_spacing() {
        let scale = LchScale::new(&PALETTE);
        // Four stops: interior stops sit at t = 1/3 and 2/3.
        assert_rgb_close(scale.sample(1.0 / 3.0), PALETTE[1].to_rgb(), 0.6);
        assert_rgb_close(scale.sample(2.0 / 3.0), PALETTE[2].to_rgb(), 0.6);
    }

    #[test]
    fn scale_clamps_out_of_domain_inputs() {
        let scale = LchScale::new(&PALETTE);
        assert_eq!(
            Color24::pack(scale.sample(-0.5)),
            Color24::pack(scale.sample(0.0))
        );
        assert_eq!(
            Color24::pack(scale.sample(2.0)),
            Color24::pack(scale.sample(1.0))
        );
    }

    #[test]
    fn achromatic_endpoint_adopts_partner_hue() {
        // Black has no hue; the midpoint must not swing through an arbitrary arc.
        let scale = LchScale::new(&[Color24::BLACK, Color24(0x14F7E2)]);
        let mid = scale.sample(0.5);
        assert!(mid.is_finite());
        // Cyan-ish target: green and blue channels dominate red.
        assert!(mid.g > mid.r && mid.b > mid.r, "{mid:?}");
    }

    #[test]
    fn closure_implements_color_scale() {
        let flat = |_t: f32| Rgb::new(10.0, 20.0, 30.0);
        assert_eq!(Color24::pack(flat.sample(0.7)), Color24::from_rgb8(10, 20, 30));
    }
}
