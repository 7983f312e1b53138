//! RGB colors used for the window background and grid lines

use rand::Rng;

/// 8-bit per channel color, stored in red/green/blue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from arbitrary integers, clamping each channel into 0..=255
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        let clamp = |value: i64| value.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Adds `step` to every channel, saturating at 255
    pub fn brighten(self, step: u8) -> Self {
        Self::new(
            self.r.saturating_add(step),
            self.g.saturating_add(step),
            self.b.saturating_add(step),
        )
    }

    /// Subtracts `step` from every channel, saturating at 0
    pub fn darken(self, step: u8) -> Self {
        Self::new(
            self.r.saturating_sub(step),
            self.g.saturating_sub(step),
            self.b.saturating_sub(step),
        )
    }

    /// Uniformly random color, each channel drawn independently
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        )
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn brighten_five_times_from_red() {
        let mut color = Rgb::RED;
        for _ in 0..5 {
            color = color.brighten(2);
        }
        assert_eq!(color, Rgb::new(255, 10, 10));
    }

    #[test]
    fn darken_saturates_at_zero() {
        let color = Rgb::new(3, 1, 0).darken(2);
        assert_eq!(color, Rgb::new(1, 0, 0));
        assert_eq!(Rgb::BLACK.darken(2), Rgb::BLACK);
    }

    #[test]
    fn brighten_saturates_at_max() {
        assert_eq!(Rgb::new(254, 253, 100).brighten(2), Rgb::new(255, 255, 102));
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(Rgb::from_channels(-5, 128, 900), Rgb::new(0, 128, 255));
    }

    #[test]
    fn random_is_reproducible_with_same_seed() {
        let first = Rgb::random(&mut StdRng::seed_from_u64(7));
        let second = Rgb::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn random_colors_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors: Vec<Rgb> = (0..16).map(|_| Rgb::random(&mut rng)).collect();
        assert!(colors.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
