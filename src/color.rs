//! Color and pixel output

use glam::Vec3A;

pub use glam::Vec3A as Color;

pub mod colors {
    pub const WHITE: super::Color = super::Vec3A::ONE;
    pub const BLACK: super::Color = super::Vec3A::ZERO;
    pub const SKY_BLUE: super::Color = super::Vec3A::from_array([0.5, 0.7, 1.0]);
}

// conversion for sdr pixels
pub trait VecExt<P: image::Pixel> {
    fn to_pixel(self) -> P;
}

impl VecExt<image::Rgb<u8>> for Vec3A {
    /// Gamma-corrects (gamma 2) and quantizes a linear color into 8-bit channels.
    ///
    /// Each channel maps to `256 * clamp(sqrt(c), 0, 0.999)`, so 1.0 lands on 255.
    /// NaN channels end up as 0.
    fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb::<u8>(
            self.to_array()
                .map(|channel| (256.0 * channel.sqrt().clamp(0.0, 0.999)) as u8),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_and_quantize() {
        let px: image::Rgb<u8> = Color::new(1.0, 0.25, 0.0).to_pixel();
        assert_eq!(px.0, [255, 128, 0]);
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let px: image::Rgb<u8> = Color::new(4.0, -1.0, f32::NAN).to_pixel();
        assert_eq!(px.0, [255, 0, 0]);
    }
}
