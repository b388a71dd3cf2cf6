use image::{imageops, GrayImage, RgbImage};

/// Perceptual grayscale of `img`, the decoder's input.
pub fn luminance(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}
