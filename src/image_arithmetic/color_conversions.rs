use image::{GrayImage, Luma, Rgb, RgbImage};

// ITU-R BT.601 weights (0.299, 0.587, 0.114) in 14-bit fixed point.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

pub fn luma_bt601(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    return ((weighted + (1 << (SHIFT - 1))) >> SHIFT) as u8;
}

pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    return GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([luma_bt601(img.get_pixel(x, y))])
    });
}

pub fn gray_to_rgb(img: &GrayImage) -> RgbImage {
    return RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let value = img.get_pixel(x, y).0[0];
        Rgb([value, value, value])
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_use_bt601_weights() {
        assert_eq!(luma_bt601(&Rgb([255, 0, 0])), 76);
        assert_eq!(luma_bt601(&Rgb([0, 255, 0])), 150);
        assert_eq!(luma_bt601(&Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn neutral_colors_keep_their_value() {
        for value in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(luma_bt601(&Rgb([value, value, value])), value);
        }
    }

    #[test]
    fn grayscale_preserves_dimensions() {
        let img = RgbImage::from_pixel(7, 3, Rgb([10, 200, 30]));
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray_to_rgb(&gray).get_pixel(6, 2), &Rgb([124, 124, 124]));
    }
}
