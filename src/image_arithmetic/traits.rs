use image::GrayImage;

pub trait PlaneArithmetic: Sized {
    /// Rounds every response and clamps it into the 8-bit range.
    fn saturate(&self) -> GrayImage;
    /// Takes the absolute value of every response before saturating.
    fn abs_saturate(&self) -> GrayImage;
    fn max_abs(&self) -> f32;
}
