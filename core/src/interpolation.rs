//! Traits and implementations related to interpolation of animatable values.

/// Trait for a type that supports the standard `lerp` (**l**inear int**erp**olation) operation.
///
/// `Lerp` assumes a normalized `x` value, such that _x0_ = 0 and _x1_ = 1, which reduces the
/// equation to:
///
/// `lerp(y0, y1, x) = y0 + x(y1 - y0)`
///
/// Every animated property of the loading indicator is an `f32`, but the trait is kept generic so
/// that a [`Tween`](crate::tween::Tween) can carry any value a host binding wants to drive.
pub trait Lerp {
    /// Computes the linear interpolation between this value (`y0`) and a second (`y1`) value of the
    /// same type, at normalized (from 0 to 1) position `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use tumble_core::interpolation::Lerp;
    ///
    /// let y0: f32 = 80.0;
    /// let y1: f32 = 0.0;
    ///
    /// assert_eq!(y0.lerp(&y1, 0.0), 80.0);
    /// assert_eq!(y0.lerp(&y1, 0.25), 60.0);
    /// assert_eq!(y0.lerp(&y1, 1.0), 0.0);
    /// ```
    fn lerp(&self, y1: &Self, x: f32) -> Self;
}

// `tb + (1 - t)a` rather than `a + t(b - a)`: the endpoints come out exact at t = 0 and t = 1,
// which matters because finished phases must land precisely on their target values.

impl Lerp for f32 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        self * (1.0 - x) + y1 * x
    }
}

impl Lerp for f64 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        let x = x as f64;
        self * (1.0 - x) + y1 * x
    }
}
