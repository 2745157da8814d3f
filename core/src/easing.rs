//! Contains the [`Easing`] enum which defines the easing curves available to the loading cycle,
//! as well as an [`EasingFunction`] trait for defining custom easings.

use dyn_clone::{clone_trait_object, DynClone};
use lazy_static::lazy_static;
use std::fmt::Debug;

/// Provides an easing function, AKA animation timing function, for non-linear interpolation of
/// values along some curve.
///
/// Easing functions and [`Lerp`](crate::interpolation::Lerp) are complementary. `Lerp` determines
/// the value of a property at a normalized position `x`, and `EasingFunction` decides which `x`
/// the lerp will see for a given fraction of elapsed time.
pub trait EasingFunction: Debug + DynClone {
    /// Computes the `y` value along the curve for a given `x` position.
    ///
    /// Expects `x` to be normalized (from 0 to 1) and returns a normalized y-value which is
    /// typically between 0 and 1.
    fn calc(&self, x: f32) -> f32;
}

clone_trait_object!(EasingFunction);

/// Specifies a standard or custom [`EasingFunction`].
#[derive(Clone, Debug, Default)]
pub enum Easing {
    /// Linear easing, i.e. no easing or curve, only straight-line interpolation.
    #[default]
    Linear,
    /// Quadratic curve that starts slowly and keeps speeding up (`y = x²`). Used for falling.
    Accelerate,
    /// Quadratic curve that starts quickly and slows to a stop (`y = 1 - (1 - x)²`). Used for
    /// rising and rotating.
    Decelerate,
    /// User-defined easing, such as a [`PowerEasing`] with a steeper factor.
    Custom(Box<dyn EasingFunction>),
}

impl EasingFunction for Easing {
    fn calc(&self, x: f32) -> f32 {
        match self {
            Self::Linear => EASE_LINEAR.calc(x),
            Self::Accelerate => EASE_ACCELERATE.calc(x),
            Self::Decelerate => EASE_DECELERATE.calc(x),
            Self::Custom(custom) => custom.calc(x),
        }
    }
}

lazy_static! {
    static ref EASE_LINEAR: LinearEasing = LinearEasing;
    static ref EASE_ACCELERATE: PowerEasing = PowerEasing::accelerate(1.0);
    static ref EASE_DECELERATE: PowerEasing = PowerEasing::decelerate(1.0);
}

/// Linear easing which returns the `x` value as the `y` result. Has the same behavior as
/// [Easing::Linear] or [Easing::default].
#[derive(Clone, Debug)]
pub struct LinearEasing;

impl EasingFunction for LinearEasing {
    fn calc(&self, x: f32) -> f32 {
        x
    }
}

/// Polynomial easing with a configurable factor.
///
/// An accelerating curve computes `x^(2 * factor)`. A decelerating curve mirrors it, computing
/// `1 - (1 - x)^(2 * factor)`. A factor of `1.0` gives the plain quadratic curves used by
/// [`Easing::Accelerate`] and [`Easing::Decelerate`].
#[derive(Clone, Debug)]
pub struct PowerEasing {
    exponent: f32,
    decelerate: bool,
}

impl PowerEasing {
    /// Creates a curve that starts slowly and speeds up.
    pub fn accelerate(factor: f32) -> Self {
        Self {
            exponent: 2.0 * factor,
            decelerate: false,
        }
    }

    /// Creates a curve that starts quickly and slows down.
    pub fn decelerate(factor: f32) -> Self {
        Self {
            exponent: 2.0 * factor,
            decelerate: true,
        }
    }
}

impl EasingFunction for PowerEasing {
    fn calc(&self, x: f32) -> f32 {
        if self.decelerate {
            1.0 - (1.0 - x).powf(self.exponent)
        } else {
            x.powf(self.exponent)
        }
    }
}
