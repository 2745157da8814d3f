//! Typed property tweens: what a scheduled animation writes, and how.

use crate::easing::{Easing, EasingFunction};
use crate::interpolation::Lerp;
use crate::shape::{ShadowElement, ShapeElement};

/// Interpolates a value between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<V: Lerp> {
    /// Value at normalized time `0.0`.
    pub from: V,
    /// Value at normalized time `1.0`.
    pub to: V,
}

impl<V: Lerp> Tween<V> {
    /// Creates a tween from `from` to `to`.
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }

    /// Computes the value at normalized time `t`, after applying `easing` to it.
    pub fn value_at(&self, t: f32, easing: &Easing) -> V {
        self.from.lerp(&self.to, easing.calc(t))
    }
}

/// The pair of visual elements that the loading cycle animates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stage {
    /// The falling, morphing shape.
    pub shape: ShapeElement,
    /// The shadow beneath the shape.
    pub shadow: ShadowElement,
}

/// Which element a [`Property`] belongs to. Used when clearing animations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Shape,
    Shadow,
}

/// An animatable numeric field of the [`Stage`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Property {
    /// Vertical offset of the shape, in pixels. Positive is downward.
    ShapeOffsetY,
    /// Rotation of the shape, in degrees.
    ShapeRotation,
    /// Horizontal scale of the shadow.
    ShadowScaleX,
}

impl Property {
    /// The element that owns this property.
    pub fn target(&self) -> Target {
        match self {
            Self::ShapeOffsetY | Self::ShapeRotation => Target::Shape,
            Self::ShadowScaleX => Target::Shadow,
        }
    }

    /// Writes `value` to the field of `stage` that this property names.
    pub fn apply(&self, stage: &mut Stage, value: f32) {
        match self {
            Self::ShapeOffsetY => stage.shape.set_offset_y(value),
            Self::ShapeRotation => stage.shape.set_rotation_deg(value),
            Self::ShadowScaleX => stage.shadow.set_scale_x(value),
        }
    }
}

/// A single animated property within an [`Animation`](crate::scheduler::Animation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub tween: Tween<f32>,
}

impl Track {
    pub fn new(property: Property, from: f32, to: f32) -> Self {
        Self {
            property,
            tween: Tween::new(from, to),
        }
    }

    /// Writes the eased value at normalized time `t` into `stage`.
    pub fn update(&self, stage: &mut Stage, t: f32, easing: &Easing) {
        self.property.apply(stage, self.tween.value_at(t, easing));
    }
}
