//! The shape and shadow elements animated by the loading cycle.

use enum_map::Enum;
use lyon_geom::{point, Point};

/// One of the three shapes the indicator morphs between.
///
/// Shapes follow a fixed cycle: `Circle → Square → Triangle → Circle`.
#[derive(Clone, Copy, Debug, Default, Enum, Eq, Hash, PartialEq)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// The shape that follows this one in the cycle.
    pub fn next(self) -> Self {
        Self::from_usize((self.into_usize() + 1) % Self::LENGTH)
    }
}

/// Geometry of a [`Shape`] laid out in a square box, ready for a host to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Circle { center: Point<f32>, radius: f32 },
    /// Closed polygon; the last vertex connects back to the first.
    Polygon(Vec<Point<f32>>),
}

impl Outline {
    /// Computes the outline of `shape` inside a `size` × `size` box whose top-left corner is the
    /// origin.
    ///
    /// The circle and square fill the box. The triangle is equilateral with its apex at the top
    /// center, so its base sits at `size * sqrt(3) / 2` rather than at the bottom edge.
    pub fn of(shape: Shape, size: f32) -> Self {
        match shape {
            Shape::Circle => {
                let radius = size / 2.0;
                Self::Circle {
                    center: point(radius, radius),
                    radius,
                }
            }
            Shape::Square => Self::Polygon(vec![
                point(0.0, 0.0),
                point(size, 0.0),
                point(size, size),
                point(0.0, size),
            ]),
            Shape::Triangle => {
                let base_y = size * 3f32.sqrt() / 2.0;
                Self::Polygon(vec![
                    point(size / 2.0, 0.0),
                    point(0.0, base_y),
                    point(size, base_y),
                ])
            }
        }
    }
}

/// The morphing shape: which [`Shape`] is showing, plus its animated transform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeElement {
    shape: Shape,
    offset_y: f32,
    rotation_deg: f32,
    needs_redraw: bool,
}

impl ShapeElement {
    /// Creates an element showing `shape` with an identity transform.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }

    /// Gets the shape currently showing.
    pub fn current_shape(&self) -> Shape {
        self.shape
    }

    /// Switches to the next shape in the cycle and requests a redraw.
    pub fn advance(&mut self) {
        self.shape = self.shape.next();
        self.needs_redraw = true;
    }

    /// Returns whether a redraw was requested since the last call, and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Geometry of the current shape inside a `size` × `size` box.
    pub fn outline(&self, size: f32) -> Outline {
        Outline::of(self.shape, size)
    }

    /// Vertical offset in pixels; positive is downward.
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn set_offset_y(&mut self, offset_y: f32) {
        self.offset_y = offset_y;
    }

    /// Rotation in degrees; positive is clockwise.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn set_rotation_deg(&mut self, rotation_deg: f32) {
        self.rotation_deg = rotation_deg;
    }
}

/// The shadow under the shape. Only its horizontal scale animates.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowElement {
    scale_x: f32,
}

impl Default for ShadowElement {
    fn default() -> Self {
        Self { scale_x: 1.0 }
    }
}

impl ShadowElement {
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn set_scale_x(&mut self, scale_x: f32) {
        self.scale_x = scale_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn advance_cycles_with_period_three() {
        let mut element = ShapeElement::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(element.current_shape());
            element.advance();
        }

        assert_eq!(
            seen,
            &[
                Shape::Circle,
                Shape::Square,
                Shape::Triangle,
                Shape::Circle,
                Shape::Square,
                Shape::Triangle,
                Shape::Circle,
            ]
        );
    }

    #[test]
    fn advance_only_changes_shape() {
        let mut element = ShapeElement::new(Shape::Triangle);
        element.set_offset_y(40.0);
        element.set_rotation_deg(-60.0);

        element.advance();

        assert_eq!(element.current_shape(), Shape::Circle);
        assert_eq!(element.offset_y(), 40.0);
        assert_eq!(element.rotation_deg(), -60.0);
    }

    #[test]
    fn advance_requests_single_redraw() {
        let mut element = ShapeElement::default();
        assert!(!element.take_redraw());

        element.advance();

        assert!(element.take_redraw());
        assert!(!element.take_redraw());
    }

    #[test]
    fn current_shape_has_no_side_effects() {
        let element = ShapeElement::new(Shape::Square);
        assert_eq!(element.current_shape(), Shape::Square);
        assert_eq!(element.current_shape(), Shape::Square);
    }

    #[test]
    fn circle_outline_fills_box() {
        assert_eq!(
            Outline::of(Shape::Circle, 40.0),
            Outline::Circle {
                center: point(20.0, 20.0),
                radius: 20.0
            }
        );
    }

    #[test]
    fn square_outline_is_box() {
        let Outline::Polygon(points) = Outline::of(Shape::Square, 10.0) else {
            panic!("square should be a polygon");
        };
        assert_eq!(
            points,
            vec![
                point(0.0, 0.0),
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(0.0, 10.0)
            ]
        );
    }

    #[test]
    fn triangle_outline_is_equilateral() {
        let Outline::Polygon(points) = ShapeElement::new(Shape::Triangle).outline(30.0) else {
            panic!("triangle should be a polygon");
        };
        assert_eq!(points.len(), 3);
        for i in 0..3 {
            let side = (points[(i + 1) % 3] - points[i]).length();
            assert_relative_eq!(side, 30.0, epsilon = 0.001);
        }
    }

    #[test]
    fn shadow_starts_at_full_scale() {
        assert_eq!(ShadowElement::default().scale_x(), 1.0);
    }
}
