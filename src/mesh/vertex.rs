//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector2, Vector3, Vector4};

/// A vertex of a polygon, holding position, normal, texture coordinate and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Vector2<Real>,
    /// RGBA color, also usable as a free-form per-vertex tag.
    pub color: Vector4<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`] with uv `(0, 0)` and opaque white color.
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it will be **copied
    ///   verbatim**, the BSP code never reads it.
    pub fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex {
            pos,
            normal,
            uv: Vector2::zeros(),
            color: Vector4::repeat(1.0),
        }
    }

    /// Replace the texture coordinate.
    pub fn with_uv(mut self, uv: Vector2<Real>) -> Self {
        self.uv = uv;
        self
    }

    /// Replace the color.
    pub fn with_color(mut self, color: Vector4<Real>) -> Self {
        self.color = color;
        self
    }

    /// Flip vertex normal in place.
    ///
    /// # Example
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use csgbsp::mesh::vertex::Vertex;
    /// let mut v = Vertex::new(Point3::new(1.0, 2.0, 3.0), Vector3::x());
    /// v.flip();
    /// assert_eq!(v.pos, Point3::new(1.0, 2.0, 3.0), "position remains the same");
    /// assert_eq!(v.normal, -Vector3::x(), "the normal is negated");
    /// ```
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Apply an affine transform. The normal is mapped by `normal_matrix` (the
    /// inverse transpose of `mat`) and renormalized unless it is zero; with
    /// `None` it is left alone.
    pub fn transform(&mut self, mat: &Matrix4<Real>, normal_matrix: Option<&Matrix4<Real>>) {
        self.pos = mat.transform_point(&self.pos);
        if let Some(n) = normal_matrix {
            let normal = n.transform_vector(&self.normal);
            self.normal = normal.try_normalize(0.0).unwrap_or(normal);
        }
    }

    /// Return the vertex between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Position, normal and uv are linearly interpolated. The color is the plain
    /// average of both endpoints regardless of `t`.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        // p(t) = p0 + t * (p1 - p0)
        let pos = self.pos + (other.pos - self.pos) * t;
        let normal = self.normal + (other.normal - self.normal) * t;
        let uv = self.uv + (other.uv - self.uv) * t;
        let color = (self.color + other.color) * 0.5;

        Vertex {
            pos,
            normal,
            uv,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_lerps_attributes_but_averages_color() {
        let a = Vertex::new(Point3::origin(), Vector3::x())
            .with_uv(Vector2::new(0.0, 0.0))
            .with_color(Vector4::new(1.0, 0.0, 0.0, 1.0));
        let b = Vertex::new(Point3::new(4.0, 0.0, 0.0), Vector3::y())
            .with_uv(Vector2::new(1.0, 2.0))
            .with_color(Vector4::new(0.0, 0.0, 1.0, 0.0));

        let v = a.interpolate(&b, 0.25);
        assert_eq!(v.pos, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(v.normal, Vector3::new(0.75, 0.25, 0.0));
        assert_eq!(v.uv, Vector2::new(0.25, 0.5));
        assert_eq!(v.color, Vector4::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn transform_keeps_zero_normal_finite() {
        let a = Vertex::new(Point3::origin(), Vector3::x());
        let b = Vertex::new(Point3::new(2.0, 0.0, 0.0), -Vector3::x());
        let mut v = a.interpolate(&b, 0.5);
        assert_eq!(v.normal, Vector3::zeros());

        let scale = Matrix4::new_scaling(2.0);
        let inverse_transpose = scale.try_inverse().unwrap().transpose();
        v.transform(&scale, Some(&inverse_transpose));
        assert_eq!(v.pos, Point3::new(2.0, 0.0, 0.0));
        assert_eq!(v.normal, Vector3::zeros());
    }

    #[test]
    fn transform_renormalizes_normal() {
        let mut v = Vertex::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 3.0, 0.0));
        let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 2.0, 1.0));
        let inverse_transpose = scale.try_inverse().unwrap().transpose();
        v.transform(&scale, Some(&inverse_transpose));
        assert_eq!(v.pos, Point3::new(1.0, 2.0, 1.0));
        assert_eq!(v.normal, Vector3::y());
    }

    #[test]
    fn interpolate_endpoints() {
        let a = Vertex::new(Point3::new(1.0, 2.0, 3.0), Vector3::z());
        let b = Vertex::new(Point3::new(-1.0, 0.0, 5.0), -Vector3::z());
        assert_eq!(a.interpolate(&b, 0.0).pos, a.pos);
        assert_eq!(a.interpolate(&b, 1.0).pos, b.pos);
    }
}
