//! Oriented planes, point classification and polygon splitting.

use crate::float_types::Real;
use crate::mesh::polygon::Polygon;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

// Classification bits. A polygon's class is the OR of its vertices' classes,
// so SPANNING is exactly FRONT | BACK.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// A plane `dot(normal, p) == w`.
///
/// The normal is **not** normalized. Planes built from three points keep the
/// raw cross product, so the classification epsilon is measured in units of
/// `|normal| * distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub w: Real,
}

impl Default for Plane {
    /// The invalid all-zero plane.
    fn default() -> Self {
        Plane {
            normal: Vector3::zeros(),
            w: 0.0,
        }
    }
}

impl Plane {
    /// Create a plane from a normal and offset, both copied verbatim.
    pub const fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane { normal, w }
    }

    /// Create a plane through three points.
    /// The normal direction follows the right-hand rule: (b-a) × (c-a).
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Self {
        let normal = (b - a).cross(&(c - a));
        let w = normal.dot(&a.coords);
        Plane { normal, w }
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    /// A plane can split space only if its normal has non-zero length.
    pub fn is_valid(&self) -> bool {
        self.normal.norm() > 0.0
    }

    /// Flip the plane in place (reverse normal and offset).
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Classify a point as [`FRONT`], [`BACK`] or [`COPLANAR`].
    ///
    /// A point whose signed value lies exactly on `±epsilon` is still coplanar.
    pub fn orient_point(&self, point: &Point3<Real>, epsilon: Real) -> i8 {
        let t = self.normal.dot(&point.coords) - self.w;
        if t < -epsilon {
            BACK
        } else if t > epsilon {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Classify a polygon with respect to the plane.
    /// Returns a bitmask of COPLANAR, FRONT, and BACK.
    pub fn classify_polygon<S: Clone>(&self, polygon: &Polygon<S>, epsilon: Real) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos, epsilon))
    }

    /// Splits a polygon by this plane, returning four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    ///
    /// Coplanar polygons are sorted by whether their own normal points the same
    /// way as this plane's. Spanning polygons are cut along the plane; a cut
    /// piece with fewer than three vertices is dropped.
    #[allow(clippy::type_complexity)]
    pub fn split_polygon<S: Clone + Send + Sync + Debug>(
        &self,
        polygon: &Polygon<S>,
        epsilon: Real,
    ) -> (
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
    ) {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos, epsilon))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let vcount = polygon.vertices.len();
                let mut split_front = Vec::with_capacity(vcount + 1);
                let mut split_back = Vec::with_capacity(vcount + 1);

                for i in 0..vcount {
                    let j = (i + 1) % vcount;
                    let (ti, tj) = (types[i], types[j]);
                    let vi = &polygon.vertices[i];
                    let vj = &polygon.vertices[j];

                    if ti != BACK {
                        split_front.push(*vi);
                    }
                    if ti != FRONT {
                        split_back.push(*vi);
                    }

                    if (ti | tj) == SPANNING {
                        let t = (self.w - self.normal.dot(&vi.pos.coords))
                            / self.normal.dot(&(vj.pos - vi.pos));
                        let v = vi.interpolate(vj, t);
                        split_front.push(v);
                        split_back.push(v);
                    }
                }

                if split_front.len() >= 3 {
                    front.push(Polygon::from_split(split_front, polygon.metadata.clone()));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::from_split(split_back, polygon.metadata.clone()));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }
}
