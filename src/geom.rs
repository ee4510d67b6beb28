/// 2D collision primitives.
///
/// Everything works in screen-space pixels: origin at the top-left corner,
/// y growing downward.  Hitboxes are axis-aligned, but intersection goes
/// through a general separating-axis test over the 4-corner polygons so the
/// orchestrator composes one primitive for every hazard pair.

/// A point or size in screen-space pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }
}

/// An axis-aligned hitbox: top-left corner plus extents (both ≥ 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub pos: Vector,
    pub w: f64,
    pub h: f64,
}

impl HitBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        HitBox {
            pos: Vector::new(x, y),
            w,
            h,
        }
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.h
    }

    /// The box as a 4-point polygon, counter-clockwise from the top-left.
    pub fn corners(&self) -> [Vector; 4] {
        [
            Vector::new(self.pos.x, self.pos.y),
            Vector::new(self.pos.x, self.pos.y + self.h),
            Vector::new(self.pos.x + self.w, self.pos.y + self.h),
            Vector::new(self.pos.x + self.w, self.pos.y),
        ]
    }

    /// The same box shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> HitBox {
        HitBox {
            pos: Vector::new(self.pos.x + dx, self.pos.y + dy),
            ..*self
        }
    }
}

/// Separating-axis test between two convex polygons.
///
/// The polygons intersect unless some edge normal of either one separates
/// the two projection intervals.  Touching edges count as intersecting
/// (the projections overlap in a single point, so no strict gap exists).
pub fn polygons_intersect(a: &[Vector], b: &[Vector]) -> bool {
    !has_separating_axis(a, b) && !has_separating_axis(b, a)
}

/// Convenience wrapper for the common hitbox-vs-hitbox case.
pub fn boxes_intersect(a: &HitBox, b: &HitBox) -> bool {
    polygons_intersect(&a.corners(), &b.corners())
}

/// True if any edge normal of `edges_of` separates the two polygons.
fn has_separating_axis(edges_of: &[Vector], other: &[Vector]) -> bool {
    for i in 0..edges_of.len() {
        let p = edges_of[i];
        let q = edges_of[(i + 1) % edges_of.len()];
        // Perpendicular of the edge vector — no need to normalize for
        // an overlap comparison.
        let axis = Vector::new(q.y - p.y, p.x - q.x);

        let (min_a, max_a) = project(edges_of, axis);
        let (min_b, max_b) = project(other, axis);

        if max_a < min_b || max_b < min_a {
            return true;
        }
    }
    false
}

/// Projection interval of a polygon onto an (unnormalized) axis.
fn project(poly: &[Vector], axis: Vector) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in poly {
        let d = v.x * axis.x + v.y * axis.y;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}
