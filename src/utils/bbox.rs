use crate::{EstimateClose, EPS};
use log::trace;

/// Bounding box in the format (x1, y1, x2, y2)
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` is the bottom-right corner
/// in image coordinates (the y axis grows downward). The box is kept normalized:
/// inverted coordinates passed to the constructors are swapped, so the width and
/// the height are never negative.
///
#[derive(Clone, Default, Debug, Copy)]
pub struct BoundingBox {
    _x1: f32,
    _y1: f32,
    _x2: f32,
    _y2: f32,
}

impl BoundingBox {
    /// Constructor
    ///
    /// # Parameters
    /// * `x1`, `y1` - top-left corner
    /// * `x2`, `y2` - bottom-right corner
    ///
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        if x2 < x1 || y2 < y1 {
            trace!(
                "Malformed box ({}, {}, {}, {}) is normalized",
                x1,
                y1,
                x2,
                y2
            );
        }
        let (x1, x2) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
        Self {
            _x1: x1,
            _y1: y1,
            _x2: x2,
            _y2: y2,
        }
    }

    /// Constructor from the left-top corner and the box dimensions
    ///
    pub fn xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn x1(&self) -> f32 {
        self._x1
    }

    pub fn y1(&self) -> f32 {
        self._y1
    }

    pub fn x2(&self) -> f32 {
        self._x2
    }

    pub fn y2(&self) -> f32 {
        self._y2
    }

    pub fn width(&self) -> f32 {
        self._x2 - self._x1
    }

    pub fn height(&self) -> f32 {
        self._y2 - self._y1
    }

    /// Box area, never negative
    ///
    pub fn area(&self) -> f32 {
        (self.width() * self.height()).max(0.0)
    }

    fn area_f64(&self) -> f64 {
        (self.width() as f64 * self.height() as f64).max(0.0)
    }

    pub fn as_ltrb(&self) -> [f32; 4] {
        [self._x1, self._y1, self._x2, self._y2]
    }

    /// Area of the overlapping region of two boxes. Disjoint or touching boxes give `0.0`.
    ///
    pub fn intersection(l: &BoundingBox, r: &BoundingBox) -> f64 {
        let (x1, y1) = (l._x1.max(r._x1), l._y1.max(r._y1));
        let (x2, y2) = (l._x2.min(r._x2), l._y2.min(r._y2));

        let int_width = (x2 - x1).max(0.0) as f64;
        let int_height = (y2 - y1).max(0.0) as f64;

        int_width * int_height
    }

    /// Intersection over union of two boxes
    ///
    /// The result is always within `[0.0, 1.0]`. When the union is empty (both boxes have zero
    /// area) or the arithmetic produces NaN, the overlap is reported as `0.0`, so degenerate
    /// boxes never win a comparison.
    ///
    pub fn iou(l: &BoundingBox, r: &BoundingBox) -> f32 {
        // a zero-area (or NaN) box overlaps nothing
        if l.area() <= 0.0 || r.area() <= 0.0 {
            return 0.0;
        }
        let intersection = BoundingBox::intersection(l, r);
        let union = l.area_f64() + r.area_f64() - intersection;
        if union.is_nan() || union <= 0.0 {
            return 0.0;
        }
        let res = intersection / union;
        if res.is_nan() {
            0.0
        } else {
            res.clamp(0.0, 1.0) as f32
        }
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(ltrb: [f32; 4]) -> Self {
        BoundingBox::new(ltrb[0], ltrb[1], ltrb[2], ltrb[3])
    }
}

impl EstimateClose for BoundingBox {
    /// Allows comparing bboxes
    ///
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self._x1 - other._x1).abs() < eps
            && (self._y1 - other._y1).abs() < eps
            && (self._x2 - other._x2).abs() < eps
            && (self._y2 - other._y2).abs() < eps
    }
}

impl PartialEq<Self> for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.almost_same(other, EPS)
    }
}
