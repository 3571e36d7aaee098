//! Geometry helpers shared by the layout model.

/// Axis-aligned rectangle: (x0, y0, x1, y1).
///
/// The y axis follows whatever convention the layout analyser used.
pub type Rect = (f64, f64, f64, f64);

/// Anything that occupies a rectangle on the page.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

/// Returns true if `value` lies within `reference * (1 - pct) ..= reference * (1 + pct)`.
///
/// Bounds are computed literally, so a negative reference yields an empty band.
pub fn within_tolerance(value: f64, reference: f64, pct: f64) -> bool {
    value >= reference * (1.0 - pct) && reference * (1.0 + pct) >= value
}
