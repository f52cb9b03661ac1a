use crate::geometry::primitives::Point;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Fails unless `x_min < x_max` and `y_min < y_max`, beyond floating point tolerance.
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            FPA(x_min) < FPA(x_max) && FPA(y_min) < FPA(y_max),
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its lower-left corner at `corner`, extending `width` along x and `height` along y.
    pub fn try_from_corner(corner: Point, width: f64, height: f64) -> Result<Self> {
        Rect::try_new(corner.0, corner.1, corner.0 + width, corner.1 + height)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns the smallest rectangle containing both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    /// Same dimensions and position as `other`, within floating point tolerance.
    pub fn almost_eq(&self, other: &Rect) -> bool {
        FPA(self.x_min) == FPA(other.x_min)
            && FPA(self.y_min) == FPA(other.y_min)
            && FPA(self.x_max) == FPA(other.x_max)
            && FPA(self.y_max) == FPA(other.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_rectangles() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(Rect::try_new(0.0, 2.0, 1.0, 1.0).is_err());
        assert!(Rect::try_from_corner(Point::ORIGIN, 5.0, -1.0).is_err());
        assert!(Rect::try_from_corner(Point::ORIGIN, 1e-20, 1.0).is_err());
        assert!(Rect::try_from_corner(Point::ORIGIN, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn extends_from_lower_left_corner() {
        let r = Rect::try_from_corner(Point(1.0, 2.0), 5.0, 10.0).unwrap();
        assert_eq!((r.x_min, r.y_min, r.x_max, r.y_max), (1.0, 2.0, 6.0, 12.0));
        assert_eq!(r.area(), 50.0);
    }

    #[test]
    fn scale_around_center() {
        let r = Rect::try_new(0.0, 0.0, 10.0, 4.0).unwrap();
        let s = r.scale(1.5);
        assert!(s.almost_eq(&Rect::try_new(-2.5, -1.0, 12.5, 5.0).unwrap()));
    }
}
