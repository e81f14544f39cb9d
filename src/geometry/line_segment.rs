use crate::math::intersect_2d::segments_intersect;

use super::Point;

/// Trait for entities bounded by two mutable endpoints.
///
/// This is the raw representation: no derived quantities are cached.
pub trait LineSegment {
    fn x1(&self) -> f32;
    fn y1(&self) -> f32;
    fn x2(&self) -> f32;
    fn y2(&self) -> f32;

    fn set_x1(&mut self, value: f32);
    fn set_y1(&mut self, value: f32);
    fn set_x2(&mut self, value: f32);
    fn set_y2(&mut self, value: f32);

    /// Returns the first endpoint.
    fn p1(&self) -> Point {
        Point::new(self.x1(), self.y1())
    }

    /// Returns the second endpoint.
    fn p2(&self) -> Point {
        Point::new(self.x2(), self.y2())
    }

    /// Overwrites the first endpoint.
    fn set_p1(&mut self, point: Point) {
        self.set_x1(point.x);
        self.set_y1(point.y);
    }

    /// Overwrites the second endpoint.
    fn set_p2(&mut self, point: Point) {
        self.set_x2(point.x);
        self.set_y2(point.y);
    }

    /// Inclusive intersection test against another segment.
    ///
    /// Reads raw endpoints only, so the result never depends on cached state.
    fn intersects<S: LineSegment + ?Sized>(&self, other: &S) -> bool {
        segments_intersect(self.p1(), self.p2(), other.p1(), other.p2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare endpoint holder, no cache.
    #[derive(Default)]
    struct Raw {
        coords: [f32; 4],
    }

    impl LineSegment for Raw {
        fn x1(&self) -> f32 {
            self.coords[0]
        }
        fn y1(&self) -> f32 {
            self.coords[1]
        }
        fn x2(&self) -> f32 {
            self.coords[2]
        }
        fn y2(&self) -> f32 {
            self.coords[3]
        }
        fn set_x1(&mut self, value: f32) {
            self.coords[0] = value;
        }
        fn set_y1(&mut self, value: f32) {
            self.coords[1] = value;
        }
        fn set_x2(&mut self, value: f32) {
            self.coords[2] = value;
        }
        fn set_y2(&mut self, value: f32) {
            self.coords[3] = value;
        }
    }

    #[test]
    fn endpoint_views_write_through() {
        let mut raw = Raw::default();
        raw.set_p1(Point::new(1.0, 2.0));
        raw.set_p2(Point::new(3.0, 4.0));
        assert_eq!(raw.coords, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(raw.p1(), Point::new(1.0, 2.0));
        assert_eq!(raw.p2(), Point::new(3.0, 4.0));
    }

    #[test]
    fn intersects_works_on_raw_segments() {
        let a = Raw {
            coords: [0.0, 0.0, 10.0, 10.0],
        };
        let b = Raw {
            coords: [0.0, 10.0, 10.0, 0.0],
        };
        let c = Raw {
            coords: [20.0, 0.0, 30.0, 0.0],
        };
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
