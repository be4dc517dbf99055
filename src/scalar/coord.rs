use geo_traits::{CoordTrait, Dimensions};

/// A 2D or 3D coordinate.
///
/// A `z` of `None` or NaN marks the coordinate as 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    /// A 2D coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// A coordinate with a Z value. A NaN `z` makes it 2D.
    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// The elevation, if this coordinate is 3D.
    pub fn z(&self) -> Option<f64> {
        self.z.filter(|z| !z.is_nan())
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_xyz(x, y, z)
    }
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        if self.z().is_some() {
            Dimensions::Xyz
        } else {
            Dimensions::Xy
        }
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match (n, self.z()) {
            (0, _) => self.x,
            (1, _) => self.y,
            (2, Some(z)) => z,
            _ => panic!("Coord index {n} out of bounds"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nan_z_is_2d() {
        let coord = Coord::new_xyz(1., 2., f64::NAN);
        assert_eq!(coord.dim(), Dimensions::Xy);
        assert_eq!(coord.z(), None);
        assert_eq!(coord.nth(2), None);
    }

    #[test]
    fn third_ordinate_is_z() {
        let coord = Coord::from((1., 2., 3.));
        assert_eq!(coord.dim(), Dimensions::Xyz);
        assert_eq!(coord.nth_or_panic(2), 3.);
    }
}
