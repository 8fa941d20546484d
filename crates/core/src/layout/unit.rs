use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point in world space. See module-level docs in [crate::hex] for a
/// description of what world space means.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Vector2<f64> {
    fn from(other: Point2) -> Self {
        Self::new(other.x, other.y)
    }
}

/// A 3D point in world space. `x` and `y` are the same as [Point2], and `z`
/// points up out of the grid plane.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
#[serde(default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drop the vertical component
    pub fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}
