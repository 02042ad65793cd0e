/// Orthographic projection onto the axis-aligned view planes
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

use crate::error::ParseAxisError;
use crate::geometry::Vertex;
use crate::line::GridPoint;

/// The spatial axis dropped by the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewAxis {
    /// Side view: screen shows (y, z)
    X,
    /// Front view: screen shows (x, z)
    Y,
    /// Top view: screen shows (x, y)
    #[default]
    Z,
}

impl ViewAxis {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(ViewAxis::X),
            'y' => Some(ViewAxis::Y),
            'z' => Some(ViewAxis::Z),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ViewAxis::X => 'X',
            ViewAxis::Y => 'Y',
            ViewAxis::Z => 'Z',
        }
    }
}

impl fmt::Display for ViewAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for ViewAxis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseAxisError(s.to_string())),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

/// Zoom divisor, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Scale(i64);

impl Scale {
    /// Non-positive values collapse to 1.
    pub fn new(value: i64) -> Self {
        Self(value.max(1))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer division rounding toward negative infinity
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Project a vertex onto the plane orthogonal to `axis`.
///
/// The camera offset is subtracted before dividing by the scale, and the
/// division floors so negative offsets land on the correct cell. The
/// subtraction saturates at the `i64` bounds; such points are far off any
/// canvas either way.
pub fn project(vertex: &Vertex, axis: ViewAxis, camera: &Point3<i64>, scale: Scale) -> GridPoint {
    let s = scale.get();
    let x = vertex.x.saturating_sub(camera.x);
    let y = vertex.y.saturating_sub(camera.y);
    let z = vertex.z.saturating_sub(camera.z);
    let (u, v) = match axis {
        ViewAxis::Z => (x, y),
        ViewAxis::X => (y, z),
        ViewAxis::Y => (x, z),
    };
    GridPoint::new(floor_div(u, s), floor_div(v, s))
}
